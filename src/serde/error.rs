//! When deserializing a JSON document goes wrong.

use std::fmt::{self, Debug, Display};

use serde::de;

use crate::ParseError;

/// Alias for a `Result` with the error type `json_cursor::serde::error::Error`.
pub type Result<T> = std::result::Result<T, Error>;

/// This type represents all possible errors that can occur when deserializing
/// a JSON document into a Rust value.
pub struct Error {
    /// This `Box` allows us to keep the size of `Error` as small as possible.
    inner: Box<InnerError>,
}

impl Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.inner.fmt(f)
    }
}

#[derive(Debug)]
enum InnerError {
    // Created by data structures through the `de::Error` trait.
    Message(String),
    Parse(ParseError),
}

impl Error {
    /// The parse error, if the document itself could not be parsed.
    ///
    /// Returns `None` if the document parsed but did not match the target
    /// type.
    pub fn as_parse_error(&self) -> Option<&ParseError> {
        match self.inner.as_ref() {
            InnerError::Parse(err) => Some(err),
            InnerError::Message(_) => None,
        }
    }
}

impl From<ParseError> for Error {
    fn from(value: ParseError) -> Self {
        Self {
            inner: Box::new(InnerError::Parse(value)),
        }
    }
}

impl de::Error for Error {
    fn custom<T: Display>(msg: T) -> Self {
        Self {
            inner: Box::new(InnerError::Message(msg.to_string())),
        }
    }
}

impl Display for Error {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        match self.inner.as_ref() {
            InnerError::Message(msg) => formatter.write_str(msg),
            InnerError::Parse(err) => write!(formatter, "{err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self.inner.as_ref() {
            InnerError::Parse(err) => Some(err),
            InnerError::Message(_) => None,
        }
    }
}
