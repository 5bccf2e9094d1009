//! The error returned when a document cannot be parsed.

use std::num::{ParseFloatError, ParseIntError};

use thiserror::Error;

/// Alias for a `Result` with the error type [`ParseError`].
pub type Result<T> = std::result::Result<T, ParseError>;

/// Everything that can go wrong while reading a document.
///
/// Offsets are byte offsets into the input. The first error aborts the whole
/// parse; there is no recovery and no partial result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("cannot parse value starting at index {offset}")]
    UnparsableValue { offset: usize },

    #[error("reached end of input without closing object started at index {start}")]
    UnterminatedObject { start: usize },

    #[error("reached end of input without closing array started at index {start}")]
    UnterminatedArray { start: usize },

    #[error("reached end of input without closing string started at index {start}")]
    UnterminatedString { start: usize },

    #[error("reached end of input while parsing number, starting at index {start}")]
    UnterminatedNumber { start: usize },

    #[error("expected ':' at index {offset}")]
    ExpectedColon { offset: usize },

    #[error("incorrectly trying to define new key at index {offset}")]
    MalformedObject { offset: usize },

    #[error("incorrectly trying to define new value at index {offset}")]
    MalformedArray { offset: usize },

    #[error("string must start with '\"', at index {offset}")]
    ExpectedStringStart { offset: usize },

    #[error("unexpected end of input at index {offset}")]
    UnexpectedEof { offset: usize },

    #[error("unexpected null value {literal:?} at index {offset}")]
    UnexpectedNullLiteral { literal: String, offset: usize },

    #[error("invalid integer {literal:?}")]
    InvalidInteger {
        literal: String,
        #[source]
        source: ParseIntError,
    },

    #[error("invalid float {literal:?}")]
    InvalidFloat {
        literal: String,
        #[source]
        source: ParseFloatError,
    },

    #[error("invalid boolean {literal:?}")]
    InvalidBool { literal: String },

    #[error("input is not valid UTF-8 at index {offset}")]
    InvalidUtf8 { offset: usize },
}

impl ParseError {
    /// The byte offset the error was detected at.
    ///
    /// Literal format failures (numbers and booleans) only know the text they
    /// failed on, so they return `None`.
    ///
    /// ```
    /// # use json_cursor::{parse, ParseError};
    /// let err = parse(r#"{"a" 1}"#).unwrap_err();
    /// assert_eq!(err, ParseError::ExpectedColon { offset: 5 });
    /// assert_eq!(err.offset(), Some(5));
    /// ```
    pub fn offset(&self) -> Option<usize> {
        match *self {
            Self::UnparsableValue { offset }
            | Self::ExpectedColon { offset }
            | Self::MalformedObject { offset }
            | Self::MalformedArray { offset }
            | Self::ExpectedStringStart { offset }
            | Self::UnexpectedEof { offset }
            | Self::UnexpectedNullLiteral { offset, .. }
            | Self::InvalidUtf8 { offset } => Some(offset),
            Self::UnterminatedObject { start }
            | Self::UnterminatedArray { start }
            | Self::UnterminatedString { start }
            | Self::UnterminatedNumber { start } => Some(start),
            Self::InvalidInteger { .. } | Self::InvalidFloat { .. } | Self::InvalidBool { .. } => {
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset() {
        assert_eq!(ParseError::UnparsableValue { offset: 3 }.offset(), Some(3));
        assert_eq!(ParseError::UnterminatedArray { start: 7 }.offset(), Some(7));
        assert_eq!(
            ParseError::InvalidBool {
                literal: "frue".to_owned()
            }
            .offset(),
            None
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(
            ParseError::UnterminatedString { start: 6 }.to_string(),
            "reached end of input without closing string started at index 6"
        );
        assert_eq!(
            ParseError::UnexpectedNullLiteral {
                literal: "nul]".to_owned(),
                offset: 1
            }
            .to_string(),
            "unexpected null value \"nul]\" at index 1"
        );

        let source = "1x".parse::<i64>().unwrap_err();
        let err = ParseError::InvalidInteger {
            literal: "1x".to_owned(),
            source,
        };
        assert_eq!(err.to_string(), "invalid integer \"1x\"");
        assert!(std::error::Error::source(&err).is_some());
    }
}
