//! A small recursive-descent JSON reader.
//!
//! A document is read in one pass over an in-memory buffer with a single
//! byte cursor. Each value kind has its own reader, and the first error
//! aborts the parse with the byte offset it was found at.
//!
//! The reader is deliberately literal about a few things:
//!
//! - strings are taken verbatim between two quotes, and backslash escapes are
//!   not interpreted, so `"a\"b"` ends after `a\`;
//! - a number must be followed by `,`, `}`, `]`, a space, a tab, or a
//!   newline, so a bare `42` at the very end of the input is rejected;
//! - anything after the first complete value is ignored.
//!
//! ```
//! use json_cursor::{ParseError, Value};
//!
//! let value = json_cursor::parse(r#"{"a": 1, "b": [2, 3]}"#).unwrap();
//! assert_eq!(value["b"][1], Value::Int(3));
//!
//! let err = json_cursor::parse("42").unwrap_err();
//! assert_eq!(err, ParseError::UnterminatedNumber { start: 0 });
//! ```

mod cursor;
mod deserialize;
mod error;
mod key;
mod value;

#[cfg(feature = "serde")]
pub mod serde;


pub use error::{ParseError, Result};
pub use key::Key;
pub use value::Value;

#[cfg(feature = "serde")]
#[doc(inline)]
pub use crate::serde::de::{from_str, from_value};

/// Parse the first JSON value in `input`.
///
/// Leading spaces, tabs, and newlines are skipped. Content after the value is
/// not checked.
///
/// # Example
///
/// ```
/// # use json_cursor::Value;
/// #
/// let value = json_cursor::parse("  [true, null] trailing junk").unwrap();
/// assert_eq!(value, Value::Array(vec![Value::Bool(true), Value::Null]));
/// ```
///
/// # Errors
///
/// Returns the first [`ParseError`] encountered. There is no recovery and no
/// partial result.
pub fn parse(input: &str) -> Result<Value> {
    deserialize::parse_document(input)
}
