use crate::{
    cursor::Cursor,
    error::{ParseError, Result},
    value::Value,
};

mod array;
mod literal;
mod number;
mod object;
mod string;

use array::parse_array;
use literal::{parse_bool, parse_null};
use number::parse_number;
use object::parse_object;
use string::parse_string;

/// Pick a reader based on the byte under the cursor, which must not be
/// whitespace. The chosen reader is responsible for validating the rest of
/// the token. End of input is reported like any other unreadable byte.
pub fn parse_value(cursor: &mut Cursor) -> Result<Value> {
    let offset = cursor.position();
    let first_byte = cursor.peek();
    tracing::trace!(offset, byte = ?first_byte.map(char::from), "parsing value");

    match first_byte {
        Some(b'"') => Ok(Value::String(parse_string(cursor)?)),
        Some(b'-' | b'.' | b'0'..=b'9') => parse_number(cursor),
        Some(b'[') => Ok(Value::Array(parse_array(cursor)?)),
        Some(b'{') => Ok(Value::Object(parse_object(cursor)?)),
        Some(b't' | b'f') => Ok(Value::Bool(parse_bool(cursor)?)),
        Some(b'n') => parse_null(cursor).map(|()| Value::Null),
        Some(_) | None => Err(ParseError::UnparsableValue { offset }),
    }
}
