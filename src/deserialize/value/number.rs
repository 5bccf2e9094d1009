use crate::{
    cursor::Cursor,
    error::{ParseError, Result},
    value::Value,
};

/// Bytes that end a number.
const DELIMITERS: [u8; 6] = [b',', b'\t', b'\n', b'}', b']', b' '];

/// Read a number up to the next delimiter. The cursor is left on the last
/// byte of the number, not on the delimiter.
///
/// A `.` anywhere in the literal makes it a float, otherwise it is read as an
/// `i64`. Exponents alone do not make a float, and a number that runs into
/// the end of the input is an error.
pub fn parse_number(cursor: &mut Cursor) -> Result<Value> {
    let start = cursor.position();
    let mut is_float = false;
    loop {
        let Some(byte) = cursor.peek() else {
            return Err(ParseError::UnterminatedNumber { start });
        };
        if DELIMITERS.contains(&byte) {
            break;
        }
        if byte == b'.' {
            is_float = true;
        }
        cursor.advance(1);
    }

    let end = cursor.position();
    // rewind to the last byte of the number to leave the cursor where the caller expects it
    cursor.set_position(end.saturating_sub(1).max(start));

    let literal = cursor.text(start, end);
    if is_float {
        match literal.parse() {
            Ok(number) => Ok(Value::Float(number)),
            Err(source) => Err(ParseError::InvalidFloat {
                literal: literal.into_owned(),
                source,
            }),
        }
    } else {
        match literal.parse() {
            Ok(number) => Ok(Value::Int(number)),
            Err(source) => Err(ParseError::InvalidInteger {
                literal: literal.into_owned(),
                source,
            }),
        }
    }
}
