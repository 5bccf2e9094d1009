use std::collections::HashMap;

use super::{Value, parse_value, string::parse_string};
use crate::{
    cursor::Cursor,
    deserialize::whitespace::skip_whitespace_after,
    error::{ParseError, Result},
};

/// Read an object of `"key": value` pairs. Later duplicates of a key replace
/// earlier ones.
///
/// The cursor is left on the closing `}`, which the caller steps over
/// together with any whitespace after the object.
pub fn parse_object(cursor: &mut Cursor) -> Result<HashMap<String, Value>> {
    let start = cursor.position();

    // skip opening brace and whitespace
    skip_whitespace_after(cursor);

    let mut object = HashMap::new();
    loop {
        match cursor.peek() {
            Some(b'}') => return Ok(object),
            Some(_) => {}
            None => return Err(ParseError::UnterminatedObject { start }),
        }

        let (key, value) = parse_key_value_pair(cursor, start)?;
        object.insert(key, value);

        skip_whitespace_after(cursor);
        match cursor.peek() {
            Some(b',') => skip_whitespace_after(cursor),
            Some(b'}') => {}
            Some(_) => {
                return Err(ParseError::MalformedObject {
                    offset: cursor.position(),
                });
            }
            None => return Err(ParseError::UnterminatedObject { start }),
        }
    }
}

fn parse_key_value_pair(cursor: &mut Cursor, start: usize) -> Result<(String, Value)> {
    let key = parse_string(cursor)?;

    // skip closing quote and whitespace before colon
    skip_whitespace_after(cursor);

    match cursor.peek() {
        Some(b':') => {}
        Some(_) => {
            return Err(ParseError::ExpectedColon {
                offset: cursor.position(),
            });
        }
        None => return Err(ParseError::UnterminatedObject { start }),
    }

    // skip colon and whitespace after it
    skip_whitespace_after(cursor);

    let value = parse_value(cursor)?;
    Ok((key, value))
}
