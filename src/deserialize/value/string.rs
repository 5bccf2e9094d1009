use crate::{
    cursor::Cursor,
    error::{ParseError, Result},
};

/// Read the text between a pair of double quotes. The cursor is left on the
/// closing quote.
///
/// Escape sequences are not interpreted: the string ends at the first `"`
/// after the opening one, even if it is preceded by a backslash.
pub fn parse_string(cursor: &mut Cursor) -> Result<String> {
    if cursor.peek() != Some(b'"') {
        return Err(ParseError::ExpectedStringStart {
            offset: cursor.position(),
        });
    }

    cursor.advance(1);
    let start = cursor.position();
    loop {
        match cursor.peek() {
            Some(b'"') => break,
            Some(_) => cursor.advance(1),
            None => return Err(ParseError::UnterminatedString { start }),
        }
    }

    Ok(cursor.text(start, cursor.position()).into_owned())
}
