use crate::{
    cursor::Cursor,
    error::{ParseError, Result},
};

/// Read `true` or `false`, depending on the byte under the cursor. The cursor
/// is left on the last byte of the literal.
pub fn parse_bool(cursor: &mut Cursor) -> Result<bool> {
    let start = cursor.position();
    let length = match cursor.peek() {
        Some(b't') => 4,
        Some(b'f') => 5,
        _ => return Err(ParseError::UnparsableValue { offset: start }),
    };

    if cursor.remaining() < length {
        return Err(ParseError::UnexpectedEof { offset: start });
    }
    cursor.advance(length - 1);

    let literal = cursor.text(start, start + length);
    literal.parse().map_err(|_| ParseError::InvalidBool {
        literal: literal.into_owned(),
    })
}

/// Read `null`. The cursor is left on the final `l`.
pub fn parse_null(cursor: &mut Cursor) -> Result<()> {
    let offset = cursor.position();
    if cursor.remaining() < 4 {
        return Err(ParseError::UnexpectedEof { offset });
    }

    let literal = cursor.text(offset, offset + 4);
    if literal != "null" {
        return Err(ParseError::UnexpectedNullLiteral {
            literal: literal.into_owned(),
            offset,
        });
    }
    cursor.advance(3);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bool() {
        let mut cursor = Cursor::new("true, ");
        assert!(parse_bool(&mut cursor).unwrap());
        assert_eq!(cursor.position(), 3);

        let mut cursor = Cursor::new("false");
        assert!(!parse_bool(&mut cursor).unwrap());
        assert_eq!(cursor.position(), 4);
    }

    #[test]
    fn test_bool_errors() {
        let mut cursor = Cursor::new("tru");
        assert_eq!(
            parse_bool(&mut cursor),
            Err(ParseError::UnexpectedEof { offset: 0 })
        );

        let mut cursor = Cursor::new("True");
        assert_eq!(
            parse_bool(&mut cursor),
            Err(ParseError::UnparsableValue { offset: 0 })
        );

        let mut cursor = Cursor::new("fals]");
        assert_eq!(
            parse_bool(&mut cursor),
            Err(ParseError::InvalidBool {
                literal: "fals]".to_owned()
            })
        );

        // the literal would end inside a multi-byte character
        let mut cursor = Cursor::new("t\u{e9}\u{e9}");
        assert_eq!(
            parse_bool(&mut cursor),
            Err(ParseError::InvalidBool {
                literal: "t\u{e9}\u{fffd}".to_owned()
            })
        );
    }

    #[test]
    fn test_parse_null() {
        let mut cursor = Cursor::new("null]");
        parse_null(&mut cursor).unwrap();
        assert_eq!(cursor.position(), 3);

        let mut cursor = Cursor::new("nul");
        assert_eq!(
            parse_null(&mut cursor),
            Err(ParseError::UnexpectedEof { offset: 0 })
        );

        let mut cursor = Cursor::new("[nULL]");
        cursor.set_position(1);
        assert_eq!(
            parse_null(&mut cursor),
            Err(ParseError::UnexpectedNullLiteral {
                literal: "nULL".to_owned(),
                offset: 1
            })
        );
    }
}
