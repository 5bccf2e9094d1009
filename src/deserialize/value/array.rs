use super::{Value, parse_value};
use crate::{
    cursor::Cursor,
    deserialize::whitespace::skip_whitespace_after,
    error::{ParseError, Result},
};

/// Read an array. The cursor is left on the closing `]`, which the caller
/// steps over together with any whitespace after the array.
pub fn parse_array(cursor: &mut Cursor) -> Result<Vec<Value>> {
    let start = cursor.position();

    // skip opening bracket and whitespace
    skip_whitespace_after(cursor);

    let mut array = Vec::new();
    loop {
        match cursor.peek() {
            Some(b']') => return Ok(array),
            Some(_) => {}
            None => return Err(ParseError::UnterminatedArray { start }),
        }

        array.push(parse_value(cursor)?);

        skip_whitespace_after(cursor);
        match cursor.peek() {
            Some(b',') => skip_whitespace_after(cursor),
            Some(b']') => {}
            Some(_) => {
                return Err(ParseError::MalformedArray {
                    offset: cursor.position(),
                });
            }
            None => return Err(ParseError::UnterminatedArray { start }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(data: &str) -> Result<Vec<Value>> {
        parse_array(&mut Cursor::new(data))
    }

    #[test]
    fn test_parse_array() {
        assert_eq!(parse("[]").unwrap(), vec![]);
        assert_eq!(parse("[ \n\t ]").unwrap(), vec![]);

        assert_eq!(
            parse("[1, 6, false, null]").unwrap(),
            vec![Value::Int(1), Value::Int(6), Value::Bool(false), Value::Null]
        );

        let data = "\
        [1
        ,  6.5 , \t  false  ,
        null, \"s\"

        ]";
        assert_eq!(
            parse(data).unwrap(),
            vec![
                Value::Int(1),
                Value::Float(6.5),
                Value::Bool(false),
                Value::Null,
                Value::String("s".to_owned())
            ]
        );

        assert_eq!(
            parse("[[], [[1]]]").unwrap(),
            vec![
                Value::Array(vec![]),
                Value::Array(vec![Value::Array(vec![Value::Int(1)])])
            ]
        );
    }

    #[test]
    fn test_closing_bracket_is_not_consumed() {
        let mut cursor = Cursor::new("[1, 2] tail");
        parse_array(&mut cursor).unwrap();
        assert_eq!(cursor.position(), 5);
        assert_eq!(cursor.peek(), Some(b']'));
    }

    #[test]
    fn test_trailing_comma() {
        assert_eq!(parse("[1, ]").unwrap(), vec![Value::Int(1)]);
    }

    #[test]
    fn test_errors() {
        assert_eq!(parse("["), Err(ParseError::UnterminatedArray { start: 0 }));
        assert_eq!(parse("[1, "), Err(ParseError::UnterminatedArray { start: 0 }));
        assert_eq!(parse("[true"), Err(ParseError::UnterminatedArray { start: 0 }));
        assert_eq!(parse("[1 2]"), Err(ParseError::MalformedArray { offset: 3 }));
        assert_eq!(parse("[null;]"), Err(ParseError::MalformedArray { offset: 5 }));
        assert_eq!(parse("[,]"), Err(ParseError::UnparsableValue { offset: 1 }));
        assert_eq!(
            parse("[[1]"),
            Err(ParseError::UnterminatedArray { start: 0 })
        );
        // the number has no delimiter before the end of input
        assert_eq!(parse("[1"), Err(ParseError::UnterminatedNumber { start: 1 }));
    }
}
