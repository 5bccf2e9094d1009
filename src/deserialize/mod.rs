mod value;
mod whitespace;

use crate::{cursor::Cursor, error::Result, value::Value};
use value::parse_value;
use whitespace::skip_whitespace;

/// Parse the first value of `input`, skipping leading whitespace.
///
/// Trailing content after the value is not inspected.
pub fn parse_document(input: &str) -> Result<Value> {
    tracing::debug!(len = input.len(), "parsing document");

    let mut cursor = Cursor::new(input);
    cursor.set_position(skip_whitespace(cursor.bytes(), 0));

    match parse_value(&mut cursor) {
        Ok(value) => {
            tracing::debug!(
                value_type = value.value_type(),
                end = cursor.position(),
                "parsed document"
            );
            Ok(value)
        }
        Err(err) => {
            tracing::debug!(%err, "failed to parse document");
            Err(err)
        }
    }
}
