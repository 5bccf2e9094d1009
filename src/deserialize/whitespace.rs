use crate::cursor::Cursor;

/// Return the offset of the first byte at or after `start` that is not a
/// space, tab, or newline, or `input.len()` if there is none. Carriage
/// returns are not whitespace.
pub fn skip_whitespace(input: &[u8], start: usize) -> usize {
    let mut index = start;
    while let Some(byte) = input.get(index) {
        match byte {
            b' ' | b'\t' | b'\n' => index += 1,
            _ => break,
        }
    }
    index.min(input.len())
}

/// Step past the byte under the cursor, then past any whitespace after it.
pub fn skip_whitespace_after(cursor: &mut Cursor) {
    let next = skip_whitespace(cursor.bytes(), cursor.position() + 1);
    cursor.set_position(next);
}
