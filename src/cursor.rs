use std::borrow::Cow;

/// A byte offset into a borrowed document.
///
/// Every reader takes the cursor by `&mut` and leaves it on the last byte it
/// consumed, so the caller sees exactly how far parsing got.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    input: &'a str,
    position: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(input: &'a str) -> Self {
        Self { input, position: 0 }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    /// Move to `position`. Positions past the end are clamped to the end of
    /// the input.
    pub fn set_position(&mut self, position: usize) {
        self.position = position.min(self.input.len());
    }

    pub fn advance(&mut self, amt: usize) {
        self.set_position(self.position + amt);
    }

    /// Number of bytes from the cursor (inclusive) to the end of the input.
    pub fn remaining(&self) -> usize {
        self.input.len() - self.position
    }

    /// The byte under the cursor. Returns None at end of input.
    pub fn peek(&self) -> Option<u8> {
        self.input.as_bytes().get(self.position).copied()
    }

    pub fn bytes(&self) -> &'a [u8] {
        self.input.as_bytes()
    }

    /// The text between two offsets, clamped to the input. Slices that split
    /// a character are decoded lossily instead of panicking.
    pub fn text(&self, start: usize, end: usize) -> Cow<'a, str> {
        let end = end.min(self.input.len());
        let start = start.min(end);
        match self.input.get(start..end) {
            Some(text) => Cow::Borrowed(text),
            None => String::from_utf8_lossy(&self.input.as_bytes()[start..end]),
        }
    }
}
