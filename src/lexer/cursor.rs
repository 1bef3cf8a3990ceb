use crate::error::{ErrorKind, Result};

/// Forward-only read position over a borrowed program
///
/// The position never moves backwards and never passes the end of the source.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    /// Program bytes
    source: &'a [u8],
    /// Current position in source
    current: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor at the start of `source`
    pub fn new(source: &'a str) -> Self {
        Cursor {
            source: source.as_bytes(),
            current: 0,
        }
    }

    /// Byte offset of the next unread byte
    pub fn position(&self) -> usize {
        self.current
    }

    /// Returns true once every byte has been consumed
    pub fn is_at_end(&self) -> bool {
        self.current >= self.source.len()
    }

    /// Returns the next byte without consuming it, or `0` at end of input
    pub fn peek(&self) -> u8 {
        if self.is_at_end() {
            0
        } else {
            self.source[self.current]
        }
    }

    /// Consumes and returns the next byte
    pub fn advance(&mut self) -> Result<u8> {
        if self.is_at_end() {
            return Err(ErrorKind::UnexpectedEof);
        }
        let c = self.source[self.current];
        self.current += 1;
        Ok(c)
    }

    /// Skips a run of whitespace; stops quietly at end of input
    pub fn skip_whitespace(&mut self) {
        while is_whitespace(self.peek()) {
            self.current += 1;
        }
    }
}

/// C `isspace` classification: space, `\t`, `\n`, `\v`, `\f`, `\r`
fn is_whitespace(c: u8) -> bool {
    matches!(c, b' ' | b'\t' | b'\n' | 0x0b | 0x0c | b'\r')
}
