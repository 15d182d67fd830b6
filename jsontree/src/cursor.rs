// SPDX-License-Identifier: Apache-2.0

use crate::token::Token;

/// A code-point cursor over the raw input bytes.
///
/// The position is a byte offset that always sits on a code-point boundary
/// in `0..=data.len()`. Malformed UTF-8 is decoded as U+FFFD spanning the
/// bytes of the invalid prefix, so the cursor still makes progress.
#[derive(Debug, Clone)]
pub(crate) struct Cursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn is_at_end(&self) -> bool {
        self.pos >= self.data.len()
    }

    /// Decodes the code point under the cursor along with its byte length.
    fn decode(&self) -> Option<(char, usize)> {
        let rest = self.data.get(self.pos..)?;
        let (ch, len) = bstr::decode_utf8(rest);
        if len == 0 {
            return None;
        }
        Some((ch.unwrap_or('\u{FFFD}'), len))
    }

    pub fn current_char(&self) -> Option<char> {
        self.decode().map(|(ch, _)| ch)
    }

    /// Classifies the code point under the cursor; `Token::Eof` past the end.
    pub fn token(&self) -> Token {
        self.current_char().map_or(Token::Eof, Token::classify)
    }

    /// Moves past the current code point. A no-op at the end of the buffer.
    pub fn advance(&mut self) {
        if let Some((_, len)) = self.decode() {
            self.pos += len;
        }
    }

    /// Moves back over the code point immediately preceding the cursor.
    pub fn retreat(&mut self) {
        let before = &self.data[..self.pos.min(self.data.len())];
        let (_, len) = bstr::decode_last_utf8(before);
        self.pos -= len;
    }

    /// Classifies the code point after the current one without moving.
    pub fn peek_next(&mut self) -> Token {
        if self.is_at_end() {
            return Token::Eof;
        }
        self.advance();
        let next = self.token();
        self.retreat();
        next
    }

    /// Raw bytes between two positions, clamped to the buffer.
    pub fn slice(&self, start: usize, end: usize) -> &'a [u8] {
        let end = end.min(self.data.len());
        self.data.get(start..end).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_boundary_behavior() {
        let data = b"ab";
        let mut cursor = Cursor::new(data);

        assert_eq!(cursor.position(), 0);
        assert_eq!(cursor.token(), Token::Letter(b'a'));
        cursor.advance();
        assert_eq!(cursor.position(), 1);
        assert_eq!(cursor.token(), Token::Letter(b'b'));
        cursor.advance();

        // Exactly at the end: no token, and advancing stays put
        assert_eq!(cursor.position(), data.len());
        assert!(cursor.is_at_end());
        assert_eq!(cursor.token(), Token::Eof);
        cursor.advance();
        assert_eq!(cursor.position(), data.len());
    }

    #[test]
    fn test_multibyte_advance_and_retreat() {
        // 'é' is two bytes, '€' is three
        let data = "é€\"".as_bytes();
        let mut cursor = Cursor::new(data);

        assert_eq!(cursor.current_char(), Some('é'));
        cursor.advance();
        assert_eq!(cursor.position(), 2);
        assert_eq!(cursor.current_char(), Some('€'));
        cursor.advance();
        assert_eq!(cursor.position(), 5);
        assert_eq!(cursor.token(), Token::Quote);

        cursor.retreat();
        assert_eq!(cursor.position(), 2);
        cursor.retreat();
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn test_peek_next_does_not_move() {
        let mut cursor = Cursor::new(br#"\""#);
        assert_eq!(cursor.token(), Token::Backslash);
        assert_eq!(cursor.peek_next(), Token::Quote);
        assert_eq!(cursor.position(), 0);

        cursor.advance();
        assert_eq!(cursor.peek_next(), Token::Eof);
        assert_eq!(cursor.position(), 1);
    }

    #[test]
    fn test_invalid_utf8_still_progresses() {
        let data = [0x80u8, b'a'];
        let mut cursor = Cursor::new(&data);
        assert_eq!(cursor.current_char(), Some('\u{FFFD}'));
        assert_eq!(cursor.token(), Token::Other);
        cursor.advance();
        assert_eq!(cursor.position(), 1);
        assert_eq!(cursor.token(), Token::Letter(b'a'));
    }

    #[test]
    fn test_slice_is_clamped() {
        let cursor = Cursor::new(b"abc");
        assert_eq!(cursor.slice(1, 3), b"bc");
        assert_eq!(cursor.slice(1, 10), b"bc");
        assert_eq!(cursor.slice(4, 5), b"");
    }
}
