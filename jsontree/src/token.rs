// SPDX-License-Identifier: Apache-2.0

use core::fmt;

/// Classification of a single decoded code point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    /// `[`
    LeftBracket,
    /// `]`
    RightBracket,
    /// `{`
    LeftBrace,
    /// `}`
    RightBrace,
    /// `:`
    Colon,
    /// `,`
    Comma,
    /// `"`
    Quote,
    /// `\`
    Backslash,
    /// An ASCII lowercase letter, the only characters a literal word is built from.
    Letter(u8),
    /// Anything else: digits, whitespace, uppercase and non-ASCII characters.
    Other,
    /// No code point left in the buffer.
    Eof,
}

impl Token {
    /// Maps a code point to its token.
    ///
    /// Literal words are case sensitive, so `'T'` is [`Token::Other`].
    pub fn classify(ch: char) -> Self {
        match ch {
            '[' => Token::LeftBracket,
            ']' => Token::RightBracket,
            '{' => Token::LeftBrace,
            '}' => Token::RightBrace,
            ':' => Token::Colon,
            ',' => Token::Comma,
            '"' => Token::Quote,
            '\\' => Token::Backslash,
            'a'..='z' => Token::Letter(ch as u8),
            _ => Token::Other,
        }
    }

    /// Human readable name, used in diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            Token::LeftBracket => "left square bracket",
            Token::RightBracket => "right square bracket",
            Token::LeftBrace => "left curly bracket",
            Token::RightBrace => "right curly bracket",
            Token::Colon => "colon",
            Token::Comma => "comma",
            Token::Quote => "quotation mark",
            Token::Backslash => "back slash",
            Token::Letter(_) => "letter",
            Token::Other => "none",
            Token::Eof => "end of input",
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Letter(b) => write!(f, "letter '{}'", *b as char),
            other => f.write_str(other.name()),
        }
    }
}

/// JSON insignificant whitespace: tab, line feed, carriage return and space.
pub fn is_whitespace(ch: char) -> bool {
    matches!(ch, '\t' | '\n' | '\r' | ' ')
}
