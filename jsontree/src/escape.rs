// SPDX-License-Identifier: Apache-2.0

//! Escape decoding for string nodes.
//!
//! Parsing keeps string contents byte-for-byte; this is a separate step a
//! caller can run on a [`JsonString`] afterwards.

use core::str::CharIndices;

use bstr::ByteSlice;

use crate::node::JsonString;
use crate::parse_error::ParseError;

impl JsonString {
    /// Decodes `\" \\ \/ \b \f \n \r \t` and `\uXXXX` escapes, including
    /// surrogate pairs.
    ///
    /// Invalid UTF-8 in the raw contents decodes to U+FFFD. Error offsets are
    /// byte offsets of the offending backslash within the raw contents.
    ///
    /// # Example
    /// ```
    /// use jsontree::{JsonParser, ParserOptions};
    ///
    /// let input = r#""tab\there é""#;
    /// let parser = JsonParser::from_bytes(input.as_bytes().to_vec(), ParserOptions::default())?;
    /// let s = parser.root().and_then(|n| n.as_string()).unwrap();
    /// assert_eq!(s.as_str(), Some(r"tab\there é"));
    /// assert_eq!(s.decode_escapes()?, "tab\there é");
    /// # Ok::<(), jsontree::ParseError>(())
    /// ```
    pub fn decode_escapes(&self) -> Result<String, ParseError> {
        let text = self.as_bytes().to_str_lossy();
        let mut out = String::with_capacity(text.len());
        let mut chars = text.char_indices();

        while let Some((offset, ch)) = chars.next() {
            if ch != '\\' {
                out.push(ch);
                continue;
            }
            let (_, escape) = chars.next().ok_or(ParseError::InvalidEscape { offset })?;
            let decoded = match escape {
                'u' => decode_unicode(&mut chars, offset)?,
                other => simple_escape(other).ok_or(ParseError::InvalidEscape { offset })?,
            };
            out.push(decoded);
        }
        Ok(out)
    }
}

/// Maps the character after a backslash to what it stands for.
fn simple_escape(escape: char) -> Option<char> {
    match escape {
        '"' => Some('"'),
        '\\' => Some('\\'),
        '/' => Some('/'),
        'b' => Some('\u{08}'),
        'f' => Some('\u{0C}'),
        'n' => Some('\n'),
        'r' => Some('\r'),
        't' => Some('\t'),
        _ => None,
    }
}

fn is_high_surrogate(unit: u32) -> bool {
    (0xD800..=0xDBFF).contains(&unit)
}

fn is_low_surrogate(unit: u32) -> bool {
    (0xDC00..=0xDFFF).contains(&unit)
}

/// Reads the four hex digits of a `\u` escape.
fn read_hex4(chars: &mut CharIndices<'_>, offset: usize) -> Result<u32, ParseError> {
    let mut unit = 0u32;
    for _ in 0..4 {
        let digit = chars
            .next()
            .and_then(|(_, ch)| ch.to_digit(16))
            .ok_or(ParseError::InvalidUnicodeEscape { offset })?;
        unit = (unit << 4) | digit;
    }
    Ok(unit)
}

/// Decodes the rest of a `\u` escape; `chars` sits just past the `u`.
fn decode_unicode(chars: &mut CharIndices<'_>, offset: usize) -> Result<char, ParseError> {
    let invalid = ParseError::InvalidUnicodeEscape { offset };
    let unit = read_hex4(chars, offset)?;

    let codepoint = if is_high_surrogate(unit) {
        // A high surrogate must be followed by an escaped low surrogate
        match (chars.next(), chars.next()) {
            (Some((_, '\\')), Some((_, 'u'))) => {}
            _ => return Err(invalid),
        }
        let low = read_hex4(chars, offset)?;
        if !is_low_surrogate(low) {
            return Err(invalid);
        }
        0x10000 + ((unit & 0x3FF) << 10) + (low & 0x3FF)
    } else if is_low_surrogate(unit) {
        return Err(invalid);
    } else {
        unit
    };

    char::from_u32(codepoint).ok_or(invalid)
}
