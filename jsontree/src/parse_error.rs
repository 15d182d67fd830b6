// SPDX-License-Identifier: Apache-2.0

use std::path::PathBuf;

use thiserror::Error;

use crate::node::NodeKind;
use crate::token::Token;

/// Errors that abort a parse.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The input file does not exist.
    #[error("file not found: {}", path.display())]
    FileNotFound {
        /// The path that was requested.
        path: PathBuf,
    },
    /// The input file exists but could not be read.
    #[error("unable to read {}: {source}", path.display())]
    Io {
        /// The path that was requested.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// No value could be parsed at the top level.
    #[error("expected a value at byte {offset}")]
    NoValue {
        /// Byte offset where a value was expected.
        offset: usize,
    },
    /// Containers are nested deeper than [`ParserOptions::max_depth`](crate::ParserOptions::max_depth).
    #[error("maximum nesting depth {depth} reached at byte {offset}")]
    MaxDepthReached {
        /// The configured limit.
        depth: usize,
        /// Byte offset of the container that went over the limit.
        offset: usize,
    },
    /// A bare word other than `true`, `false` or `null` under [`LiteralPolicy::Reject`](crate::LiteralPolicy::Reject).
    #[error("unrecognized literal '{word}' at byte {offset}")]
    UnrecognizedLiteral {
        /// The offending word.
        word: String,
        /// Byte offset of its first letter.
        offset: usize,
    },
    /// An unknown or truncated escape sequence, found while decoding escapes.
    #[error("invalid escape sequence at byte {offset}")]
    InvalidEscape {
        /// Byte offset of the backslash within the string.
        offset: usize,
    },
    /// Bad hex digits or an unpaired surrogate in a `\u` escape.
    #[error("invalid unicode escape at byte {offset}")]
    InvalidUnicodeEscape {
        /// Byte offset of the backslash within the string.
        offset: usize,
    },
}

/// Three-valued outcome of parsing a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseStatus {
    /// A tree was produced.
    Ok,
    /// Reading or parsing failed.
    Error,
    /// The input file does not exist.
    FileNotFound,
}

impl ParseError {
    /// Collapses the error to its [`ParseStatus`].
    pub fn status(&self) -> ParseStatus {
        match self {
            ParseError::FileNotFound { .. } => ParseStatus::FileNotFound,
            _ => ParseStatus::Error,
        }
    }

    pub(crate) fn from_io(path: PathBuf, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            ParseError::FileNotFound { path }
        } else {
            ParseError::Io { path, source }
        }
    }
}

impl ParseStatus {
    /// Status of a parse result.
    pub fn of<T>(result: &Result<T, ParseError>) -> Self {
        match result {
            Ok(_) => ParseStatus::Ok,
            Err(e) => e.status(),
        }
    }
}

/// A non-fatal structural problem found while parsing.
///
/// Diagnostics are logged at `error` level and collected on the parser;
/// parsing carries on past them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{kind} at byte {offset}")]
pub struct Diagnostic {
    /// What went wrong.
    pub kind: DiagnosticKind,
    /// Byte offset where it was noticed.
    pub offset: usize,
}

/// The kinds of [`Diagnostic`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DiagnosticKind {
    /// An object key was not followed by `:`.
    #[error("expected colon after key string")]
    MissingColon,
    /// A token that cannot start a value showed up where a value was expected.
    #[error("unexpected {0}")]
    UnexpectedToken(Token),
    /// An object key was not a string; the member was dropped.
    #[error("object key must be a string, found {0}")]
    InvalidMemberKey(NodeKind),
    /// No value followed an object key; the member was dropped.
    #[error("missing value for object member")]
    MissingMemberValue,
    /// The input ended inside a string.
    #[error("unterminated string")]
    UnterminatedString,
    /// The input ended inside an array.
    #[error("unterminated array")]
    UnterminatedArray,
    /// The input ended inside an object.
    #[error("unterminated object")]
    UnterminatedObject,
    /// Non-whitespace input after the root value.
    #[error("trailing content after root value")]
    TrailingContent,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let missing = ParseError::FileNotFound {
            path: PathBuf::from("nope.json"),
        };
        assert_eq!(missing.status(), ParseStatus::FileNotFound);
        assert_eq!(ParseError::NoValue { offset: 0 }.status(), ParseStatus::Error);
        assert_eq!(
            ParseError::MaxDepthReached {
                depth: 1,
                offset: 1
            }
            .status(),
            ParseStatus::Error
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let not_found = std::io::Error::from(std::io::ErrorKind::NotFound);
        match ParseError::from_io(PathBuf::from("a.json"), not_found) {
            ParseError::FileNotFound { path } => assert_eq!(path, PathBuf::from("a.json")),
            other => panic!("Expected FileNotFound, got: {:?}", other),
        }

        let denied = std::io::Error::from(std::io::ErrorKind::PermissionDenied);
        match ParseError::from_io(PathBuf::from("b.json"), denied) {
            ParseError::Io { source, .. } => {
                assert_eq!(source.kind(), std::io::ErrorKind::PermissionDenied)
            }
            other => panic!("Expected Io error, got: {:?}", other),
        }
    }

    #[test]
    fn test_status_of_result() {
        let ok: Result<(), ParseError> = Ok(());
        assert_eq!(ParseStatus::of(&ok), ParseStatus::Ok);
        let err: Result<(), ParseError> = Err(ParseError::NoValue { offset: 3 });
        assert_eq!(ParseStatus::of(&err), ParseStatus::Error);
    }

    #[test]
    fn test_display() {
        let d = Diagnostic {
            kind: DiagnosticKind::UnexpectedToken(Token::Colon),
            offset: 7,
        };
        assert_eq!(d.to_string(), "unexpected colon at byte 7");
        let d = Diagnostic {
            kind: DiagnosticKind::InvalidMemberKey(NodeKind::True),
            offset: 1,
        };
        assert_eq!(d.to_string(), "object key must be a string, found true at byte 1");
        let e = ParseError::UnrecognizedLiteral {
            word: "xyz".into(),
            offset: 0,
        };
        assert_eq!(e.to_string(), "unrecognized literal 'xyz' at byte 0");
    }
}
