// SPDX-License-Identifier: Apache-2.0

//! A recursive-descent JSON parser that builds an owned tree of typed nodes.
//!
//! The parser reads a whole file (or takes an owned buffer), walks it one
//! code point at a time and builds a [`Node`] tree. It is deliberately
//! lenient: structural problems are logged and collected as
//! [`Diagnostic`]s while parsing carries on.
//!
//! Known limitations: numbers are not tokenized, and string escapes are
//! kept verbatim unless [`JsonString::decode_escapes`] is called.
//!
//! ```
//! use jsontree::{JsonParser, Node, ParserOptions};
//!
//! let parser = JsonParser::from_bytes(br#"{"tags": ["a", "b"], "ok": true}"#.to_vec(), ParserOptions::default())?;
//! let root = parser.root().unwrap();
//! assert_eq!(root.get("ok"), Some(&Node::True));
//! assert_eq!(root.get("tags").and_then(Node::elements).map(|e| e.len()), Some(2));
//! parser.destroy();
//! # Ok::<(), jsontree::ParseError>(())
//! ```

mod cursor;

mod escape;

mod lifecycle;
pub use lifecycle::release;

mod node;
pub use node::{JsonString, Member, Node, NodeKind};

mod options;
pub use options::{LiteralPolicy, ParserOptions, DEFAULT_MAX_DEPTH};

mod parse_error;
pub use parse_error::{Diagnostic, DiagnosticKind, ParseError, ParseStatus};

mod parser;
pub use parser::{parse, parse_with_options, JsonParser};

mod print;
pub use print::TreePrinter;

mod token;
pub use token::{is_whitespace, Token};
