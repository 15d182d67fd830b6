// SPDX-License-Identifier: Apache-2.0

use std::path::Path;

use log::{debug, error, info, trace, warn};

use crate::cursor::Cursor;
use crate::lifecycle;
use crate::node::{JsonString, Member, Node};
use crate::options::{LiteralPolicy, ParserOptions};
use crate::parse_error::{Diagnostic, DiagnosticKind, ParseError};
use crate::token::{is_whitespace, Token};

/// Longest bare word that is stored for classification.
const MAX_LITERAL_LEN: usize = 10;

/// Parses the JSON file at `path` with default options.
///
/// # Example
/// ```no_run
/// let parser = jsontree::parse("assets/test.json")?;
/// if let Some(root) = parser.root() {
///     println!("{}", root.tree());
/// }
/// parser.destroy();
/// # Ok::<(), jsontree::ParseError>(())
/// ```
pub fn parse(path: impl AsRef<Path>) -> Result<JsonParser, ParseError> {
    parse_with_options(path, ParserOptions::default())
}

/// Parses the JSON file at `path`.
pub fn parse_with_options(
    path: impl AsRef<Path>,
    options: ParserOptions,
) -> Result<JsonParser, ParseError> {
    JsonParser::from_file(path, options)
}

/// A completed parse: the input buffer together with the tree built from it.
///
/// Structural problems in the input do not fail the parse; they are
/// reported through [`JsonParser::diagnostics`].
#[derive(Debug)]
pub struct JsonParser {
    buffer: Vec<u8>,
    offset: usize,
    options: ParserOptions,
    root: Option<Node>,
    diagnostics: Vec<Diagnostic>,
}

impl JsonParser {
    /// Reads the whole file and parses it.
    pub fn from_file(path: impl AsRef<Path>, options: ParserOptions) -> Result<Self, ParseError> {
        let path = path.as_ref();
        info!("Parsing {}", path.display());
        let buffer = std::fs::read(path).map_err(|e| ParseError::from_io(path.to_path_buf(), e))?;
        Self::from_bytes(buffer, options)
    }

    /// Parses an in-memory buffer, taking ownership of it.
    ///
    /// # Example
    /// ```
    /// use jsontree::{JsonParser, NodeKind, ParserOptions};
    ///
    /// let parser = JsonParser::from_bytes(br#"{"ok": true}"#.to_vec(), ParserOptions::default())?;
    /// let root = parser.root().unwrap();
    /// assert_eq!(root.get("ok").map(|n| n.kind()), Some(NodeKind::True));
    /// # Ok::<(), jsontree::ParseError>(())
    /// ```
    pub fn from_bytes(buffer: Vec<u8>, options: ParserOptions) -> Result<Self, ParseError> {
        let (root, offset, diagnostics) = {
            let mut state = ParseState::new(&buffer, options);
            let root = state.parse_document()?;
            (root, state.cursor.position(), state.diagnostics)
        };

        let Some(root) = root else {
            return Err(ParseError::NoValue { offset });
        };
        if options.verbose {
            info!("Parsed tree:\n{}", root.tree());
        }
        Ok(Self {
            buffer,
            offset,
            options,
            root: Some(root),
            diagnostics,
        })
    }

    /// The root of the parsed tree.
    pub fn root(&self) -> Option<&Node> {
        self.root.as_ref()
    }

    /// Takes the tree out of the parser, leaving it empty.
    pub fn take_root(&mut self) -> Option<Node> {
        self.root.take()
    }

    /// Structural problems found while parsing, in input order.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// The raw input buffer.
    pub fn input(&self) -> &[u8] {
        &self.buffer
    }

    /// Byte offset where parsing stopped.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// The options this parser ran with.
    pub fn options(&self) -> &ParserOptions {
        &self.options
    }

    /// Releases the tree and the input buffer together.
    ///
    /// Consumes the parser, so the tree cannot be used or released again.
    /// Returns the number of nodes released.
    pub fn destroy(self) -> usize {
        let released = lifecycle::release(self.root);
        debug!(
            "Released {} nodes and {} input bytes",
            released,
            self.buffer.len()
        );
        released
    }
}

/// Mutable state of one recursive-descent pass over a buffer.
struct ParseState<'a> {
    cursor: Cursor<'a>,
    options: ParserOptions,
    depth: usize,
    diagnostics: Vec<Diagnostic>,
}

impl<'a> ParseState<'a> {
    fn new(data: &'a [u8], options: ParserOptions) -> Self {
        Self {
            cursor: Cursor::new(data),
            options,
            depth: 0,
            diagnostics: Vec::new(),
        }
    }

    fn parse_document(&mut self) -> Result<Option<Node>, ParseError> {
        let root = self.parse_value()?;
        if root.is_some() {
            self.skip_whitespace();
            if !self.cursor.is_at_end() {
                self.diagnose(DiagnosticKind::TrailingContent, self.cursor.position());
            }
        }
        Ok(root)
    }

    fn diagnose(&mut self, kind: DiagnosticKind, offset: usize) {
        let diagnostic = Diagnostic { kind, offset };
        error!("{}", diagnostic);
        self.diagnostics.push(diagnostic);
    }

    fn skip_whitespace(&mut self) {
        while self.cursor.current_char().is_some_and(is_whitespace) {
            self.cursor.advance();
        }
    }

    fn skip_comma(&mut self) {
        if self.cursor.token() == Token::Comma {
            self.cursor.advance();
        }
    }

    /// Steps over input that cannot start a value so container loops keep
    /// moving. Commas, the container's closer and the end are left in place.
    fn recover(&mut self, closer: Token) {
        match self.cursor.token() {
            Token::Comma | Token::Eof => {}
            token if token == closer => {}
            Token::Other => {
                while self.cursor.token() == Token::Other
                    && !self.cursor.current_char().is_some_and(is_whitespace)
                {
                    self.cursor.advance();
                }
            }
            _ => self.cursor.advance(),
        }
    }

    fn enter_container(&mut self, offset: usize) -> Result<(), ParseError> {
        if self.depth >= self.options.max_depth {
            return Err(ParseError::MaxDepthReached {
                depth: self.options.max_depth,
                offset,
            });
        }
        self.depth += 1;
        Ok(())
    }

    fn exit_container(&mut self) {
        self.depth -= 1;
    }

    /// Parses the value at the cursor. `None` means no value starts here.
    fn parse_value(&mut self) -> Result<Option<Node>, ParseError> {
        self.skip_whitespace();
        match self.cursor.token() {
            Token::LeftBrace => self.parse_object().map(Some),
            Token::LeftBracket => self.parse_array().map(Some),
            Token::Quote => Ok(self.parse_string().map(Node::String)),
            Token::Letter(_) => self.parse_literal().map(Some),
            _ => Ok(None),
        }
    }

    fn parse_string(&mut self) -> Option<JsonString> {
        if self.cursor.token() != Token::Quote {
            return None;
        }
        let opening = self.cursor.position();
        self.cursor.advance();
        let start = self.cursor.position();
        debug!("parse_string at {}", opening);

        loop {
            match self.cursor.token() {
                Token::Quote => break,
                Token::Eof => {
                    self.diagnose(DiagnosticKind::UnterminatedString, opening);
                    break;
                }
                Token::Backslash => {
                    // Escape pairs are kept verbatim, only stepped over
                    if self.cursor.peek_next() == Token::Quote {
                        trace!("escaped quote at {}", self.cursor.position());
                    }
                    self.cursor.advance();
                    self.cursor.advance();
                }
                _ => self.cursor.advance(),
            }
        }

        let raw = self.cursor.slice(start, self.cursor.position());
        if self.cursor.token() == Token::Quote {
            self.cursor.advance();
        }
        Some(JsonString::from_bytes(raw))
    }

    fn parse_literal(&mut self) -> Result<Node, ParseError> {
        let start = self.cursor.position();
        debug!("parse_literal at {}", start);

        let mut word = [0u8; MAX_LITERAL_LEN];
        let mut len = 0;
        // Over-long words are consumed whole but only the head is stored
        while let Token::Letter(letter) = self.cursor.token() {
            if len < MAX_LITERAL_LEN {
                word[len] = letter;
                len += 1;
            }
            self.cursor.advance();
        }

        match &word[..len] {
            b"true" => Ok(Node::True),
            b"false" => Ok(Node::False),
            b"null" => Ok(Node::Null),
            _ => {
                let word = String::from_utf8_lossy(self.cursor.slice(start, self.cursor.position()))
                    .into_owned();
                match self.options.literal_policy {
                    LiteralPolicy::NullFallback => {
                        warn!("Unrecognized literal '{}' at {}, using null", word, start);
                        Ok(Node::Null)
                    }
                    LiteralPolicy::Reject => Err(ParseError::UnrecognizedLiteral {
                        word,
                        offset: start,
                    }),
                }
            }
        }
    }

    fn parse_array(&mut self) -> Result<Node, ParseError> {
        let opening = self.cursor.position();
        debug!("parse_array at {}", opening);
        self.enter_container(opening)?;
        self.cursor.advance();

        let mut elements = Vec::new();
        loop {
            self.skip_whitespace();
            match self.cursor.token() {
                Token::RightBracket => {
                    self.cursor.advance();
                    break;
                }
                Token::Eof => {
                    self.diagnose(DiagnosticKind::UnterminatedArray, opening);
                    break;
                }
                _ => {}
            }

            let token = self.cursor.token();
            match self.parse_value()? {
                Some(node) => elements.push(node),
                None => {
                    self.diagnose(
                        DiagnosticKind::UnexpectedToken(token),
                        self.cursor.position(),
                    );
                    self.recover(Token::RightBracket);
                }
            }
            self.skip_whitespace();
            self.skip_comma();
        }

        self.exit_container();
        Ok(Node::Array(elements))
    }

    fn parse_member(&mut self) -> Result<Option<Member>, ParseError> {
        self.skip_whitespace();
        let key_offset = self.cursor.position();
        let token = self.cursor.token();
        let key = match self.parse_value()? {
            Some(Node::String(key)) => key,
            Some(other) => {
                self.diagnose(DiagnosticKind::InvalidMemberKey(other.kind()), key_offset);
                lifecycle::release(Some(other));
                return Ok(None);
            }
            None => {
                self.diagnose(DiagnosticKind::UnexpectedToken(token), key_offset);
                self.recover(Token::RightBrace);
                return Ok(None);
            }
        };

        self.skip_whitespace();
        if self.cursor.token() == Token::Colon {
            self.cursor.advance();
        } else {
            self.diagnose(DiagnosticKind::MissingColon, self.cursor.position());
        }
        self.skip_whitespace();

        match self.parse_value()? {
            Some(value) => Ok(Some(Member { key, value })),
            None => {
                self.diagnose(DiagnosticKind::MissingMemberValue, self.cursor.position());
                self.recover(Token::RightBrace);
                Ok(None)
            }
        }
    }

    fn parse_object(&mut self) -> Result<Node, ParseError> {
        let opening = self.cursor.position();
        debug!("parse_object at {}", opening);
        self.enter_container(opening)?;
        self.cursor.advance();

        let mut members = Vec::new();
        loop {
            self.skip_whitespace();
            match self.cursor.token() {
                Token::RightBrace => {
                    self.cursor.advance();
                    break;
                }
                Token::Eof => {
                    self.diagnose(DiagnosticKind::UnterminatedObject, opening);
                    break;
                }
                _ => {}
            }

            if let Some(member) = self.parse_member()? {
                members.push(member);
            }
            self.skip_whitespace();
            self.skip_comma();
        }

        self.exit_container();
        Ok(Node::Object(members))
    }
}
