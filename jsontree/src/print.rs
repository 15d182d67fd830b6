// SPDX-License-Identifier: Apache-2.0

use core::fmt;

use crate::node::Node;

/// Spaces added per nesting level.
const INDENT_STEP: usize = 4;

/// Human readable, indented rendering of a tree for diagnostics.
///
/// Keys are prefixed with `Key`, strings are quoted with their raw contents
/// and literals print as their words. This is not a serialization format.
///
/// # Example
/// ```
/// use jsontree::{JsonParser, ParserOptions};
///
/// let parser = JsonParser::from_bytes(br#"{"a": [true]}"#.to_vec(), ParserOptions::default())?;
/// let printed = parser.root().unwrap().tree().to_string();
/// assert_eq!(printed, "{\n    Key \"a\" : [\n        true\n    ]\n}\n");
/// # Ok::<(), jsontree::ParseError>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct TreePrinter<'a> {
    node: &'a Node,
    indent: usize,
}

impl<'a> TreePrinter<'a> {
    /// Prints `node` as if it sat `indent` spaces deep.
    pub fn new(node: &'a Node, indent: usize) -> Self {
        Self { node, indent }
    }
}

impl Node {
    /// Renders this tree with [`TreePrinter`] at indentation 0.
    pub fn tree(&self) -> TreePrinter<'_> {
        TreePrinter::new(self, 0)
    }
}

fn pad(f: &mut fmt::Formatter<'_>, indent: usize) -> fmt::Result {
    write!(f, "{:indent$}", "", indent = indent)
}

/// Writes `node` assuming the cursor already sits at its first column.
fn write_node(f: &mut fmt::Formatter<'_>, node: &Node, indent: usize) -> fmt::Result {
    match node {
        Node::Object(members) => {
            f.write_str("{\n")?;
            for member in members {
                pad(f, indent + INDENT_STEP)?;
                write!(f, "Key \"{}\" : ", member.key)?;
                write_node(f, &member.value, indent + INDENT_STEP)?;
            }
            pad(f, indent)?;
            f.write_str("}\n")
        }
        Node::Array(elements) => {
            f.write_str("[\n")?;
            for element in elements {
                pad(f, indent + INDENT_STEP)?;
                write_node(f, element, indent + INDENT_STEP)?;
            }
            pad(f, indent)?;
            f.write_str("]\n")
        }
        Node::String(s) => writeln!(f, "\"{}\"", s),
        Node::True => f.write_str("true\n"),
        Node::False => f.write_str("false\n"),
        Node::Null => f.write_str("null\n"),
    }
}

impl fmt::Display for TreePrinter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        pad(f, self.indent)?;
        write_node(f, self.node, self.indent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::Member;

    #[test]
    fn test_print_scalars() {
        assert_eq!(Node::True.tree().to_string(), "true\n");
        assert_eq!(Node::False.tree().to_string(), "false\n");
        assert_eq!(Node::Null.tree().to_string(), "null\n");
        assert_eq!(Node::String(r#"a\"b"#.into()).tree().to_string(), "\"a\\\"b\"\n");
    }

    #[test]
    fn test_print_empty_containers() {
        assert_eq!(Node::Object(vec![]).tree().to_string(), "{\n}\n");
        assert_eq!(Node::Array(vec![]).tree().to_string(), "[\n]\n");
    }

    #[test]
    fn test_print_nested() {
        let tree = Node::Object(vec![Member {
            key: "a".into(),
            value: Node::Object(vec![Member {
                key: "b".into(),
                value: Node::Array(vec![Node::Null, Node::String("x".into())]),
            }]),
        }]);
        let expected = "\
{
    Key \"a\" : {
        Key \"b\" : [
            null
            \"x\"
        ]
    }
}
";
        assert_eq!(tree.tree().to_string(), expected);
    }

    #[test]
    fn test_print_with_indent() {
        let tree = Node::Array(vec![Node::True]);
        assert_eq!(
            TreePrinter::new(&tree, 2).to_string(),
            "  [\n      true\n  ]\n"
        );
    }
}
