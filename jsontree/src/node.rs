// SPDX-License-Identifier: Apache-2.0

use core::fmt;

use bstr::{BString, ByteSlice};

/// Kind tag of a tree element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// `{ ... }`
    Object,
    /// `[ ... ]`
    Array,
    /// A `"key": value` pair inside an object.
    ObjectMember,
    /// A quoted string.
    String,
    /// `true`
    True,
    /// `false`
    False,
    /// `null`
    Null,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NodeKind::Object => "object",
            NodeKind::Array => "array",
            NodeKind::ObjectMember => "object member",
            NodeKind::String => "string",
            NodeKind::True => "true",
            NodeKind::False => "false",
            NodeKind::Null => "null",
        };
        f.write_str(name)
    }
}

/// The raw contents of a quoted string.
///
/// Holds the exact bytes between the opening and closing quote. Escape
/// sequences are kept verbatim; see [`JsonString::decode_escapes`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct JsonString {
    raw: BString,
}

impl JsonString {
    pub(crate) fn from_bytes(raw: &[u8]) -> Self {
        Self { raw: BString::from(raw) }
    }

    /// The raw bytes, escapes included.
    pub fn as_bytes(&self) -> &[u8] {
        self.raw.as_slice()
    }

    /// The raw contents as `&str`, if they are valid UTF-8.
    pub fn as_str(&self) -> Option<&str> {
        self.raw.to_str().ok()
    }

    /// Byte length of the raw contents.
    pub fn len(&self) -> usize {
        self.raw.len()
    }

    /// Whether the string is `""`.
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }
}

impl From<&str> for JsonString {
    fn from(raw: &str) -> Self {
        Self::from_bytes(raw.as_bytes())
    }
}

impl fmt::Display for JsonString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.raw, f)
    }
}

/// A `"key": value` pair. Both halves are owned by the member.
#[derive(Debug, Clone, PartialEq)]
pub struct Member {
    /// The member's key.
    pub key: JsonString,
    /// The member's value.
    pub value: Node,
}

impl Member {
    /// Always [`NodeKind::ObjectMember`].
    pub fn kind(&self) -> NodeKind {
        NodeKind::ObjectMember
    }
}

/// A parsed tree element.
///
/// Every child is exclusively owned by its parent, so the tree has no
/// sharing and no cycles.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// Members in source order. Duplicate keys are all kept.
    Object(Vec<Member>),
    /// Elements in source order.
    Array(Vec<Node>),
    /// A quoted string.
    String(JsonString),
    /// `true`
    True,
    /// `false`
    False,
    /// `null`, or an unrecognized bare word under the lenient literal policy.
    Null,
}

impl Node {
    /// The kind tag of this node.
    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Object(_) => NodeKind::Object,
            Node::Array(_) => NodeKind::Array,
            Node::String(_) => NodeKind::String,
            Node::True => NodeKind::True,
            Node::False => NodeKind::False,
            Node::Null => NodeKind::Null,
        }
    }

    /// Members of an object, `None` for other kinds.
    pub fn members(&self) -> Option<&[Member]> {
        match self {
            Node::Object(members) => Some(members),
            _ => None,
        }
    }

    /// Elements of an array, `None` for other kinds.
    pub fn elements(&self) -> Option<&[Node]> {
        match self {
            Node::Array(elements) => Some(elements),
            _ => None,
        }
    }

    /// The string payload, `None` for other kinds.
    pub fn as_string(&self) -> Option<&JsonString> {
        match self {
            Node::String(s) => Some(s),
            _ => None,
        }
    }

    /// The string payload as `&str`, if this is a valid UTF-8 string node.
    pub fn as_str(&self) -> Option<&str> {
        self.as_string().and_then(JsonString::as_str)
    }

    /// First member value whose raw key equals `key`.
    pub fn get(&self, key: &str) -> Option<&Node> {
        self.members()?
            .iter()
            .find(|member| member.key.as_bytes() == key.as_bytes())
            .map(|member| &member.value)
    }

    /// Container nesting depth: 0 for scalars, 1 for a flat container.
    pub fn depth(&self) -> usize {
        match self {
            Node::Object(members) => {
                1 + members
                    .iter()
                    .map(|member| member.value.depth())
                    .max()
                    .unwrap_or(0)
            }
            Node::Array(elements) => 1 + elements.iter().map(Node::depth).max().unwrap_or(0),
            _ => 0,
        }
    }

    /// Number of nodes in this subtree, counting each member and its key.
    pub fn node_count(&self) -> usize {
        match self {
            Node::Object(members) => {
                1 + members
                    .iter()
                    .map(|member| 2 + member.value.node_count())
                    .sum::<usize>()
            }
            Node::Array(elements) => 1 + elements.iter().map(Node::node_count).sum::<usize>(),
            _ => 1,
        }
    }
}
