// SPDX-License-Identifier: Apache-2.0

//! Tree teardown.
//!
//! Dropping a [`Node`] already frees everything it owns. [`release`] does the
//! same work with an explicit work list instead of recursion, so arbitrarily
//! deep trees can be torn down without growing the call stack, and reports
//! how many nodes went away.

use crate::node::Node;

/// Releases a tree and everything it owns, returning the number of nodes
/// released (each object member and its key count as one node each).
///
/// `None` is a no-op and returns 0.
///
/// # Example
/// ```
/// use jsontree::{release, Node};
///
/// let tree = Node::Array(vec![Node::True, Node::Null]);
/// assert_eq!(release(Some(tree)), 3);
/// assert_eq!(release(None), 0);
/// ```
pub fn release(root: Option<Node>) -> usize {
    let mut pending: Vec<Node> = root.into_iter().collect();
    let mut released = 0;

    while let Some(node) = pending.pop() {
        released += 1;
        match node {
            Node::Object(members) => {
                for member in members {
                    // The member and its key string
                    released += 2;
                    pending.push(member.value);
                }
            }
            Node::Array(elements) => pending.extend(elements),
            Node::String(_) | Node::True | Node::False | Node::Null => {}
        }
    }
    released
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::Member;

    #[test]
    fn test_release_none_is_noop() {
        assert_eq!(release(None), 0);
    }

    #[test]
    fn test_release_matches_node_count() {
        let tree = Node::Object(vec![
            Member {
                key: "list".into(),
                value: Node::Array(vec![Node::True, Node::False, Node::String("s".into())]),
            },
            Member {
                key: "empty".into(),
                value: Node::Object(vec![]),
            },
        ]);
        let expected = tree.node_count();
        assert_eq!(release(Some(tree)), expected);
        assert_eq!(expected, 10);
    }

    #[test]
    fn test_release_deep_tree() {
        let mut tree = Node::Null;
        for _ in 0..100_000 {
            tree = Node::Array(vec![tree]);
        }
        assert_eq!(release(Some(tree)), 100_001);
    }
}
