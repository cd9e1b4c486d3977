//! Node implementation for the prefix index.
//!
//! Nodes are the building blocks of the trie: each one stands for a single
//! character position and exclusively owns the nodes below it.

use std::collections::BTreeMap;

/// A node in the prefix index.
///
/// Terminal nodes mark the end of an inserted word and carry its accumulated
/// frequency. Non-terminal nodes always hold a frequency of 0.
#[derive(Debug, Default)]
pub struct PrefixNode {
    /// Map of characters to child nodes, iterated in character order
    pub children: BTreeMap<char, PrefixNode>,

    /// Whether an inserted word ends at this node
    pub is_terminal: bool,

    /// Accumulated weight of the word ending here
    pub frequency: i64,
}

impl PrefixNode {
    /// Creates a new empty, non-terminal node.
    pub fn new() -> Self {
        Self {
            children: BTreeMap::new(),
            is_terminal: false,
            frequency: 0,
        }
    }

    /// Follows `path` from this node, returning the node it ends at.
    pub fn descend(&self, path: &str) -> Option<&PrefixNode> {
        let mut node = self;
        for c in path.chars() {
            node = node.children.get(&c)?;
        }
        Some(node)
    }

    /// Follows `path` from this node, creating missing children on the way.
    pub fn descend_or_create(&mut self, path: &str) -> &mut PrefixNode {
        let mut node = self;
        for c in path.chars() {
            node = node.children.entry(c).or_default();
        }
        node
    }
}
