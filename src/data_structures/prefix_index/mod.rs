//! Prefix Index Implementation
//!
//! This module provides a character trie that stores complete words with an
//! accumulated frequency and answers ranked prefix queries over them.
//!
//! # Semantics
//!
//! * Inserting a word that is already present adds to its frequency rather
//!   than replacing it.
//! * Only complete words are reported. A path that merely prefixes a longer
//!   word is not a member of the index.
//! * Predictions are ordered by frequency descending, then by word ascending,
//!   and truncated only after the full candidate set has been sorted.
//!
//! The index itself performs no case folding and has no failure modes. Callers
//! that need case-insensitive behavior normalize words before inserting.

mod node;
mod shared;

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

pub use node::PrefixNode;
pub use shared::SharedPrefixIndex;

/// Frequency used when a caller does not supply one.
pub const DEFAULT_FREQUENCY: i64 = 1;

/// Number of predictions returned when a caller does not supply a limit.
pub const DEFAULT_LIMIT: usize = 10;

/// A single ranked completion returned by [`PrefixIndex::predict`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prediction {
    /// The complete word, including the queried prefix
    pub word: String,

    /// Accumulated frequency of the word
    pub frequency: i64,
}

impl Prediction {
    /// Creates a new prediction.
    pub fn new<W: Into<String>>(word: W, frequency: i64) -> Self {
        Self {
            word: word.into(),
            frequency,
        }
    }

    /// Ranking order: frequency descending, then word ascending.
    pub fn rank(&self, other: &Self) -> Ordering {
        other
            .frequency
            .cmp(&self.frequency)
            .then_with(|| self.word.cmp(&other.word))
    }
}

/// A prefix-indexed word dictionary.
///
/// Key features:
/// * Frequency accumulation on repeated insertion
/// * Exact membership checks that ignore prefix-only paths
/// * Deterministic, frequency-ranked prefix completion
/// * Iterative traversal and teardown, so very long words cannot exhaust the stack
#[derive(Debug, Default)]
pub struct PrefixIndex {
    /// The root node of the trie
    root: PrefixNode,

    /// Number of distinct words stored
    words: usize,
}

impl PrefixIndex {
    /// Creates a new empty `PrefixIndex`.
    pub fn new() -> Self {
        Self {
            root: PrefixNode::new(),
            words: 0,
        }
    }

    /// Inserts `word`, adding `frequency` to its accumulated weight.
    ///
    /// Missing nodes along the path are created. Any character sequence is
    /// accepted, including the empty string, which marks the root terminal.
    /// Zero and negative increments are applied as given.
    ///
    /// # Arguments
    ///
    /// * `word` - The word to insert.
    /// * `frequency` - The increment to add to the word's frequency.
    pub fn insert<W>(&mut self, word: W, frequency: i64)
    where
        W: AsRef<str>,
    {
        let node = self.root.descend_or_create(word.as_ref());

        if !node.is_terminal {
            node.is_terminal = true;
            self.words += 1;
        }
        node.frequency = node.frequency.saturating_add(frequency);
    }

    /// Inserts `word` with [`DEFAULT_FREQUENCY`].
    pub fn insert_word<W>(&mut self, word: W)
    where
        W: AsRef<str>,
    {
        self.insert(word, DEFAULT_FREQUENCY);
    }

    /// Checks if `word` was inserted as a complete word.
    ///
    /// A prefix of a longer word returns `false` unless it was itself inserted.
    pub fn contains<W>(&self, word: W) -> bool
    where
        W: AsRef<str>,
    {
        self.root
            .descend(word.as_ref())
            .map(|node| node.is_terminal)
            .unwrap_or(false)
    }

    /// Returns the accumulated frequency of `word`, if it is present.
    pub fn frequency<W>(&self, word: W) -> Option<i64>
    where
        W: AsRef<str>,
    {
        self.root
            .descend(word.as_ref())
            .filter(|node| node.is_terminal)
            .map(|node| node.frequency)
    }

    /// Finds up to `limit` words starting with `prefix`, best ranked first.
    ///
    /// Every word in the subtree below `prefix` (including `prefix` itself) is
    /// collected, sorted by frequency descending and then lexicographically,
    /// and only then truncated. An empty prefix ranks the whole index. A prefix
    /// with no path in the trie yields an empty vector.
    ///
    /// # Arguments
    ///
    /// * `prefix` - The prefix to complete.
    /// * `limit` - The maximum number of predictions to return.
    pub fn predict<P>(&self, prefix: P, limit: usize) -> Vec<Prediction>
    where
        P: AsRef<str>,
    {
        let prefix = prefix.as_ref();
        let start = match self.root.descend(prefix) {
            Some(node) => node,
            None => return Vec::new(),
        };

        let mut results = Vec::new();
        let mut stack: Vec<(&PrefixNode, String)> = vec![(start, prefix.to_string())];

        while let Some((node, word)) = stack.pop() {
            if node.is_terminal {
                results.push(Prediction::new(word.clone(), node.frequency));
            }

            // Reverse push keeps pops in character order
            for (c, child) in node.children.iter().rev() {
                let mut next = String::with_capacity(word.len() + c.len_utf8());
                next.push_str(&word);
                next.push(*c);
                stack.push((child, next));
            }
        }

        results.sort_by(Prediction::rank);
        results.truncate(limit);

        tracing::trace!(prefix, limit, returned = results.len(), "prefix query");
        results
    }

    /// Finds up to [`DEFAULT_LIMIT`] words starting with `prefix`.
    pub fn suggest<P>(&self, prefix: P) -> Vec<Prediction>
    where
        P: AsRef<str>,
    {
        self.predict(prefix, DEFAULT_LIMIT)
    }

    /// Returns the number of distinct words in the index.
    pub fn len(&self) -> usize {
        self.words
    }

    /// Checks if no word has been inserted.
    pub fn is_empty(&self) -> bool {
        self.words == 0
    }

    /// Returns the number of nodes in the trie, root included.
    ///
    /// This walks the whole tree, so it is an O(n) operation.
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![&self.root];
        while let Some(node) = stack.pop() {
            count += 1;
            stack.extend(node.children.values());
        }
        count
    }
}

impl Drop for PrefixIndex {
    fn drop(&mut self) {
        // Detach children before each node drops so no drop recurses
        let mut pending: Vec<PrefixNode> = std::mem::take(&mut self.root.children)
            .into_values()
            .collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(std::mem::take(&mut node.children).into_values());
        }
    }
}

impl<W> Extend<(W, i64)> for PrefixIndex
where
    W: AsRef<str>,
{
    fn extend<I: IntoIterator<Item = (W, i64)>>(&mut self, iter: I) {
        for (word, frequency) in iter {
            self.insert(word, frequency);
        }
    }
}

impl<W> FromIterator<(W, i64)> for PrefixIndex
where
    W: AsRef<str>,
{
    fn from_iter<I: IntoIterator<Item = (W, i64)>>(iter: I) -> Self {
        let mut index = Self::new();
        index.extend(iter);
        index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(predictions: &[Prediction]) -> Vec<(&str, i64)> {
        predictions
            .iter()
            .map(|p| (p.word.as_str(), p.frequency))
            .collect()
    }

    #[test]
    fn test_index_basic_operations() {
        let mut index = PrefixIndex::new();

        // Test initial state
        assert!(index.is_empty());
        assert_eq!(index.node_count(), 1);

        // Test insertion
        index.insert("apple", 5);
        index.insert("app", 2);
        index.insert("application", 3);
        assert_eq!(index.len(), 3);
        assert!(!index.is_empty());

        // Test retrieval
        assert!(index.contains("apple"));
        assert!(index.contains("app"));
        assert!(index.contains("application"));
        assert!(!index.contains("appl"));
        assert!(!index.contains("apples"));
        assert_eq!(index.frequency("apple"), Some(5));
        assert_eq!(index.frequency("appl"), None);
    }

    #[test]
    fn test_repeated_insert_accumulates() {
        let mut index = PrefixIndex::new();
        index.insert("banana", 2);
        index.insert("banana", 3);

        assert_eq!(index.len(), 1);
        assert_eq!(pairs(&index.predict("ban", 5)), vec![("banana", 5)]);
    }

    #[test]
    fn test_insert_word_uses_default_frequency() {
        let mut index = PrefixIndex::new();
        index.insert_word("kiwi");
        index.insert_word("kiwi");
        assert_eq!(index.frequency("kiwi"), Some(2));
    }

    #[test]
    fn test_index_prefix_search() {
        let mut index = PrefixIndex::new();
        index.insert("car", 2);
        index.insert("cat", 5);
        index.insert("carbon", 4);
        index.insert("castle", 1);

        assert_eq!(
            pairs(&index.predict("ca", 10)),
            vec![("cat", 5), ("carbon", 4), ("car", 2), ("castle", 1)]
        );

        // Test with no matches
        assert!(index.predict("dog", 10).is_empty());
        assert!(index.predict("cart", 10).is_empty());
    }

    #[test]
    fn test_ties_break_lexicographically() {
        let mut index = PrefixIndex::new();
        index.insert("beta", 3);
        index.insert("alpha", 3);
        index.insert("gamma", 3);
        index.insert("delta", 7);

        assert_eq!(
            pairs(&index.predict("", 10)),
            vec![("delta", 7), ("alpha", 3), ("beta", 3), ("gamma", 3)]
        );
    }

    #[test]
    fn test_truncation_happens_after_sort() {
        let mut index = PrefixIndex::new();
        index.insert("aa", 1);
        index.insert("ab", 1);
        index.insert("azzz", 9);

        assert_eq!(pairs(&index.predict("a", 1)), vec![("azzz", 9)]);
        assert!(index.predict("a", 0).is_empty());
    }

    #[test]
    fn test_prefix_is_included_when_terminal() {
        let mut index = PrefixIndex::new();
        index.insert("car", 1);
        index.insert("carbon", 1);

        assert_eq!(
            pairs(&index.predict("car", 10)),
            vec![("car", 1), ("carbon", 1)]
        );
    }

    #[test]
    fn test_empty_word_marks_root() {
        let mut index = PrefixIndex::new();
        assert!(!index.contains(""));

        index.insert("", 4);
        assert!(index.contains(""));
        assert_eq!(pairs(&index.predict("", 10)), vec![("", 4)]);
    }

    #[test]
    fn test_zero_and_negative_increments_are_accepted() {
        let mut index = PrefixIndex::new();
        index.insert("zero", 0);
        index.insert("neg", 2);
        index.insert("neg", -5);

        assert!(index.contains("zero"));
        assert_eq!(index.frequency("zero"), Some(0));
        assert_eq!(index.frequency("neg"), Some(-3));
        assert_eq!(
            pairs(&index.predict("", 10)),
            vec![("zero", 0), ("neg", -3)]
        );
    }

    #[test]
    fn test_multibyte_characters() {
        let mut index = PrefixIndex::new();
        index.insert("café", 2);
        index.insert("cafés", 1);

        assert!(index.contains("café"));
        assert!(!index.contains("caf"));
        assert_eq!(
            pairs(&index.predict("caf", 10)),
            vec![("café", 2), ("cafés", 1)]
        );
    }

    #[test]
    fn test_core_does_not_fold_case() {
        let mut index = PrefixIndex::new();
        index.insert("Rust", 1);

        assert!(index.contains("Rust"));
        assert!(!index.contains("rust"));
    }

    #[test]
    fn test_collect_from_pairs() {
        let index: PrefixIndex = vec![("one", 1), ("two", 2), ("one", 3)]
            .into_iter()
            .collect();

        assert_eq!(index.len(), 2);
        assert_eq!(index.frequency("one"), Some(4));
    }

    #[test]
    fn test_very_long_word_drops_without_overflow() {
        let word: String = std::iter::repeat('x').take(200_000).collect();
        let mut index = PrefixIndex::new();
        index.insert(&word, 1);

        assert!(index.contains(&word));
        assert_eq!(index.node_count(), 200_001);
        drop(index);
    }
}
