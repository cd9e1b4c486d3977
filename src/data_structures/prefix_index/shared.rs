//! Thread-safe handle to a prefix index.
//!
//! The index has no internal synchronization, so the whole tree is guarded by
//! one exclusive lock held for the duration of every operation.

use std::sync::Arc;

use parking_lot::Mutex;

use super::{PrefixIndex, Prediction};

/// A cloneable, lock-guarded [`PrefixIndex`].
#[derive(Debug, Clone, Default)]
pub struct SharedPrefixIndex {
    inner: Arc<Mutex<PrefixIndex>>,
}

impl SharedPrefixIndex {
    /// Creates a new handle around an empty index.
    pub fn new() -> Self {
        Self::from_index(PrefixIndex::new())
    }

    /// Wraps an existing index.
    pub fn from_index(index: PrefixIndex) -> Self {
        Self {
            inner: Arc::new(Mutex::new(index)),
        }
    }

    /// Inserts `word` under the lock. See [`PrefixIndex::insert`].
    pub fn insert<W: AsRef<str>>(&self, word: W, frequency: i64) {
        self.inner.lock().insert(word, frequency);
    }

    /// Checks membership under the lock. See [`PrefixIndex::contains`].
    pub fn contains<W: AsRef<str>>(&self, word: W) -> bool {
        self.inner.lock().contains(word)
    }

    /// Runs a ranked prefix query under the lock. See [`PrefixIndex::predict`].
    pub fn predict<P: AsRef<str>>(&self, prefix: P, limit: usize) -> Vec<Prediction> {
        self.inner.lock().predict(prefix, limit)
    }

    /// Returns the number of distinct words.
    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    /// Checks if the index holds no words.
    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    /// Runs `f` with exclusive access to the index.
    ///
    /// Bulk loads go through here so a whole file is applied under one lock.
    pub fn with_index<F, T>(&self, f: F) -> T
    where
        F: FnOnce(&mut PrefixIndex) -> T,
    {
        let mut guard = self.inner.lock();
        f(&mut guard)
    }

    /// Unwraps the index if this is the last handle, otherwise returns `self`.
    pub fn try_into_inner(self) -> Result<PrefixIndex, Self> {
        Arc::try_unwrap(self.inner)
            .map(Mutex::into_inner)
            .map_err(|inner| Self { inner })
    }
}
