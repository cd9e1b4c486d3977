//! Data structures for the prefix dictionary.
//!
//! The prefix index is the core of the crate; every other module reaches the
//! stored words through its API.

pub mod prefix_index;

// Re-export common data structures
pub use prefix_index::{PrefixIndex, Prediction, SharedPrefixIndex};
