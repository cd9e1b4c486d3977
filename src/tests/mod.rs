//! Test modules for the prefix dictionary.
//!
//! This module holds the crate-level suites:
//! - Property-based tests of the prefix index using proptest
//! - Loader tests against real files
//! - Configuration and error handling tests
//! - Shared fixtures and strategies

pub mod loader_tests;

// Re-export commonly used testing tools to simplify imports in test modules
pub use test_utils::{entries_strategy, word_strategy, TestFixture};
