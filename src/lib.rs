//! Prefix Dictionary Library
//!
//! This library contains a prefix-indexed word dictionary with exact lookup,
//! frequency-ranked autocomplete and bulk loading from word lists, together
//! with the command layer and interactive session built on top of it.
//!
//! # Architecture
//!
//! - [`data_structures::PrefixIndex`] is the trie. It has no failure modes and
//!   does no case folding.
//! - [`loader`] parses `word [frequency]` lines and feeds them to the index.
//! - [`commands`] and [`repl`] form the interactive tool; [`selftest`] backs
//!   its `test` command.
//! - [`config`] and [`error`] carry the layered configuration and the boundary
//!   error types.

pub mod commands;
pub mod config;
pub mod data_structures;
pub mod error;
pub mod loader;
pub mod logging;
pub mod repl;
pub mod selftest;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

/// Version information for the prefix dictionary.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
