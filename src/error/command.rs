//! Command error module.
//!
//! Errors raised while turning an input line into a command.

use thiserror::Error;

/// Errors that can occur while parsing a command line.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// A required argument was missing; carries the usage line to show.
    #[error("Usage: {usage}")]
    MissingArgument {
        /// Usage line for the command, without the `Usage: ` prefix
        usage: &'static str,
    },
}

impl CommandError {
    /// Usage line for the command that failed to parse.
    pub fn usage(&self) -> &'static str {
        match self {
            Self::MissingArgument { usage } => usage,
        }
    }
}
