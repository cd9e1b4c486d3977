//! Interactive session configuration module.

use super::{ConfigResult, Validate};
use crate::data_structures::prefix_index::DEFAULT_LIMIT;
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};

/// Interactive session configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReplConfig {
    /// Prompt printed before each command
    pub prompt: String,

    /// Number of predictions shown when `predict` gets no count
    pub default_limit: usize,

    /// Whether words and prefixes are ASCII-lowercased before use
    pub lowercase_input: bool,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            prompt: "> ".to_string(),
            default_limit: DEFAULT_LIMIT,
            lowercase_input: true,
        }
    }
}

impl Validate for ReplConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.default_limit == 0 {
            return Err(ConfigError::ValueOutOfRange {
                key: "repl.default_limit".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }

        if self.prompt.contains('\n') {
            return Err(ConfigError::ValidationError(
                "prompt must fit on a single line".to_string(),
            ));
        }

        Ok(())
    }
}
