//! Word list loader configuration module.

use super::{ConfigResult, Validate};
use crate::data_structures::prefix_index::DEFAULT_FREQUENCY;
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};

/// Word list loader configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoaderConfig {
    /// Whether loaded words are ASCII-lowercased before insertion
    pub lowercase_words: bool,

    /// Frequency used for records without a valid frequency field
    pub default_frequency: i64,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            lowercase_words: true,
            default_frequency: DEFAULT_FREQUENCY,
        }
    }
}

impl Validate for LoaderConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.default_frequency <= 0 {
            return Err(ConfigError::ValueOutOfRange {
                key: "loader.default_frequency".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        Ok(())
    }
}
