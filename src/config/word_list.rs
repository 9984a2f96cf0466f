//! Word list configuration module.
//!
//! Controls how plain-text word lists are read into a trie.

use super::{ConfigResult, Validate};
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};

/// Word list loading configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WordListConfig {
    /// Skip (and log) words the trie rejects instead of failing the load
    pub skip_invalid: bool,

    /// Lines starting with this marker are ignored
    pub comment_prefix: String,
}

impl Default for WordListConfig {
    fn default() -> Self {
        Self {
            skip_invalid: true,
            comment_prefix: "#".to_string(),
        }
    }
}

impl Validate for WordListConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.comment_prefix.is_empty() {
            return Err(ConfigError::ValidationError(
                "comment_prefix must not be empty".to_string(),
            ));
        }

        if self.comment_prefix.chars().any(char::is_whitespace) {
            return Err(ConfigError::ValidationError(format!(
                "comment_prefix must not contain whitespace: {:?}",
                self.comment_prefix
            )));
        }

        Ok(())
    }
}
