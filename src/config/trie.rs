//! Trie configuration validation.
//!
//! The settings themselves live on [`TrieConfig`] next to the trie so the
//! data structure can be used without the configuration layer.

use super::{ConfigResult, Validate};
use crate::error::config::ConfigError;
use crate::trie::TrieConfig;

impl Validate for TrieConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.max_depth == Some(0) {
            return Err(ConfigError::ValidationError(
                "max_depth must be greater than 0 when set".to_string(),
            ));
        }

        Ok(())
    }
}
