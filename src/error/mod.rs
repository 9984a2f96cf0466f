// Copyright (c) 2025 Lexitrie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Error module for Lexitrie.
//!
//! Each component owns a `thiserror` enum; [`LexiError`] aggregates them
//! for the word-list loader and the command-line harness.

use thiserror::Error;

use crate::trie::TrieError;

pub mod config;

/// Result type alias used throughout Lexitrie.
pub type LexiResult<T> = Result<T, LexiError>;

/// Core error enum for Lexitrie.
#[derive(Error, Debug)]
pub enum LexiError {
    /// Errors occurring during configuration loading or validation.
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Errors raised by trie operations.
    #[error("Trie error: {0}")]
    Trie(#[from] TrieError),

    /// A word list line could not be inserted.
    #[error("Word list line {line}: {source}")]
    WordList {
        /// 1-based line number in the word list
        line: usize,
        /// The underlying trie error
        #[source]
        source: TrieError,
    },

    /// IO errors that may occur during file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/Deserialization errors.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Custom error with message for cases where specific error types are not defined.
    #[error("{0}")]
    Custom(String),
}
