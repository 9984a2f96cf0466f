// Copyright (c) 2025 Lexitrie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Error types for the trie.
//!
//! Absent words are never errors; these cover malformed input and
//! misuse of the result list.

/// Errors that can occur in trie operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TrieError {
    /// A character outside `a..=z` was found after normalization.
    #[error("Invalid character '{character}' at position {position} in '{word}' (only a-z are supported)")]
    InvalidCharacter {
        /// The normalized word that was rejected.
        word: String,
        /// The offending character.
        character: char,
        /// Character offset of the offending character.
        position: usize,
    },

    /// Error when a key exceeds the maximum depth allowed.
    #[error("Key '{key}' exceeds maximum trie depth of {max_depth}")]
    KeyTooLong {
        /// The key that was too long.
        key: String,
        /// The maximum allowed depth.
        max_depth: usize,
    },

    /// Read past the logical end of a suggestion list.
    #[error("Index {index} out of bounds for suggestion list of length {len}")]
    IndexOutOfBounds {
        /// The requested index.
        index: usize,
        /// The number of suggestions available.
        len: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TrieError::InvalidCharacter {
            word: "ab1".to_string(),
            character: '1',
            position: 2,
        };
        assert_eq!(
            err.to_string(),
            "Invalid character '1' at position 2 in 'ab1' (only a-z are supported)"
        );

        let err = TrieError::KeyTooLong {
            key: "test".to_string(),
            max_depth: 3,
        };
        assert_eq!(err.to_string(), "Key 'test' exceeds maximum trie depth of 3");

        let err = TrieError::IndexOutOfBounds { index: 4, len: 2 };
        assert_eq!(
            err.to_string(),
            "Index 4 out of bounds for suggestion list of length 2"
        );
    }
}
