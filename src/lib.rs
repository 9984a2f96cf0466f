//! Lexitrie Library
//!
//! A prefix tree over the lowercase ASCII alphabet supporting insertion,
//! exact-match search, prefix checks, ordered autocomplete and deletion
//! that prunes branches no word passes through anymore.
//!
//! The [`trie`] module is self-contained. The [`config`], [`error`] and
//! [`word_list`] modules support the `lexitrie` command-line tool.
//!
//! # Concurrency
//!
//! [`trie::Trie`] is a plain single-threaded structure: mutations take
//! `&mut self`. Callers sharing one across threads wrap the whole trie
//! in a single lock.

pub mod config;
pub mod error;
pub mod trie;
pub mod word_list;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

pub use trie::{Suggestions, Trie, TrieConfig, TrieError, TrieResult};

/// Version information for Lexitrie.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
