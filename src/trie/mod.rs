// Copyright (c) 2025 Lexitrie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Lowercase alphabetic prefix tree.
//!
//! This module provides a trie over the 26-letter alphabet `a..=z` with
//! exact-match search, prefix checks, lexicographically ordered
//! autocomplete and deletion that prunes branches left empty.
//!
//! # Example
//!
//! ```
//! use lexitrie::trie::Trie;
//!
//! let mut trie = Trie::new();
//! for word in ["hello", "world", "trie", "tree"] {
//!     trie.insert(word).unwrap();
//! }
//!
//! assert!(trie.search("hello").unwrap());
//! trie.delete("hello").unwrap();
//! assert!(!trie.search("hello").unwrap());
//!
//! assert_eq!(trie.autocomplete("tr").unwrap(), ["tree", "trie"]);
//! assert!(trie.starts_with("wor").unwrap());
//! assert!(!trie.starts_with("xyz").unwrap());
//! ```
//!
//! Input outside the alphabet is rejected before the trie is touched:
//!
//! ```
//! use lexitrie::trie::{Trie, TrieError};
//!
//! let mut trie = Trie::new();
//! let err = trie.insert("r2d2").unwrap_err();
//! assert!(matches!(err, TrieError::InvalidCharacter { character: '2', position: 1, .. }));
//! assert!(trie.is_empty());
//! ```

mod error;
mod node;
mod suggestions;

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use tracing::trace;

pub use error::TrieError;
use node::{letter_of, TrieNode};
pub use suggestions::{SuggestionIter, Suggestions};

/// Result type for trie operations
pub type TrieResult<T> = Result<T, TrieError>;

/// Configuration options for the trie
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrieConfig {
    /// Whether input is taken as-is; when false it is lowercased first
    pub case_sensitive: bool,

    /// Optional maximum word length; `None` accepts words of any length
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_depth: Option<usize>,
}

impl Default for TrieConfig {
    fn default() -> Self {
        Self {
            case_sensitive: false,
            max_depth: None,
        }
    }
}

/// How deleting a word changes the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Removal {
    /// The word was not present; nothing changes.
    Absent,
    /// Only the end-of-word flag is cleared; every node on the path stays.
    Retained,
    /// The node at depth `cut` keeps living but detaches its child on the
    /// word's path, dropping the dead chain below it.
    Prune { cut: usize },
}

/// A prefix tree over lowercase ASCII letters.
///
/// The root always exists and represents the empty prefix. Nodes are
/// owned exclusively by their parent, so dropping a detached child frees
/// its whole subtree.
#[derive(Debug)]
pub struct Trie {
    /// The root node of the trie
    root: TrieNode,

    /// Number of words stored
    len: usize,

    /// Configuration options
    config: TrieConfig,
}

impl Trie {
    /// Creates a new empty `Trie` with default configuration.
    pub fn new() -> Self {
        Self::with_config(TrieConfig::default())
    }

    /// Creates a new empty `Trie` with the specified configuration.
    pub fn with_config(config: TrieConfig) -> Self {
        Self {
            root: TrieNode::new(),
            len: 0,
            config,
        }
    }

    /// Returns the configuration this trie was built with.
    pub fn config(&self) -> &TrieConfig {
        &self.config
    }

    /// Inserts a word into the trie.
    ///
    /// Inserting the empty string marks the root as a word. Inserting a
    /// word twice leaves the trie unchanged.
    ///
    /// # Returns
    ///
    /// * `Ok(true)` - the word was not present before.
    /// * `Ok(false)` - the word was already present.
    /// * `Err(TrieError)` - the word contains characters outside `a..=z`
    ///   or is longer than the configured `max_depth`.
    pub fn insert<W>(&mut self, word: W) -> TrieResult<bool>
    where
        W: AsRef<str>,
    {
        let word = self.normalize(word.as_ref())?;

        let node = word
            .bytes()
            .fold(&mut self.root, |node, letter| node.child_or_insert(letter));

        let is_new = !node.is_end_of_word;
        node.is_end_of_word = true;
        if is_new {
            self.len += 1;
        }

        trace!(word = %word, is_new, "insert");
        Ok(is_new)
    }

    /// Checks whether `word` was inserted as a complete word.
    ///
    /// Prefixes of inserted words that were not themselves inserted
    /// report `false`.
    pub fn search<W>(&self, word: W) -> TrieResult<bool>
    where
        W: AsRef<str>,
    {
        let word = self.normalize(word.as_ref())?;
        Ok(self.find(&word).is_some_and(|node| node.is_end_of_word))
    }

    /// Checks whether any stored word starts with `prefix`.
    ///
    /// The empty prefix always matches, even in an empty trie.
    pub fn starts_with<P>(&self, prefix: P) -> TrieResult<bool>
    where
        P: AsRef<str>,
    {
        let prefix = self.normalize(prefix.as_ref())?;
        Ok(self.find(&prefix).is_some())
    }

    /// Removes a word from the trie, pruning every node that no longer
    /// leads to a word. The root is never removed.
    ///
    /// # Returns
    ///
    /// * `Ok(true)` - the word was present and has been removed.
    /// * `Ok(false)` - the word was not present; the trie is unchanged.
    /// * `Err(TrieError)` - the word is not valid input.
    pub fn delete<W>(&mut self, word: W) -> TrieResult<bool>
    where
        W: AsRef<str>,
    {
        let word = self.normalize(word.as_ref())?;
        let letters = word.as_bytes();

        let removal = self.plan_removal(letters);
        match removal {
            Removal::Absent => {}
            Removal::Retained => {
                if let Some(node) = self.find_mut(letters) {
                    node.is_end_of_word = false;
                }
            }
            Removal::Prune { cut } => {
                if let Some(node) = self.find_mut(&letters[..cut]) {
                    node.remove_child(letters[cut]);
                }
            }
        }

        let removed = removal != Removal::Absent;
        if removed {
            self.len -= 1;
        }

        trace!(word = %word, ?removal, "delete");
        Ok(removed)
    }

    /// Decides how deleting `letters` reshapes the tree, without mutating it.
    ///
    /// Once the end-of-word flag is cleared, a childless final node is dead,
    /// and so is every ancestor whose only child is dead and which does not
    /// end a word of its own. The walk down remembers the deepest node that
    /// breaks that chain; it is where the dead suffix gets detached. The root
    /// always survives.
    fn plan_removal(&self, letters: &[u8]) -> Removal {
        let mut node = &self.root;
        let mut cut = 0;

        for (depth, &letter) in letters.iter().enumerate() {
            if depth > 0 && (node.is_end_of_word || node.child_count() > 1) {
                cut = depth;
            }
            match node.child(letter) {
                Some(child) => node = child,
                None => return Removal::Absent,
            }
        }

        if !node.is_end_of_word {
            Removal::Absent
        } else if letters.is_empty() || node.has_children() {
            Removal::Retained
        } else {
            Removal::Prune { cut }
        }
    }

    /// Returns every stored word starting with `prefix`, in lexicographic
    /// order. An unknown prefix yields an empty list.
    pub fn autocomplete<P>(&self, prefix: P) -> TrieResult<Suggestions>
    where
        P: AsRef<str>,
    {
        let prefix = self.normalize(prefix.as_ref())?;
        let mut suggestions = Suggestions::new();

        if let Some(node) = self.find(&prefix) {
            Self::collect_words(node, &prefix, &mut suggestions);
        }

        trace!(prefix = %prefix, matches = suggestions.len(), "autocomplete");
        Ok(suggestions)
    }

    /// Depth-first walk in ascending letter order below `start`, using an
    /// explicit stack of `(node, next slot to visit)` frames. `buffer`
    /// always spells the path to the top frame.
    fn collect_words<'a>(start: &'a TrieNode, prefix: &str, out: &mut Suggestions) {
        let mut buffer = String::from(prefix);
        if start.is_end_of_word {
            out.push(buffer.clone());
        }

        let mut stack: Vec<(&'a TrieNode, usize)> = vec![(start, 0)];
        while let Some(frame) = stack.last_mut() {
            let node: &'a TrieNode = frame.0;
            match node.next_child(frame.1) {
                Some((slot, child)) => {
                    frame.1 = slot + 1;
                    buffer.push(letter_of(slot));
                    if child.is_end_of_word {
                        out.push(buffer.clone());
                    }
                    stack.push((child, 0));
                }
                None => {
                    stack.pop();
                    if !stack.is_empty() {
                        buffer.pop();
                    }
                }
            }
        }
    }

    /// Number of words in the trie.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the trie holds no words.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of nodes, including the root.
    ///
    /// After every word has been deleted this is back to `1`.
    pub fn node_count(&self) -> usize {
        self.root.subtree_size()
    }

    /// Removes every word. The configuration is kept.
    pub fn clear(&mut self) {
        self.root = TrieNode::new();
        self.len = 0;
    }

    fn find(&self, key: &str) -> Option<&TrieNode> {
        key.bytes()
            .try_fold(&self.root, |node, letter| node.child(letter))
    }

    fn find_mut(&mut self, letters: &[u8]) -> Option<&mut TrieNode> {
        letters
            .iter()
            .try_fold(&mut self.root, |node, &letter| node.child_mut(letter))
    }

    /// Applies case folding, then checks the depth limit and alphabet.
    fn normalize<'a>(&self, key: &'a str) -> TrieResult<Cow<'a, str>> {
        let key = if self.config.case_sensitive || !key.chars().any(char::is_uppercase) {
            Cow::Borrowed(key)
        } else {
            Cow::Owned(key.to_lowercase())
        };

        if let Some((position, character)) = key
            .chars()
            .enumerate()
            .find(|(_, c)| !c.is_ascii_lowercase())
        {
            return Err(TrieError::InvalidCharacter {
                word: key.into_owned(),
                character,
                position,
            });
        }

        if let Some(max_depth) = self.config.max_depth {
            if key.len() > max_depth {
                return Err(TrieError::KeyTooLong {
                    key: key.into_owned(),
                    max_depth,
                });
            }
        }

        Ok(key)
    }
}

impl Default for Trie {
    fn default() -> Self {
        Self::new()
    }
}
