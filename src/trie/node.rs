// Copyright (c) 2025 Lexitrie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Node implementation for the trie.
//!
//! Each node owns a fixed 26-slot table of children, one per lowercase
//! letter, so sibling order is alphabetical by construction.

use std::fmt;

/// Number of letters in the supported alphabet.
pub(crate) const ALPHABET_SIZE: usize = 26;

/// Maps a lowercase ASCII letter to its child slot.
///
/// Callers validate input first; anything outside `a..=z` is a logic error.
#[inline]
pub(crate) fn slot_of(letter: u8) -> usize {
    debug_assert!(letter.is_ascii_lowercase());
    (letter - b'a') as usize
}

/// Maps a child slot back to its letter.
#[inline]
pub(crate) fn letter_of(slot: usize) -> char {
    debug_assert!(slot < ALPHABET_SIZE);
    (b'a' + slot as u8) as char
}

/// A node in the trie.
///
/// The path from the root to a node spells a prefix; `is_end_of_word`
/// marks that prefix as a complete inserted word. None of the methods
/// recurse, so word length is bounded by memory rather than stack size.
#[derive(Default)]
pub(crate) struct TrieNode {
    /// Child slots indexed by `letter - b'a'`
    children: [Option<Box<TrieNode>>; ALPHABET_SIZE],

    /// Whether a complete word terminates at this node
    pub is_end_of_word: bool,
}

impl TrieNode {
    /// Creates a new empty trie node.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the child for `letter`, if present. Bytes outside `a..=z` have no child.
    pub fn child(&self, letter: u8) -> Option<&TrieNode> {
        if !letter.is_ascii_lowercase() {
            return None;
        }
        self.children[slot_of(letter)].as_deref()
    }

    /// Mutable access to the child for `letter`, if present.
    pub fn child_mut(&mut self, letter: u8) -> Option<&mut TrieNode> {
        if !letter.is_ascii_lowercase() {
            return None;
        }
        self.children[slot_of(letter)].as_deref_mut()
    }

    /// Returns the child for `letter`, creating an empty one if absent.
    pub fn child_or_insert(&mut self, letter: u8) -> &mut TrieNode {
        self.children[slot_of(letter)].get_or_insert_with(Box::default)
    }

    /// Detaches the child for `letter` together with its subtree.
    pub fn remove_child(&mut self, letter: u8) -> Option<Box<TrieNode>> {
        self.children[slot_of(letter)].take()
    }

    /// First present child at or after `slot`, with its slot index.
    pub fn next_child(&self, slot: usize) -> Option<(usize, &TrieNode)> {
        self.children
            .iter()
            .enumerate()
            .skip(slot)
            .find_map(|(index, child)| child.as_deref().map(|node| (index, node)))
    }

    /// Iterates over present children in ascending letter order.
    pub fn children(&self) -> impl Iterator<Item = (char, &TrieNode)> {
        self.children
            .iter()
            .enumerate()
            .filter_map(|(slot, child)| child.as_deref().map(|node| (letter_of(slot), node)))
    }

    /// Whether any child slot is populated.
    pub fn has_children(&self) -> bool {
        self.children.iter().any(Option::is_some)
    }

    /// Number of populated child slots.
    pub fn child_count(&self) -> usize {
        self.children.iter().filter(|child| child.is_some()).count()
    }

    /// Counts this node and all of its descendants.
    pub fn subtree_size(&self) -> usize {
        let mut count = 0;
        let mut pending = vec![self];
        while let Some(node) = pending.pop() {
            count += 1;
            pending.extend(node.children().map(|(_, child)| child));
        }
        count
    }
}

impl Drop for TrieNode {
    // Boxed children would otherwise be freed recursively, one stack frame per letter.
    fn drop(&mut self) {
        let mut pending: Vec<Box<TrieNode>> =
            self.children.iter_mut().filter_map(Option::take).collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.children.iter_mut().filter_map(Option::take));
        }
    }
}

impl fmt::Debug for TrieNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TrieNode")
            .field("is_end_of_word", &self.is_end_of_word)
            .field(
                "children",
                &self.children().map(|(letter, _)| letter).collect::<String>(),
            )
            .finish()
    }
}
