// Copyright (c) 2025 Lexitrie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Ordered autocomplete results.

use serde::Serialize;

use super::{TrieError, TrieResult};

/// Words produced by [`Trie::autocomplete`](super::Trie::autocomplete),
/// in lexicographic order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Suggestions {
    words: Vec<String>,
}

impl Suggestions {
    /// Creates an empty suggestion list.
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, word: String) {
        self.words.push(word);
    }

    /// Number of suggestions.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether there are no suggestions.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Returns the suggestion at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`TrieError::IndexOutOfBounds`] when `index >= len()`.
    pub fn get(&self, index: usize) -> TrieResult<&str> {
        self.words
            .get(index)
            .map(String::as_str)
            .ok_or(TrieError::IndexOutOfBounds {
                index,
                len: self.words.len(),
            })
    }

    /// Iterates over the suggestions in order.
    pub fn iter(&self) -> SuggestionIter<'_> {
        SuggestionIter {
            inner: self.words.iter(),
        }
    }

    /// Consumes the list, returning the underlying words.
    pub fn into_vec(self) -> Vec<String> {
        self.words
    }
}

/// Borrowing iterator over [`Suggestions`], yielding `&str`.
#[derive(Debug, Clone)]
pub struct SuggestionIter<'a> {
    inner: std::slice::Iter<'a, String>,
}

impl<'a> Iterator for SuggestionIter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(String::as_str)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for SuggestionIter<'_> {}

impl DoubleEndedIterator for SuggestionIter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(String::as_str)
    }
}

impl IntoIterator for Suggestions {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.into_iter()
    }
}

impl<'a> IntoIterator for &'a Suggestions {
    type Item = &'a str;
    type IntoIter = SuggestionIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl PartialEq<[&str]> for Suggestions {
    fn eq(&self, other: &[&str]) -> bool {
        self.words.len() == other.len() && self.words.iter().zip(other).all(|(a, b)| a == b)
    }
}

impl<const N: usize> PartialEq<[&str; N]> for Suggestions {
    fn eq(&self, other: &[&str; N]) -> bool {
        *self == other[..]
    }
}
