// Copyright (c) 2025 Lexitrie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Populating a trie from a plain-text word list.
//!
//! The format is one word per line. Surrounding whitespace is trimmed,
//! blank lines are ignored, and so are lines starting with the configured
//! comment marker.

use std::fs;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{debug, warn};

use crate::config::WordListConfig;
use crate::error::{LexiError, LexiResult};
use crate::trie::Trie;

/// Outcome of loading a word list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Words that were new to the trie
    pub inserted: usize,
    /// Words that were already present
    pub duplicates: usize,
    /// Lines rejected by the trie and skipped
    pub skipped: usize,
}

/// Reads word lists into a [`Trie`].
#[derive(Debug, Clone, Default)]
pub struct WordListLoader {
    config: WordListConfig,
}

impl WordListLoader {
    /// Creates a loader with the given settings.
    pub fn new(config: WordListConfig) -> Self {
        Self { config }
    }

    /// Loads every word from the file at `path` into `trie`.
    pub fn load_file<P: AsRef<Path>>(&self, path: P, trie: &mut Trie) -> LexiResult<LoadReport> {
        let path = path.as_ref();
        let file = fs::File::open(path)?;
        let report = self.load_reader(BufReader::new(file), trie)?;
        debug!(
            path = %path.display(),
            inserted = report.inserted,
            duplicates = report.duplicates,
            skipped = report.skipped,
            "word list loaded"
        );
        Ok(report)
    }

    /// Loads every word from `reader` into `trie`.
    ///
    /// # Errors
    ///
    /// IO failures are returned as [`LexiError::Io`]. A word the trie
    /// rejects is returned as [`LexiError::WordList`] unless
    /// `skip_invalid` is set, in which case it is logged and counted.
    /// Words inserted before a failure stay in the trie.
    pub fn load_reader<R: BufRead>(&self, reader: R, trie: &mut Trie) -> LexiResult<LoadReport> {
        let mut report = LoadReport::default();

        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            let word = line.trim();
            if word.is_empty() || word.starts_with(self.config.comment_prefix.as_str()) {
                continue;
            }

            match trie.insert(word) {
                Ok(true) => report.inserted += 1,
                Ok(false) => report.duplicates += 1,
                Err(source) if self.config.skip_invalid => {
                    warn!(line = index + 1, error = %source, "skipping word");
                    report.skipped += 1;
                }
                Err(source) => {
                    return Err(LexiError::WordList {
                        line: index + 1,
                        source,
                    })
                }
            }
        }

        Ok(report)
    }
}
