//! Test modules for Lexitrie.
//!
//! This module contains the crate-internal test suites:
//! - Configuration loading and validation
//! - Error conversion and display
//! - Word list loading
//! - Property-based tests for the trie using proptest
//! - Shared fixtures and strategies

pub mod config_tests;

pub use test_utils::{word_set_strategy, word_strategy, TestFixture};
