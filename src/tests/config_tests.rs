//! Tests for the configuration module.
//!
//! This module contains tests for configuration loading, validation, and usage.

use crate::config::{ConfigLoader, LexiConfig, Validate, WordListConfig};
use crate::trie::TrieConfig;
use crate::error::config::ConfigError;
use crate::tests::TestFixture;
use std::path::PathBuf;

/// Test that default configuration can be created and is valid.
#[test]
fn test_default_config_is_valid() {
    let config = LexiConfig::default();
    assert!(config.validate().is_ok());
    assert!(!config.trie.case_sensitive);
    assert_eq!(config.trie.max_depth, None);
    assert!(config.word_list.skip_invalid);
    assert_eq!(config.word_list.comment_prefix, "#");
}

/// Test that configuration validation catches invalid values.
#[test]
fn test_config_validation() {
    let mut config = LexiConfig::default();

    config.trie.max_depth = Some(0);
    assert!(config.validate().is_err());

    config.trie.max_depth = Some(32);
    config.word_list.comment_prefix = String::new();
    assert!(config.validate().is_err());

    config.word_list.comment_prefix = "# ".to_string();
    assert!(config.validate().is_err());

    config.word_list.comment_prefix = "//".to_string();
    config.log.level = "verbose".to_string();
    assert!(config.validate().is_err());

    config.log.level = "debug".to_string();
    assert!(config.validate().is_ok());
}

/// Without a file or environment overrides the defaults are returned.
#[test]
fn test_load_defaults() {
    let loader = ConfigLoader::new(None::<PathBuf>, "LEXITEST_DEFAULTS");
    assert_eq!(loader.load().unwrap(), LexiConfig::default());
}

/// Test loading configuration from a TOML file.
#[test]
fn test_load_config_from_toml_file() {
    let fixture = TestFixture::new().unwrap();
    let path = fixture
        .create_file(
            "lexitrie.toml",
            r#"
            [trie]
            case_sensitive = true
            max_depth = 32

            [log]
            level = "debug"
            "#,
        )
        .unwrap();

    let config = ConfigLoader::new(Some(&path), "LEXITEST_TOML").load().unwrap();

    assert!(config.trie.case_sensitive);
    assert_eq!(config.trie.max_depth, Some(32));
    assert_eq!(config.log.level, "debug");

    // Other values should be defaults
    assert_eq!(config.word_list, WordListConfig::default());
    assert!(!config.log.json);
}

/// Test loading configuration from a JSON file.
#[test]
fn test_load_config_from_json_file() {
    let fixture = TestFixture::new().unwrap();
    let path = fixture
        .create_file(
            "lexitrie.json",
            r#"{ "word_list": { "comment_prefix": "//", "skip_invalid": false } }"#,
        )
        .unwrap();

    let config = ConfigLoader::new(Some(&path), "LEXITEST_JSON").load().unwrap();

    assert_eq!(config.word_list.comment_prefix, "//");
    assert!(!config.word_list.skip_invalid);
    assert_eq!(config.trie, TrieConfig::default());
}

/// Environment variables override file values.
#[test]
fn test_environment_overrides() {
    std::env::set_var("LEXITEST_ENV__TRIE__MAX_DEPTH", "16");
    std::env::set_var("LEXITEST_ENV__LOG__JSON", "true");

    let config = ConfigLoader::new(None::<PathBuf>, "LEXITEST_ENV").load();

    std::env::remove_var("LEXITEST_ENV__TRIE__MAX_DEPTH");
    std::env::remove_var("LEXITEST_ENV__LOG__JSON");

    let config = config.unwrap();
    assert_eq!(config.trie.max_depth, Some(16));
    assert!(config.log.json);
}

/// A file that violates validation rules is rejected after loading.
#[test]
fn test_invalid_file_is_rejected() {
    let fixture = TestFixture::new().unwrap();
    let path = fixture
        .create_file("bad.toml", "[trie]\nmax_depth = 0\n")
        .unwrap();

    let result = ConfigLoader::new(Some(&path), "LEXITEST_INVALID").load();
    assert!(matches!(result, Err(ConfigError::ValidationError(_))));
}

#[test]
fn test_missing_file() {
    let result = ConfigLoader::new(Some("/nonexistent/lexitrie.toml"), "LEXITEST_MISSING").load();
    assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
}

#[test]
fn test_unsupported_extension() {
    let fixture = TestFixture::new().unwrap();
    let path = fixture.create_file("lexitrie.ini", "[trie]\n").unwrap();

    let result = ConfigLoader::new(Some(&path), "LEXITEST_EXT").load();
    assert!(matches!(result, Err(ConfigError::ParseError(_))));
}

/// The generated default file loads back to the defaults.
#[test]
fn test_generated_config_round_trips() {
    let fixture = TestFixture::new().unwrap();
    let toml = toml::to_string_pretty(&LexiConfig::default()).unwrap();
    let path = fixture.create_file("generated.toml", toml).unwrap();

    let config = ConfigLoader::new(Some(&path), "LEXITEST_GEN").load().unwrap();
    assert_eq!(config, LexiConfig::default());
}
