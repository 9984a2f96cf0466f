//! Lexitrie - command-line entrypoint.
//!
//! A thin harness around the library: loads configuration and word lists,
//! then answers search, prefix and autocomplete queries.

use clap::{Parser, Subcommand};
use lexitrie::config::{ConfigLoader, LexiConfig, LogConfig, ENV_PREFIX};
use lexitrie::error::{LexiError, LexiResult};
use lexitrie::trie::Trie;
use lexitrie::word_list::WordListLoader;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Words inserted by the `demo` command.
const DEMO_WORDS: [&str; 4] = ["hello", "world", "trie", "tree"];

/// Command line arguments for Lexitrie.
#[derive(Parser, Debug)]
#[clap(name = "lexitrie", version, author, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Word list files to load before running the command (one word per line)
    #[clap(short, long = "words", value_parser)]
    words: Vec<PathBuf>,

    /// Command to execute
    #[clap(subcommand)]
    command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Run the insert/search/delete/autocomplete walkthrough
    Demo,

    /// Report whether each word is stored
    Search {
        /// Words to look up
        #[clap(required = true)]
        words: Vec<String>,
    },

    /// Report whether any stored word starts with a prefix
    Prefix {
        /// Prefix to test
        prefix: String,
    },

    /// List stored words starting with a prefix
    Complete {
        /// Prefix to complete (empty lists every word)
        #[clap(default_value = "")]
        prefix: String,

        /// Print the suggestions as a JSON array
        #[clap(long)]
        json: bool,
    },

    /// Validate the configuration file
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },
}

/// Initialize the logging system. `RUST_LOG` takes precedence over the configured level.
fn init_logging(log: &LogConfig) -> LexiResult<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_file(log.source_location)
        .with_line_number(log.source_location);

    let result = if log.json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.finish())
    };

    result.map_err(|e| LexiError::Custom(format!("Failed to set global tracing subscriber: {e}")))
}

/// Builds a trie from the configured settings and every word list given on the command line.
fn build_trie(config: &LexiConfig, word_lists: &[PathBuf]) -> LexiResult<Trie> {
    let mut trie = Trie::with_config(config.trie.clone());
    let loader = WordListLoader::new(config.word_list.clone());

    for path in word_lists {
        let report = loader.load_file(path, &mut trie)?;
        info!(
            path = %path.display(),
            inserted = report.inserted,
            duplicates = report.duplicates,
            skipped = report.skipped,
            "Loaded word list"
        );
    }

    Ok(trie)
}

fn run_demo(config: &LexiConfig) -> LexiResult<()> {
    let mut trie = Trie::with_config(config.trie.clone());

    for word in DEMO_WORDS {
        trie.insert(word)?;
    }

    for word in DEMO_WORDS {
        println!("Searching for '{word}': {}", trie.search(word)?);
    }

    trie.delete("hello")?;
    println!(
        "Searching for 'hello' after deletion: {}",
        trie.search("hello")?
    );

    println!("Words with prefix 'tr':");
    for word in &trie.autocomplete("tr")? {
        println!("{word}");
    }

    println!("Starts with 'wor': {}", trie.starts_with("wor")?);
    println!("Starts with 'xyz': {}", trie.starts_with("xyz")?);
    Ok(())
}

/// Main entry point for the application.
fn main() -> LexiResult<()> {
    let args = Args::parse();

    let config_loader = ConfigLoader::new(args.config.as_deref(), ENV_PREFIX);
    let config = config_loader.load()?;

    init_logging(&config.log)?;

    match args.command {
        Command::Demo => run_demo(&config),
        Command::Search { words } => {
            let trie = build_trie(&config, &args.words)?;
            for word in words {
                println!("{word}: {}", trie.search(&word)?);
            }
            Ok(())
        }
        Command::Prefix { prefix } => {
            let trie = build_trie(&config, &args.words)?;
            println!("{}", trie.starts_with(&prefix)?);
            Ok(())
        }
        Command::Complete { prefix, json } => {
            let trie = build_trie(&config, &args.words)?;
            let suggestions = trie.autocomplete(&prefix)?;
            if json {
                println!("{}", serde_json::to_string(&suggestions)?);
            } else {
                for word in &suggestions {
                    println!("{word}");
                }
            }
            Ok(())
        }
        Command::Validate => {
            info!("Configuration validated successfully");
            println!("configuration is valid");
            Ok(())
        }
        Command::GenConfig { output } => {
            info!("Generating default configuration");
            let default_config = LexiConfig::default();

            if let Some(parent) = output.parent() {
                std::fs::create_dir_all(parent)?;
            }

            let toml = toml::to_string_pretty(&default_config)
                .map_err(|e| LexiError::Custom(format!("Failed to serialize config: {e}")))?;

            std::fs::write(&output, toml)?;

            info!("Default configuration written to {:?}", output);
            Ok(())
        }
    }
}
