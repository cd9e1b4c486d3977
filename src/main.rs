//! Prefix Dictionary - Main entrypoint.
//!
//! Loads configuration, initializes logging and then runs either the
//! interactive session or a one-shot prediction.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use prefix_dict_lib::config::{self, ConfigLoader, DictConfig};
use prefix_dict_lib::data_structures::PrefixIndex;
use prefix_dict_lib::loader::BulkLoader;
use prefix_dict_lib::logging::init_logging;
use prefix_dict_lib::repl::Session;
use tracing::info;

/// Command line arguments for the prefix dictionary.
#[derive(Parser, Debug)]
#[clap(name = "prefix_dict", version, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Command to execute
    #[clap(subcommand)]
    command: Option<Command>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Start an interactive session (default)
    Repl {
        /// Word lists to load before the first prompt
        #[clap(short, long, value_parser)]
        dict: Vec<PathBuf>,
    },

    /// Print ranked completions for a prefix and exit
    Predict {
        /// Prefix to complete
        prefix: String,

        /// Maximum number of completions
        #[clap(short = 'n', long)]
        limit: Option<usize>,

        /// Word lists to load
        #[clap(short, long, value_parser)]
        dict: Vec<PathBuf>,

        /// Print completions as JSON
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

/// Loads every word list into a fresh index.
fn preload(config: &DictConfig, dicts: &[PathBuf]) -> anyhow::Result<PrefixIndex> {
    if dicts.is_empty() {
        return Ok(PrefixIndex::new());
    }

    let (index, report) = BulkLoader::new(config.loader.clone())
        .load_all(dicts)
        .context("failed to load word lists")?;
    info!(
        lists = dicts.len(),
        records = report.records,
        words = index.len(),
        "word lists loaded"
    );
    Ok(index)
}

/// Writes the default configuration as TOML to `output`.
fn write_default_config(output: &Path) -> anyhow::Result<()> {
    let toml = toml::to_string_pretty(&DictConfig::default())
        .context("failed to serialize default configuration")?;

    // Create parent directories if they don't exist
    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    std::fs::write(output, toml)
        .with_context(|| format!("failed to write {}", output.display()))?;

    println!("Default configuration written to {}", output.display());
    Ok(())
}

/// Loads and validates configuration, then initializes logging from it.
fn load_config(loader: &ConfigLoader) -> anyhow::Result<DictConfig> {
    let config = loader.load().context("failed to load configuration")?;
    init_logging(&config.log)?;
    Ok(config)
}

/// Main entry point for the application.
fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let config_loader = ConfigLoader::new(args.config.as_deref(), config::ENV_PREFIX);

    match args.command.unwrap_or(Command::Repl { dict: Vec::new() }) {
        Command::GenConfig { output } => write_default_config(&output)?,
        Command::Validate => {
            load_config(&config_loader)?;
            info!("Configuration validated successfully");
            println!("Configuration is valid");
        }
        Command::Repl { dict } => {
            let config = load_config(&config_loader)?;
            let index = preload(&config, &dict)?;
            let mut session = Session::with_index(index, &config);

            let stdout = io::stdout();
            session.run(io::stdin().lock(), &mut stdout.lock())?;
        }
        Command::Predict {
            prefix,
            limit,
            dict,
            json,
        } => {
            let config = load_config(&config_loader)?;
            let index = preload(&config, &dict)?;
            let prefix = if config.repl.lowercase_input {
                prefix.to_ascii_lowercase()
            } else {
                prefix
            };
            let results = index.predict(&prefix, limit.unwrap_or(config.repl.default_limit));

            let stdout = io::stdout();
            let mut out = stdout.lock();
            if json {
                serde_json::to_writer_pretty(&mut out, &results)?;
                writeln!(out)?;
            } else if results.is_empty() {
                writeln!(out, "No completions.")?;
            } else {
                for (rank, prediction) in results.iter().enumerate() {
                    writeln!(
                        out,
                        "{}. {} (freq={})",
                        rank + 1,
                        prediction.word,
                        prediction.frequency
                    )?;
                }
            }
        }
    }

    Ok(())
}
