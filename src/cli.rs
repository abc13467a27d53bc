//! Command-line interface parsing for the sonaveeb CLI
//!
//! This module handles parsing of CLI arguments using clap and turns them into
//! the `RunOptions` used by the lookup pipeline.

use clap::Parser;
use thiserror::Error;

use crate::pipeline::RunOptions;

/// Error types for CLI argument parsing
#[derive(Debug, Error)]
pub enum CliError {
    /// Homonyms are numbered from 1
    #[error("Invalid homonym index: {0}. Homonyms are numbered from 1")]
    InvalidHomonym(usize),
}

/// Query Estonian word forms from the Ekilex API
#[derive(Parser, Debug)]
#[command(name = "sonaveeb")]
#[command(about = "Query Estonian word forms from the Ekilex API")]
#[command(version)]
#[command(after_help = "Environment:\n  \
    EKILEX_API_KEY    API key (or first line of ~/.config/sonaveeb/config)\n  \
    XDG_CACHE_HOME    Cache root (default: per-user cache directory)\n\n\
Examples:\n  \
    sonaveeb puu\n  \
    sonaveeb --all tegema\n  \
    sonaveeb --homonym 2 tee\n  \
    sonaveeb --json puu")]
pub struct Cli {
    /// Word to look up
    #[arg(required_unless_present = "clear_cache")]
    pub word: Option<String>,

    /// Output the raw paradigm JSON
    #[arg(long)]
    pub json: bool,

    /// Show all forms instead of the most common ones
    #[arg(long)]
    pub all: bool,

    /// Minimal tab-separated output
    #[arg(short, long)]
    pub quiet: bool,

    /// Which homonym to show, starting from 1
    #[arg(long, value_name = "N", default_value_t = 1)]
    pub homonym: usize,

    /// Fetch fresh data and update the cache
    #[arg(long)]
    pub refresh: bool,

    /// Remove all cached responses
    #[arg(long)]
    pub clear_cache: bool,

    /// Do not read or write the cache
    #[arg(long)]
    pub no_cache: bool,

    /// Log cache and request activity to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl RunOptions {
    /// Creates RunOptions from parsed CLI arguments.
    ///
    /// # Arguments
    /// * `cli` - The parsed CLI struct
    ///
    /// # Returns
    /// * `Ok(RunOptions)` with the lookup settings
    /// * `Err(CliError)` if the homonym index is zero
    pub fn from_cli(cli: &Cli) -> Result<Self, CliError> {
        if cli.homonym == 0 {
            return Err(CliError::InvalidHomonym(cli.homonym));
        }

        Ok(RunOptions {
            homonym: cli.homonym,
            show_all: cli.all,
            quiet: cli.quiet,
            json: cli.json,
            refresh: cli.refresh,
        })
    }
}
