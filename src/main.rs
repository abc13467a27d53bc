//! Sonaveeb CLI - Estonian word forms from the Ekilex API
//!
//! Prints the most common (or all) inflected forms of a word, with English
//! translations, from the Ekilex dictionary API.

use std::io;
use std::process::ExitCode;

use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use sonaveeb::cli::Cli;
use sonaveeb::config::resolve_api_key;
use sonaveeb::error::{LookupError, EXIT_USAGE};
use sonaveeb::pipeline::{self, RunOptions};
use sonaveeb::source::EkilexClient;

/// Sets up logging to stderr, honouring `RUST_LOG` when set
fn init_logging(verbose: bool) {
    let default_filter = if verbose { "sonaveeb=debug,warn" } else { "warn" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

/// Runs the requested commands and returns what to print on stdout
async fn execute(cli: &Cli, options: &RunOptions) -> Result<String, LookupError> {
    let mut output = String::new();

    if cli.clear_cache {
        pipeline::clear_cache()?;
        info!("Cache cleared");
        if cli.word.is_none() {
            output.push_str("Cache cleared\n");
        }
    }

    let Some(word) = cli.word.as_deref() else {
        return Ok(output);
    };

    let api_key = resolve_api_key()?;
    let cache = if cli.no_cache {
        None
    } else {
        pipeline::open_default_cache()
    };

    let client = EkilexClient::new(api_key);
    output.push_str(&pipeline::lookup(word, options, client, cache).await?);
    Ok(output)
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let options = match RunOptions::from_cli(&cli) {
        Ok(options) => options,
        Err(e) => {
            eprintln!("error: {}", e);
            return ExitCode::from(EXIT_USAGE as u8);
        }
    };

    match execute(&cli, &options).await {
        Ok(output) => {
            print!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::from(e.exit_code() as u8)
        }
    }
}
