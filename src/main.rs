//! DramaBox scraper command-line entry point
//!
//! Runs one extraction operation and prints its response envelope as JSON.

use anyhow::Context;
use clap::{Parser, Subcommand};
use dramabox_scraper::api::{dispatch, Route};
use dramabox_scraper::config::{load_config_with_hash, Config};
use dramabox_scraper::DramaboxClient;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// DramaBox scraper: listings, search, details and streams as JSON
#[derive(Parser, Debug)]
#[command(name = "dramabox")]
#[command(version = "1.0.0")]
#[command(about = "Scrape DramaBox listings, details and streams", long_about = None)]
struct Cli {
    /// Path to TOML configuration file (defaults are used when omitted)
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose", global = true)]
    quiet: bool,

    /// Print the envelope on a single line
    #[arg(long, global = true)]
    compact: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Latest updates from the front page
    Latest,

    /// Trending ranking from the front page sidebar
    Trending,

    /// Search titles by keyword
    Search {
        /// Search terms
        query: String,
    },

    /// Details and episode list of a title
    Detail {
        /// Content identifier (the site's bookId)
        book_id: String,
    },

    /// Stream URL of one episode
    Stream {
        /// Content identifier (the site's bookId)
        book_id: String,

        /// Episode number as listed on the watch page
        episode: String,
    },
}

impl From<Command> for Route {
    fn from(command: Command) -> Self {
        match command {
            Command::Latest => Route::Latest,
            Command::Trending => Route::Trending,
            Command::Search { query } => Route::Search { query },
            Command::Detail { book_id } => Route::Detail { book_id },
            Command::Stream { book_id, episode } => Route::Stream { book_id, episode },
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    let config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            let (config, hash) = load_config_with_hash(path)
                .with_context(|| format!("failed to load {}", path.display()))?;
            tracing::info!("Configuration loaded successfully (hash: {})", hash);
            config
        }
        None => Config::default(),
    };

    let client = DramaboxClient::new(&config).context("failed to build HTTP client")?;
    tracing::debug!(
        "Scraping {} (lang={})",
        client.site().base_url,
        client.site().locale
    );

    let route = Route::from(cli.command);
    let envelope = dispatch(&client, &route).await;

    let output = if cli.compact {
        serde_json::to_string(&envelope)?
    } else {
        serde_json::to_string_pretty(&envelope)?
    };
    println!("{}", output);

    Ok(if envelope.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Sets up the logging/tracing subscriber based on verbosity level
///
/// Logs go to stderr so stdout carries only the JSON envelope.
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("dramabox_scraper=info,warn"),
            1 => EnvFilter::new("dramabox_scraper=debug,info"),
            2 => EnvFilter::new("dramabox_scraper=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}
