//! # Fastsearch CLI
//!
//! Command-line interface for the Fastsearch local file indexer.
//!
//! ## Commands
//!
//! - `fastsearch index <path>` - Build the index for a directory and save it
//! - `fastsearch search <query>` - Search indexed files by name
//! - `fastsearch ext <extension>` - Search by file extension
//! - `fastsearch content <query>` - Search file contents (text files only)
//! - `fastsearch status` - Show index status and statistics
//! - `fastsearch interactive` - Start the interactive prompt
//!
//! ## Example Usage
//!
//! ```bash
//! # Build the index for your projects directory
//! fastsearch index ~/projects
//!
//! # Find files by name
//! fastsearch search readme
//!
//! # Find all Python files
//! fastsearch ext py
//!
//! # Find files containing a phrase
//! fastsearch content "import os"
//! ```

mod app;
mod commands;
mod output;

use clap::{Parser, Subcommand};
use commands::search::SearchMode;
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Fastsearch - local file indexing and search
#[derive(Parser)]
#[command(name = "fastsearch")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the file index for a directory and save it
    Index {
        /// Root directory to index
        path: PathBuf,
    },

    /// Search indexed files by name (case-insensitive substring)
    Search {
        /// Text the filename must contain
        query: String,

        /// Maximum number of results to show (defaults to config)
        #[arg(short, long)]
        limit: Option<usize>,

        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        output: OutputFormat,
    },

    /// Search indexed files by extension (exact, dot optional)
    Ext {
        /// Extension to look up, with or without the leading dot
        extension: String,

        /// Maximum number of results to show (defaults to config)
        #[arg(short, long)]
        limit: Option<usize>,

        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        output: OutputFormat,
    },

    /// Search file contents (text files only, may take a while)
    Content {
        /// Text a line of the file must contain
        query: String,

        /// Maximum number of results to show (defaults to config)
        #[arg(short, long)]
        limit: Option<usize>,

        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        output: OutputFormat,
    },

    /// Show index status and statistics
    Status,

    /// Start the interactive prompt
    #[command(alias = "i")]
    Interactive,
}

#[derive(Clone, Debug, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown output format: {}", s)),
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.quiet {
        "error"
    } else {
        match cli.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level)))
        .init();

    // Load configuration
    let config = match &cli.config {
        Some(path) => fastsearch_core::Config::load_from(path)?,
        None => fastsearch_core::Config::load()?,
    };

    // Execute command
    match cli.command {
        Commands::Index { path } => commands::index::run(config, &path),
        Commands::Search {
            query,
            limit,
            output,
        } => commands::search::run(config, SearchMode::Name, &query, limit, output),
        Commands::Ext {
            extension,
            limit,
            output,
        } => commands::search::run(config, SearchMode::Extension, &extension, limit, output),
        Commands::Content {
            query,
            limit,
            output,
        } => commands::search::run(config, SearchMode::Content, &query, limit, output),
        Commands::Status => commands::status::run(config),
        Commands::Interactive => commands::interactive::run(config),
    }
}
