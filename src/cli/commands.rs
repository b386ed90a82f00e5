//! CLI commands and argument parsing

use crate::resource::ResourceKind;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Browse the Star Wars API from the command line
#[derive(Parser, Debug)]
#[command(name = "starwars-api")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Client configuration file (YAML)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// API root, overrides the config file
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Output format
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Stream every record of a kind, page by page
    List {
        /// Resource kind
        kind: ResourceKind,

        /// Stop after this many records
        #[arg(long)]
        max_records: Option<usize>,
    },

    /// Fetch one record by id
    Get {
        /// Resource kind
        kind: ResourceKind,

        /// Record identifier
        id: u32,
    },

    /// Count every record of a kind (fetches all pages)
    Count {
        /// Resource kind
        kind: ResourceKind,
    },

    /// List supported resource kinds
    Kinds,
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output (one record per line)
    Json,
    /// Human-readable output
    Pretty,
}
