use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "watchlist")]
#[command(author, version, about = "Resolve and cache a TMDB-backed watchlist")]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Resolve the configured watchlist, using the session cache when fresh
    Resolve {
        /// Bypass the cached snapshot and query TMDB for every entry
        #[arg(long)]
        no_cache: bool,

        /// Output records as JSON
        #[arg(long)]
        json: bool,
    },

    /// Clear the cached watchlist snapshot
    Invalidate,

    /// Check that the TMDB credential is present
    Check,

    /// Validate configuration file
    Validate {
        /// Config file to validate (uses default if not specified)
        config: Option<PathBuf>,
    },

    /// Display version information
    Version,
}
