//! Main CLI parser and top-level argument handling.

use std::path::PathBuf;

use clap::Parser;

use crate::commands::Commands;

/// Command-line interface for the snippet sharing service.
#[derive(Parser)]
#[command(name = "snipbox")]
#[command(about = "Share, browse and serve code snippets")]
#[command(version)]
pub struct Cli {
    /// `SQLite` database file
    #[arg(
        long = "database",
        env = "SNIPBOX_DATABASE",
        default_value = "snipbox.db",
        global = true
    )]
    pub database: PathBuf,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
