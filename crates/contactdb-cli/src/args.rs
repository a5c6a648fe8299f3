use clap::{Parser, Subcommand};

/// CLI arguments for contactdb
#[derive(Debug, Parser)]
#[command(
    name = "contactdb",
    version,
    about = "In-memory contact directory indexed by name, phone and email"
)]
pub struct CliArgs {
    /// Seed file to import before running the command (JSON array, or .json.gz)
    #[arg(short = 'i', long = "input", global = true)]
    pub input: Option<String>,

    /// Store configuration file (JSON)
    #[arg(short = 'c', long = "config", global = true)]
    pub config: Option<String>,

    /// Log store activity at debug level (RUST_LOG takes precedence)
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show a summary of the store contents
    Stats,

    /// List all contacts in phone order
    List,

    /// Search names, phones and emails by prefix
    Search {
        /// Prefix to search (case-insensitive for names and emails)
        term: String,
    },

    /// Read requests line by line from stdin (add/search/delete/list/stats)
    Repl,
}
