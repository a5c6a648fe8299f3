//! contactdb — Command-line front end for contactdb-core
//!
//! The store lives only as long as the process. Use `--input` to seed it
//! from a JSON file, then either run a single query or open a `repl` that
//! accepts add/search/delete requests line by line.
//!
//! Usage examples
//! --------------
//!
//! - Show stats of a seeded store
//!   $ contactdb --input contacts.json stats
//!
//! - List contacts in phone order
//!   $ contactdb --input contacts.json list
//!
//! - Search all three fields by prefix
//!   $ contactdb --input contacts.json search 111
//!
//! - Interactive (or piped) session
//!   $ contactdb --config store.json repl
//!   $ contactdb repl < requests.txt
//!
//! Set `RUST_LOG=contactdb_core=debug` (or pass `-v`) to trace index updates.
mod args;

use crate::args::{CliArgs, Commands};
use clap::Parser;
use contactdb_cli::session::{Request, Session};
use contactdb_core::{ContactStore, StoreConfig};
use std::io::{self, IsTerminal};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    let default_level = if args.verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let config = match &args.config {
        Some(path) => StoreConfig::from_path(path)?,
        None => StoreConfig::default(),
    };
    tracing::debug!(?config, "store configuration");

    let mut store = ContactStore::new(config);
    if let Some(input) = &args.input {
        store.import_path(input)?;
    }

    let mut session = Session::new(store);
    let request = match args.command {
        Commands::Stats => Request::Stats,
        Commands::List => Request::List,
        Commands::Search { term } => Request::Search { term },
        Commands::Repl => {
            let stdin = io::stdin();
            let prompt = stdin.is_terminal();
            if prompt {
                println!("contactdb repl, type 'help' for commands");
            }
            session.run(stdin.lock(), io::stdout().lock(), prompt)?;
            return Ok(());
        }
    };

    println!("{}", session.execute(request));

    Ok(())
}
