//! Line-oriented request handling over one owned [`ContactStore`].
//!
//! Each line is one request:
//!
//! ```text
//! add <name> | <phone> | <email>
//! search <term>
//! delete <email>
//! list
//! stats
//! help
//! quit
//! ```
//!
//! Blank lines and lines starting with `#` are skipped. A malformed line
//! yields a usage message and the session carries on.

use contactdb_core::{ContactError, ContactStore, RecordRef, SearchResults, StoreStats};
use std::fmt;
use std::io::{self, BufRead, Write};
use thiserror::Error;
use tracing::debug;

pub const USAGE: &str = "\
commands:
  add <name> | <phone> | <email>
  search <term>
  delete <email>
  list
  stats
  help
  quit";

/// A line that could not be turned into a [`Request`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum UsageError {
    #[error("unknown command: {0}")]
    UnknownCommand(String),
    #[error("usage: add <name> | <phone> | <email>")]
    Add,
    #[error("usage: delete <email>")]
    Delete,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    Add {
        name: String,
        phone: String,
        email: String,
    },
    Search {
        term: String,
    },
    Delete {
        email: String,
    },
    List,
    Stats,
    Help,
    Quit,
}

impl Request {
    /// Parse one input line. `Ok(None)` for blank and comment lines.
    pub fn parse(line: &str) -> Result<Option<Self>, UsageError> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }

        let (cmd, rest) = match line.split_once(char::is_whitespace) {
            Some((cmd, rest)) => (cmd, rest.trim()),
            None => (line, ""),
        };

        let req = match cmd.to_ascii_lowercase().as_str() {
            "add" => {
                let fields: Vec<&str> = rest.split('|').map(str::trim).collect();
                match fields.as_slice() {
                    [name, phone, email] => Request::Add {
                        name: name.to_string(),
                        phone: phone.to_string(),
                        email: email.to_string(),
                    },
                    _ => return Err(UsageError::Add),
                }
            }
            "search" => Request::Search {
                term: rest.to_string(),
            },
            "delete" => {
                if rest.is_empty() {
                    return Err(UsageError::Delete);
                }
                Request::Delete {
                    email: rest.to_string(),
                }
            }
            "list" => Request::List,
            "stats" => Request::Stats,
            "help" => Request::Help,
            "quit" | "exit" => Request::Quit,
            other => return Err(UsageError::UnknownCommand(other.to_string())),
        };
        Ok(Some(req))
    }
}

#[derive(Debug)]
pub enum Response {
    Added(RecordRef),
    Rejected(ContactError),
    Found(SearchResults),
    Deleted(RecordRef),
    NotFound(String),
    Listing(Vec<RecordRef>),
    Stats(StoreStats),
    Help,
    Bye,
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Response::Added(r) => write!(f, "added: {r}"),
            Response::Rejected(e) => write!(f, "rejected: {e}"),
            Response::Found(hits) => write!(
                f,
                "by name: {}\nby phone: {}\nby email: {}",
                joined(&hits.by_name),
                joined(&hits.by_phone),
                joined(&hits.by_email)
            ),
            Response::Deleted(r) => write!(f, "deleted: {r}"),
            Response::NotFound(email) => write!(f, "no contact with email {email}"),
            Response::Listing(records) if records.is_empty() => write!(f, "no contacts"),
            Response::Listing(records) => {
                let mut first = true;
                for r in records {
                    if !first {
                        writeln!(f)?;
                    }
                    first = false;
                    write!(f, "{r}")?;
                }
                Ok(())
            }
            Response::Stats(s) => write!(
                f,
                "records: {}\ndistinct names: {}\ntree height: {}",
                s.records, s.names, s.height
            ),
            Response::Help => write!(f, "{USAGE}"),
            Response::Bye => write!(f, "bye"),
        }
    }
}

fn joined(names: &[String]) -> String {
    if names.is_empty() {
        "-".to_string()
    } else {
        names.join(", ")
    }
}

/// A front-end session. The store is handed in and handed back; there is no
/// process-wide instance.
#[derive(Debug, Default)]
pub struct Session {
    store: ContactStore,
}

impl Session {
    pub fn new(store: ContactStore) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &ContactStore {
        &self.store
    }

    pub fn into_store(self) -> ContactStore {
        self.store
    }

    pub fn execute(&mut self, req: Request) -> Response {
        match req {
            Request::Add { name, phone, email } => match self.store.add(name, phone, email) {
                Ok(r) => Response::Added(r),
                Err(e) => Response::Rejected(e),
            },
            Request::Search { term } => Response::Found(self.store.search(&term)),
            Request::Delete { email } => match self.store.delete(&email) {
                Some(r) => Response::Deleted(r),
                None => Response::NotFound(email),
            },
            Request::List => Response::Listing(self.store.list_all()),
            Request::Stats => Response::Stats(self.store.stats()),
            Request::Help => Response::Help,
            Request::Quit => Response::Bye,
        }
    }

    /// Serve requests from `input` until EOF or `quit`, writing one
    /// response per request to `output`.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W, prompt: bool) -> io::Result<()> {
        if prompt {
            write!(output, "> ")?;
            output.flush()?;
        }
        for line in input.lines() {
            let line = line?;
            match Request::parse(&line) {
                Ok(Some(req)) => {
                    let resp = self.execute(req);
                    writeln!(output, "{resp}")?;
                    if matches!(resp, Response::Bye) {
                        return Ok(());
                    }
                }
                Ok(None) => {}
                Err(e) => {
                    debug!(line = %line, error = %e, "unparsable request");
                    writeln!(output, "{e}")?;
                }
            }
            if prompt {
                write!(output, "> ")?;
                output.flush()?;
            }
        }
        Ok(())
    }
}
