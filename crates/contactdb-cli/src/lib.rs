//! contactdb-cli
//! =============
//!
//! Command-line front end for the `contactdb-core` contact directory.
//!
//! The binary (`contactdb`) owns one [`ContactStore`](contactdb_core::ContactStore)
//! for the lifetime of the process and translates requests into calls on it.
//! The request layer lives in [`session`] so it can be driven from tests or
//! any other line-oriented transport.
//!
//! Basic usage:
//!
//! ```text
//! contactdb --input contacts.json list
//! contactdb --input contacts.json search ali
//! contactdb repl
//! > add Alice | 111-2222 | a@x.com
//! > search 111
//! > delete a@x.com
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod session;
