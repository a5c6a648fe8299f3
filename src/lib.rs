//! contactdb-rs: facade over [`contactdb_core`] for the workspace demos.
//!
//! Run `cargo run --example basic_usage` for a tour.

pub use contactdb_core::*;
