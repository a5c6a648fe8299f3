// crates/contactdb-core/src/lib.rs

//! contactdb-core
//! ==============
//!
//! In-memory contact directory. Each contact ([`Record`]) is indexed three
//! ways at once:
//!
//! - by name prefix (a counted character trie),
//! - by phone number (a balanced ordered tree, which is also the listing
//!   order),
//! - by email (a hash map, the unique key).
//!
//! All access goes through [`ContactStore`].
//!
//! ```rust
//! use contactdb_core::prelude::*;
//!
//! let mut store = ContactStore::default();
//! store.add("Alice", "111-2222", "a@x.com")?;
//! store.add("Bob", "111-3333", "b@x.com")?;
//!
//! assert_eq!(store.search_by_phone_prefix("111-2"), ["Alice"]);
//! store.delete("a@x.com");
//! assert_eq!(store.list_all().len(), 1);
//! # Ok::<(), ContactError>(())
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod common;
pub mod config;
pub mod error;
mod index;
pub mod loader;
pub mod record;
pub mod store;
pub mod text;

// Re-exports
pub use crate::common::{SearchResults, StoreStats};
pub use crate::config::{DuplicatePolicy, EmailGate, StoreConfig};
pub use crate::error::{ContactError, Result};
pub use crate::index::Iter;
pub use crate::record::{Record, RecordRef};
pub use crate::store::ContactStore;

/// Bring the common types into scope for demos and front ends.
pub mod prelude {
    pub use crate::common::{SearchResults, StoreStats};
    pub use crate::config::{DuplicatePolicy, EmailGate, StoreConfig};
    pub use crate::error::{ContactError, Result};
    pub use crate::record::{Record, RecordRef};
    pub use crate::store::ContactStore;
    pub use crate::text::fold_key;
}
