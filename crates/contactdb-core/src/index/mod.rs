// crates/contactdb-core/src/index/mod.rs
//! The three indexes behind a [`ContactStore`](crate::ContactStore).
//!
//! - [`PrefixIndex`]: character trie over folded names (and emails),
//!   answering prefix existence.
//! - [`OrderedIndex`]: balanced tree of records ordered by phone number.
//! - [`DirectIndex`]: hash map from folded email to record.
//!
//! None of them is exposed on its own; the store keeps them coherent. Only
//! the in-order [`Iter`] leaves the crate, through
//! [`ContactStore::iter`](crate::ContactStore::iter).
//!
//! ```compile_fail
//! use contactdb_core::index::PrefixIndex;
//! ```

mod direct;
mod ordered;
mod prefix;

pub(crate) use direct::DirectIndex;
pub use ordered::Iter;
pub(crate) use ordered::OrderedIndex;
pub(crate) use prefix::PrefixIndex;
