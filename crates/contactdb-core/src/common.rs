// crates/contactdb-core/src/common.rs
use serde::{Deserialize, Serialize};

/// Simple aggregate statistics for a store.
///
/// Returned by [`ContactStore::stats`](crate::ContactStore::stats).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreStats {
    /// Records currently stored (one per distinct folded email).
    pub records: usize,
    /// Distinct folded names in the name prefix index.
    pub names: usize,
    /// Height of the phone-ordered tree.
    pub height: u32,
}

/// The three answers to one search term, each a list of names in ascending
/// phone order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResults {
    pub by_name: Vec<String>,
    pub by_phone: Vec<String>,
    pub by_email: Vec<String>,
}

impl SearchResults {
    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty() && self.by_phone.is_empty() && self.by_email.is_empty()
    }
}
