// crates/contactdb-core/src/index/direct.rs
use crate::record::RecordRef;
use std::collections::HashMap;

/// Email → record map. Keys are expected to be folded by the caller.
#[derive(Debug, Default)]
pub struct DirectIndex {
    map: HashMap<String, RecordRef>,
}

impl DirectIndex {
    /// Unconditional overwrite. Returns the record previously stored under
    /// `email`, if any.
    pub fn set(&mut self, email: String, record: RecordRef) -> Option<RecordRef> {
        self.map.insert(email, record)
    }

    pub fn get(&self, email: &str) -> Option<&RecordRef> {
        self.map.get(email)
    }

    pub fn contains(&self, email: &str) -> bool {
        self.map.contains_key(email)
    }

    /// Remove the mapping; `None` if it was absent.
    pub fn delete(&mut self, email: &str) -> Option<RecordRef> {
        self.map.remove(email)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}
