// crates/contactdb-core/src/store.rs
//! The contact store: one owner for the three indexes.
//!
//! Every mutation and query goes through [`ContactStore`], which fans out to
//! the indexes and keeps them coherent:
//!
//! - the name `PrefixIndex` holds one counted entry per stored record,
//! - the email `PrefixIndex` holds every stored folded email,
//! - the `OrderedIndex` holds every stored record once,
//! - the `DirectIndex` maps every folded email to its single record.
//!
//! A store is a plain owned value. Callers that share it across threads must
//! serialize access themselves.

use crate::common::{SearchResults, StoreStats};
use crate::config::{DuplicatePolicy, EmailGate, StoreConfig};
use crate::error::{ContactError, Result};
use crate::index::{DirectIndex, Iter, OrderedIndex, PrefixIndex};
use crate::record::{Record, RecordRef};
use crate::text::{fold_key, starts_with_folded};
use std::sync::Arc;
use tracing::{debug, warn};

#[derive(Debug, Default)]
pub struct ContactStore {
    config: StoreConfig,
    names: PrefixIndex,
    emails: PrefixIndex,
    by_phone: OrderedIndex,
    by_email: DirectIndex,
}

impl ContactStore {
    pub fn new(config: StoreConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    #[inline]
    fn fold(&self, s: &str) -> String {
        fold_key(s, self.config.fold_accents)
    }

    // -----------------------------------------------------------------------
    // MUTATION
    // -----------------------------------------------------------------------

    /// Add a contact. See [`ContactStore::insert`].
    pub fn add(
        &mut self,
        name: impl Into<String>,
        phone: impl Into<String>,
        email: impl Into<String>,
    ) -> Result<RecordRef> {
        self.insert(Record::new(name, phone, email))
    }

    /// Register `record` in all three indexes.
    ///
    /// Any text is accepted. If the folded email is already stored, the
    /// configured [`DuplicatePolicy`] decides: `Supersede` removes the old
    /// record everywhere first, `Reject` returns
    /// [`ContactError::DuplicateEmail`] and changes nothing.
    pub fn insert(&mut self, record: Record) -> Result<RecordRef> {
        let email_key = self.fold(&record.email);

        if self.by_email.contains(&email_key) {
            match self.config.duplicate_policy {
                DuplicatePolicy::Reject => {
                    warn!(email = %record.email, "rejecting duplicate email");
                    return Err(ContactError::DuplicateEmail(record.email));
                }
                DuplicatePolicy::Supersede => {
                    debug!(email = %record.email, "superseding existing contact");
                    self.delete(&email_key);
                }
            }
        }

        let name_key = self.fold(&record.name);
        let record = Arc::new(record);
        self.names.insert(&name_key);
        self.emails.insert(&email_key);
        self.by_phone.insert(Arc::clone(&record));
        self.by_email.set(email_key, Arc::clone(&record));
        debug_assert_eq!(self.by_phone.len(), self.by_email.len());

        debug!(name = %record.name, phone = %record.phone, "added contact");
        Ok(record)
    }

    /// Remove the contact registered under `email` (case-insensitive) from
    /// every index. Returns the removed record; `None` (and no change) when
    /// the email is unknown.
    pub fn delete(&mut self, email: &str) -> Option<RecordRef> {
        let email_key = self.fold(email);
        let record = self.by_email.delete(&email_key)?;

        let name_key = self.fold(&record.name);
        self.names.remove(&name_key);
        self.emails.remove(&email_key);
        self.by_phone.delete(&record);
        debug_assert_eq!(self.by_phone.len(), self.by_email.len());

        debug!(name = %record.name, email = %record.email, "deleted contact");
        Some(record)
    }

    // -----------------------------------------------------------------------
    // QUERIES
    // -----------------------------------------------------------------------

    /// Records whose name starts with `prefix` (case-insensitive), in
    /// ascending phone order. Empty without a scan when no stored name has
    /// the prefix.
    pub fn find_by_name_prefix(&self, prefix: &str) -> Vec<RecordRef> {
        let q = self.fold(prefix);
        if !self.names.has_prefix(&q) {
            return Vec::new();
        }
        self.by_phone
            .search(|r| starts_with_folded(&r.name, &q, self.config.fold_accents))
    }

    /// Records whose phone starts with `prefix` (exact, case-sensitive), in
    /// ascending phone order.
    pub fn find_by_phone_prefix(&self, prefix: &str) -> Vec<RecordRef> {
        self.by_phone.search(|r| r.phone.starts_with(prefix))
    }

    /// Records whose email starts with `prefix` (case-insensitive), in
    /// ascending phone order. The prefix index consulted first is chosen by
    /// [`EmailGate`].
    pub fn find_by_email_prefix(&self, prefix: &str) -> Vec<RecordRef> {
        let q = self.fold(prefix);
        let gate = match self.config.email_gate {
            EmailGate::Emails => &self.emails,
            EmailGate::Names => &self.names,
        };
        if !gate.has_prefix(&q) {
            return Vec::new();
        }
        self.by_phone
            .search(|r| starts_with_folded(&r.email, &q, self.config.fold_accents))
    }

    pub fn search_by_name_prefix(&self, prefix: &str) -> Vec<String> {
        to_names(self.find_by_name_prefix(prefix))
    }

    pub fn search_by_phone_prefix(&self, prefix: &str) -> Vec<String> {
        to_names(self.find_by_phone_prefix(prefix))
    }

    pub fn search_by_email_prefix(&self, prefix: &str) -> Vec<String> {
        to_names(self.find_by_email_prefix(prefix))
    }

    /// Run one term against all three fields.
    pub fn search(&self, term: &str) -> SearchResults {
        SearchResults {
            by_name: self.search_by_name_prefix(term),
            by_phone: self.search_by_phone_prefix(term),
            by_email: self.search_by_email_prefix(term),
        }
    }

    /// Look up a contact by email (case-insensitive).
    pub fn get(&self, email: &str) -> Option<&RecordRef> {
        self.by_email.get(&self.fold(email))
    }

    /// Every stored record in ascending phone order.
    pub fn list_all(&self) -> Vec<RecordRef> {
        self.iter().cloned().collect()
    }

    /// Lazy in-order walk over the stored records.
    pub fn iter(&self) -> Iter<'_> {
        self.by_phone.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.by_email.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.by_email.is_empty()
    }

    pub fn stats(&self) -> StoreStats {
        StoreStats {
            records: self.len(),
            names: self.names.len(),
            height: self.by_phone.height(),
        }
    }
}

fn to_names(records: Vec<RecordRef>) -> Vec<String> {
    records.into_iter().map(|r| r.name.clone()).collect()
}
