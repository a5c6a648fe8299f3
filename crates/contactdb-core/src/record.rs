// crates/contactdb-core/src/record.rs
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// One contact: the unit of storage across all indexes.
///
/// The phone number is the ordering key of the ordered index and is compared
/// as a plain string. The email is the unique key of the direct index and is
/// compared case-insensitively by the store.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Record {
    pub name: String,
    pub phone: String,
    pub email: String,
}

/// Shared handle to a stored record.
///
/// All three indexes hold the same allocation; nothing is copied on insert.
pub type RecordRef = Arc<Record>;

impl Record {
    pub fn new(name: impl Into<String>, phone: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            email: email.into(),
        }
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}) - {}", self.name, self.phone, self.email)
    }
}
