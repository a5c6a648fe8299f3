// crates/contactdb-core/src/config.rs
//! Store configuration.

use crate::error::{ContactError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// What [`ContactStore::add`](crate::ContactStore::add) does when the
/// case-folded email is already registered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicatePolicy {
    /// Remove the old record from every index, then insert the new one.
    #[default]
    Supersede,
    /// Leave the store untouched and return [`ContactError::DuplicateEmail`].
    Reject,
}

/// Which prefix index gates an email-prefix search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmailGate {
    /// Gate on the email prefix index: gate and filter on the same field.
    #[default]
    Emails,
    /// Gate on the name prefix index, then filter on email.
    ///
    /// An email query only returns results when some stored *name* also
    /// starts with the query.
    Names,
}

/// Configuration for a [`ContactStore`](crate::ContactStore).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    pub duplicate_policy: DuplicatePolicy,
    pub email_gate: EmailGate,
    /// Transliterate names and emails to ASCII before case folding.
    pub fold_accents: bool,
}

impl StoreConfig {
    /// Load a config from a JSON file. Missing fields take their defaults.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let s = std::fs::read_to_string(path).map_err(|e| {
            ContactError::NotFound(format!("Config not found at {}: {}", path.display(), e))
        })?;
        Self::from_json(&s)
    }

    /// Parse a config from a JSON string.
    pub fn from_json(s: &str) -> Result<Self> {
        serde_json::from_str(s).map_err(|e| ContactError::Config(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let cfg = StoreConfig::from_json(r#"{ "duplicate_policy": "reject" }"#).unwrap();
        assert_eq!(cfg.duplicate_policy, DuplicatePolicy::Reject);
        assert_eq!(cfg.email_gate, EmailGate::Emails);
        assert!(!cfg.fold_accents);
    }

    #[test]
    fn loads_from_file() {
        use std::io::Write;

        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, r#"{{"email_gate":"names","fold_accents":true}}"#).unwrap();

        let cfg = StoreConfig::from_path(file.path()).unwrap();
        assert_eq!(cfg.email_gate, EmailGate::Names);
        assert!(cfg.fold_accents);
        assert_eq!(cfg.duplicate_policy, DuplicatePolicy::Supersede);
    }

    #[test]
    fn missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = StoreConfig::from_path(dir.path().join("store.json")).unwrap_err();
        assert!(matches!(err, ContactError::NotFound(_)));
    }

    #[test]
    fn unknown_variant_is_a_config_error() {
        let err = StoreConfig::from_json(r#"{ "email_gate": "phones" }"#).unwrap_err();
        assert!(matches!(err, ContactError::Config(_)));
    }
}
