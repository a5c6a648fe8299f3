// crates/contactdb-core/src/error.rs
//! Error types for contactdb-core.
//!
//! Index lookups never fail: a missing prefix, phone or email simply yields an
//! empty result. Errors only arise from the store's duplicate policy and from
//! the I/O edges (config files, seed imports).

use thiserror::Error;

/// Top-level error type for contact directory operations.
#[derive(Debug, Error)]
pub enum ContactError {
    /// An email (case-folded) is already registered and the store is
    /// configured to reject duplicates.
    #[error("duplicate email: {0}")]
    DuplicateEmail(String),

    /// A seed or config file could not be located.
    #[error("not found: {0}")]
    NotFound(String),

    /// Invalid configuration.
    #[error("configuration error: {0}")]
    Config(String),

    /// I/O error wrapper.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for contact directory operations.
pub type Result<T> = std::result::Result<T, ContactError>;
