// crates/contactdb-core/src/loader.rs

//! # Seed Import
//!
//! One-shot import of contacts from a JSON array of records:
//!
//! ```json
//! [{ "name": "Alice", "phone": "111-2222", "email": "a@x.com" }]
//! ```
//!
//! Handles the physical layer (file, optional gzip) and hands the records to
//! [`ContactStore::insert`], so the store's duplicate policy applies. Nothing
//! is ever written back.

use crate::error::{ContactError, Result};
use crate::record::Record;
use crate::store::ContactStore;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::info;

impl ContactStore {
    /// Import a `.json` (or, with the `compact` feature, `.json.gz`) file.
    /// Returns the number of records added.
    pub fn import_path(&mut self, path: impl AsRef<Path>) -> Result<usize> {
        let path = path.as_ref();
        let reader = open_stream(path)?;
        let count = self.import_reader(reader)?;
        info!(path = %path.display(), count, "imported contacts");
        Ok(count)
    }

    /// Import records from any JSON reader.
    ///
    /// Stops at the first record the duplicate policy rejects; records added
    /// before it stay in the store.
    pub fn import_reader<R: Read>(&mut self, reader: R) -> Result<usize> {
        let records: Vec<Record> = serde_json::from_reader(reader)?;
        let mut count = 0;
        for record in records {
            self.insert(record)?;
            count += 1;
        }
        Ok(count)
    }
}

/// Opens a file, buffers it, and wraps it in a Gzip decoder when the name
/// ends in `.gz`.
fn open_stream(path: &Path) -> Result<Box<dyn Read>> {
    let file = File::open(path).map_err(|e| {
        ContactError::NotFound(format!("Seed file not found at {}: {}", path.display(), e))
    })?;

    let reader = BufReader::new(file);
    let gzipped = path.extension().is_some_and(|ext| ext == "gz");

    if !gzipped {
        return Ok(Box::new(reader));
    }

    #[cfg(feature = "compact")]
    {
        use flate2::read::GzDecoder;
        Ok(Box::new(GzDecoder::new(reader)))
    }

    #[cfg(not(feature = "compact"))]
    {
        Err(ContactError::Config(format!(
            "{} is gzip-compressed but the 'compact' feature is disabled",
            path.display()
        )))
    }
}
