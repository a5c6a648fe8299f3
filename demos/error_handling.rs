//! Error handling example for contactdb-rs
//!
//! Lookups never fail: unknown prefixes and emails give empty answers.
//! Errors come from the duplicate policy and from file I/O.

use contactdb_rs::prelude::*;

fn main() -> Result<()> {
    println!("=== contactdb-rs Error Handling Example ===\n");

    // Example 1: Rejecting duplicate emails
    println!("--- Example 1: Duplicate email with the Reject policy ---");
    let mut strict = ContactStore::new(StoreConfig {
        duplicate_policy: DuplicatePolicy::Reject,
        ..StoreConfig::default()
    });
    strict.add("Dana", "333-1000", "dana@example.com")?;
    match strict.add("Dana Two", "333-2000", "DANA@example.com") {
        Ok(r) => println!("  Added: {r}"),
        Err(e) => println!("  Refused: {e}"),
    }
    println!();

    // Example 2: Superseding duplicate emails (the default)
    println!("--- Example 2: Duplicate email with the Supersede policy ---");
    let mut store = ContactStore::default();
    store.add("Dana", "333-1000", "dana@example.com")?;
    store.add("Dana Two", "333-2000", "DANA@example.com")?;
    println!("  Contacts: {:?}", store.search_by_phone_prefix("333"));
    println!();

    // Example 3: Silent misses
    println!("--- Example 3: Missing data ---");
    println!("  delete unknown -> {:?}", store.delete("ghost@example.com"));
    println!("  name 'zz'      -> {:?}", store.search_by_name_prefix("zz"));
    println!();

    // Example 4: Missing seed file
    println!("--- Example 4: Importing a missing seed file ---");
    match store.import_path("does-not-exist.json") {
        Ok(n) => println!("  Imported {n}"),
        Err(e) => println!("  ✗ {e}"),
    }

    Ok(())
}
