//! Basic usage example for contactdb-rs
//!
//! This example demonstrates how to:
//! - Build a store and add contacts
//! - Search by name, phone and email prefix
//! - Delete a contact and list what remains

use contactdb_rs::prelude::*;

fn main() -> Result<()> {
    println!("=== contactdb-rs Basic Usage Example ===\n");

    let mut store = ContactStore::default();
    store.add("Alice", "111-2222", "alice@example.com")?;
    store.add("Bob", "111-3333", "bob@example.com")?;
    store.add("Alfred", "222-0000", "alfred@work.example")?;
    store.add("Carol", "000-9999", "carol@example.com")?;

    // Example 1: Listing
    println!("--- Example 1: All contacts (phone order) ---");
    for (i, r) in store.list_all().iter().enumerate() {
        println!("{}. {r}", i + 1);
    }
    println!();

    // Example 2: Prefix searches
    println!("--- Example 2: Prefix searches ---");
    println!("name 'al':   {:?}", store.search_by_name_prefix("al"));
    println!("phone '111': {:?}", store.search_by_phone_prefix("111"));
    println!("email 'ALF': {:?}", store.search_by_email_prefix("ALF"));
    println!();

    // Example 3: One term, three fields
    println!("--- Example 3: Combined search ---");
    let hits = store.search("a");
    println!("by name:  {:?}", hits.by_name);
    println!("by phone: {:?}", hits.by_phone);
    println!("by email: {:?}", hits.by_email);
    println!();

    // Example 4: Delete
    println!("--- Example 4: Delete by email ---");
    if let Some(removed) = store.delete("ALICE@example.com") {
        println!("Removed: {removed}");
    }
    println!("name 'al' now: {:?}", store.search_by_name_prefix("al"));

    let stats = store.stats();
    println!(
        "\n{} contacts, {} distinct names, tree height {}",
        stats.records, stats.names, stats.height
    );

    Ok(())
}
