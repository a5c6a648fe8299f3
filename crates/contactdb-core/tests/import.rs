use contactdb_core::prelude::*;
use std::io::Write;

const SEED: &str = r#"[
    { "name": "Alice", "phone": "111-2222", "email": "a@x.com" },
    { "name": "Bob",   "phone": "111-3333", "email": "b@x.com" },
    { "name": "Carol", "phone": "222-0000", "email": "c@x.com" }
]"#;

#[test]
fn imports_plain_json() {
    let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    file.write_all(SEED.as_bytes()).unwrap();

    let mut store = ContactStore::default();
    assert_eq!(store.import_path(file.path()).unwrap(), 3);
    assert_eq!(store.search_by_phone_prefix("111"), ["Alice", "Bob"]);
}

#[cfg(feature = "compact")]
#[test]
fn imports_gzip_json() {
    use flate2::write::GzEncoder;
    use flate2::Compression;

    let file = tempfile::Builder::new().suffix(".json.gz").tempfile().unwrap();
    let mut enc = GzEncoder::new(file.reopen().unwrap(), Compression::default());
    enc.write_all(SEED.as_bytes()).unwrap();
    enc.finish().unwrap();

    let mut store = ContactStore::default();
    assert_eq!(store.import_path(file.path()).unwrap(), 3);
    assert_eq!(store.len(), 3);
}

#[cfg(not(feature = "compact"))]
#[test]
fn gzip_needs_compact_feature() {
    let file = tempfile::Builder::new().suffix(".json.gz").tempfile().unwrap();
    let mut store = ContactStore::default();
    let err = store.import_path(file.path()).unwrap_err();
    assert!(matches!(err, ContactError::Config(_)));
}

#[test]
fn missing_file_is_not_found() {
    let mut store = ContactStore::default();
    let err = store.import_path("/definitely/not/here.json").unwrap_err();
    assert!(matches!(err, ContactError::NotFound(_)));
}

#[test]
fn malformed_json_is_a_json_error() {
    let mut store = ContactStore::default();
    let err = store.import_reader(r#"[{ "name": "x" }]"#.as_bytes()).unwrap_err();
    assert!(matches!(err, ContactError::Json(_)));
    assert!(store.is_empty());
}

#[test]
fn reject_policy_stops_at_first_duplicate() {
    let seed = r#"[
        { "name": "A", "phone": "1", "email": "same@x.com" },
        { "name": "B", "phone": "2", "email": "other@x.com" },
        { "name": "C", "phone": "3", "email": "SAME@x.com" },
        { "name": "D", "phone": "4", "email": "d@x.com" }
    ]"#;
    let mut store = ContactStore::new(StoreConfig {
        duplicate_policy: DuplicatePolicy::Reject,
        ..StoreConfig::default()
    });
    let err = store.import_reader(seed.as_bytes()).unwrap_err();
    assert!(matches!(err, ContactError::DuplicateEmail(_)));
    assert_eq!(store.search_by_phone_prefix(""), ["A", "B"]);
}
