// crates/contactdb-core/src/text.rs
//! Key folding for the case-insensitive indexes.

/// Fold a string into the key form used by the name and email indexes.
///
/// Lowercasing is done per character, so the fold of a prefix is always a
/// prefix of the fold of the word (no context rules such as Greek final
/// sigma). With `fold_accents` the string is first transliterated to ASCII
/// using `deunicode`, so `Łukasz` and `lukasz` share a key.
///
/// # Examples
///
/// ```rust
/// use contactdb_core::text::fold_key;
///
/// assert_eq!(fold_key("Alice", false), "alice");
/// assert_eq!(fold_key("Łukasz", true), "lukasz");
/// assert_eq!(fold_key("Łukasz", false), "łukasz");
/// ```
pub fn fold_key(s: &str, fold_accents: bool) -> String {
    if fold_accents {
        lower_chars(&deunicode::deunicode(s))
    } else {
        lower_chars(s)
    }
}

#[inline]
fn lower_chars(s: &str) -> String {
    s.chars().flat_map(char::to_lowercase).collect()
}

/// Returns `true` if `value` starts with `prefix` once both are folded.
#[inline]
pub fn starts_with_folded(value: &str, folded_prefix: &str, fold_accents: bool) -> bool {
    fold_key(value, fold_accents).starts_with(folded_prefix)
}
