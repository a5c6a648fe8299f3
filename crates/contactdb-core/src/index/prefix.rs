// crates/contactdb-core/src/index/prefix.rs
//! Character trie answering "does any stored word start with this prefix".
//!
//! Words are stored already folded; the index itself is case-sensitive.

use std::collections::HashMap;

/// One character position in the trie. The root stands for the empty prefix.
#[derive(Debug, Default)]
pub struct PrefixNode {
    children: HashMap<char, PrefixNode>,
    /// Number of live insertions of the word ending here.
    count: usize,
}

impl PrefixNode {
    /// `true` if a stored word ends exactly at this node.
    #[cfg(test)]
    fn is_terminal(&self) -> bool {
        self.count > 0
    }

    #[inline]
    fn is_prunable(&self) -> bool {
        self.count == 0 && self.children.is_empty()
    }
}

/// Reference-counted prefix trie.
///
/// Inserting a word twice answers every query the same as inserting it once;
/// the count only matters for [`PrefixIndex::remove`], which takes back one
/// insertion and prunes branches that no longer lead to a stored word.
#[derive(Debug, Default)]
pub struct PrefixIndex {
    root: PrefixNode,
    words: usize,
}

impl PrefixIndex {
    /// Insert `word`, creating nodes as needed. Returns `true` if the word
    /// was not stored before.
    pub fn insert(&mut self, word: &str) -> bool {
        let mut node = &mut self.root;
        for c in word.chars() {
            node = node.children.entry(c).or_default();
        }
        node.count += 1;
        let fresh = node.count == 1;
        if fresh {
            self.words += 1;
        }
        fresh
    }

    /// Take back one insertion of `word`. Returns `true` if an insertion was
    /// removed, `false` if the word was not stored.
    pub fn remove(&mut self, word: &str) -> bool {
        match remove_in(&mut self.root, word.chars()) {
            Removal::Absent => false,
            Removal::Decremented => true,
            Removal::Emptied => {
                self.words -= 1;
                true
            }
        }
    }

    /// Walk the path for `prefix`. Returns the node reached, or `None` as
    /// soon as a character is missing. The empty prefix reaches the root.
    pub fn search_prefix(&self, prefix: &str) -> Option<&PrefixNode> {
        let mut node = &self.root;
        for c in prefix.chars() {
            node = node.children.get(&c)?;
        }
        Some(node)
    }

    #[inline]
    pub fn has_prefix(&self, prefix: &str) -> bool {
        self.search_prefix(prefix).is_some()
    }

    /// Exact membership.
    #[cfg(test)]
    pub fn contains(&self, word: &str) -> bool {
        self.search_prefix(word).is_some_and(PrefixNode::is_terminal)
    }

    /// Number of distinct stored words.
    #[inline]
    pub fn len(&self) -> usize {
        self.words
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.words == 0
    }
}

enum Removal {
    Absent,
    /// The word is still stored (count went down but not to zero).
    Decremented,
    /// The last insertion of the word was removed.
    Emptied,
}

fn remove_in(node: &mut PrefixNode, mut chars: std::str::Chars<'_>) -> Removal {
    let Some(c) = chars.next() else {
        return match node.count {
            0 => Removal::Absent,
            1 => {
                node.count = 0;
                Removal::Emptied
            }
            _ => {
                node.count -= 1;
                Removal::Decremented
            }
        };
    };

    let Some(child) = node.children.get_mut(&c) else {
        return Removal::Absent;
    };
    let outcome = remove_in(child, chars);
    if child.is_prunable() {
        node.children.remove(&c);
    }
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_walk_and_membership() {
        let mut idx = PrefixIndex::default();
        idx.insert("alice");
        idx.insert("alex");

        assert!(idx.has_prefix("al"));
        assert!(idx.has_prefix("ale"));
        assert!(!idx.has_prefix("bo"));
        assert!(idx.contains("alex"));
        assert!(!idx.contains("ale"));
        assert_eq!(idx.len(), 2);
    }

    #[test]
    fn empty_prefix_reaches_root() {
        let idx = PrefixIndex::default();
        let root = idx.search_prefix("").unwrap();
        assert!(!root.is_terminal());
        assert!(root.children.is_empty());
    }

    #[test]
    fn double_insert_answers_like_single_insert() {
        let mut once = PrefixIndex::default();
        once.insert("bob");
        let mut twice = PrefixIndex::default();
        assert!(twice.insert("bob"));
        assert!(!twice.insert("bob"));

        for q in ["", "b", "bo", "bob", "bobby", "x"] {
            assert_eq!(once.has_prefix(q), twice.has_prefix(q), "prefix {q:?}");
            assert_eq!(once.contains(q), twice.contains(q), "word {q:?}");
        }
        assert_eq!(once.len(), twice.len());
    }

    #[test]
    fn remove_is_counted_and_prunes() {
        let mut idx = PrefixIndex::default();
        idx.insert("bob");
        idx.insert("bob");
        idx.insert("bo");

        assert!(idx.remove("bob"));
        assert!(idx.contains("bob"));
        assert!(idx.remove("bob"));
        assert!(!idx.contains("bob"));
        assert!(!idx.has_prefix("bob"));
        // "bo" is still stored, so its path survives
        assert!(idx.contains("bo"));
        assert_eq!(idx.len(), 1);

        assert!(idx.remove("bo"));
        assert!(!idx.has_prefix("b"));
        assert!(idx.is_empty());
    }

    #[test]
    fn removing_absent_word_is_a_no_op() {
        let mut idx = PrefixIndex::default();
        idx.insert("carol");
        assert!(!idx.remove("car"));
        assert!(!idx.remove("dave"));
        assert!(idx.contains("carol"));
        assert!(idx.has_prefix("car"));
    }
}
