// crates/contactdb-core/src/index/ordered.rs
//! Phone-ordered index: an AVL tree over shared records.
//!
//! Records are ordered by phone number (plain string comparison). Among equal
//! phone numbers the most recently inserted record comes first, which is the
//! order an unbalanced "ties go left" BST would enumerate them in. Every node
//! carries an insertion sequence number so that the composite key
//! `(phone, newest first)` is unique and rotations never blur which record a
//! deletion targets.

use crate::record::{Record, RecordRef};
use std::cmp::{Ordering, Reverse};
use std::sync::Arc;

type Link = Option<Box<Node>>;
type Key<'a> = (&'a str, Reverse<u64>);

#[derive(Debug)]
struct Node {
    record: RecordRef,
    seq: u64,
    height: i32,
    left: Link,
    right: Link,
}

impl Node {
    fn leaf(record: RecordRef, seq: u64) -> Box<Self> {
        Box::new(Self {
            record,
            seq,
            height: 1,
            left: None,
            right: None,
        })
    }

    #[inline]
    fn key(&self) -> Key<'_> {
        (self.record.phone.as_str(), Reverse(self.seq))
    }

    #[inline]
    fn update(&mut self) {
        self.height = 1 + height(&self.left).max(height(&self.right));
    }

    #[inline]
    fn balance(&self) -> i32 {
        height(&self.left) - height(&self.right)
    }
}

#[inline]
fn height(link: &Link) -> i32 {
    link.as_ref().map_or(0, |n| n.height)
}

/// Balanced binary search tree keyed on phone number.
#[derive(Debug, Default)]
pub struct OrderedIndex {
    root: Link,
    len: usize,
    next_seq: u64,
}

impl OrderedIndex {
    /// Insert a record. Equal phone numbers are allowed; the newest one is
    /// enumerated first.
    pub fn insert(&mut self, record: RecordRef) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.root = Some(insert_at(self.root.take(), Node::leaf(record, seq)));
        self.len += 1;
    }

    /// Remove this exact record (by identity, located via its phone key).
    ///
    /// Returns the removed handle, or `None` if the record is not stored.
    pub fn delete(&mut self, record: &RecordRef) -> Option<RecordRef> {
        let seq = find_seq(&self.root, record)?;
        let mut removed = None;
        self.root = delete_at(
            self.root.take(),
            (record.phone.as_str(), Reverse(seq)),
            &mut removed,
        );
        if removed.is_some() {
            self.len -= 1;
        }
        removed
    }

    /// Full in-order scan collecting every record for which `predicate`
    /// holds, in ascending phone order.
    ///
    /// The tree is ordered by phone only, so predicates on other fields are
    /// enumerated, not accelerated.
    pub fn search<F>(&self, mut predicate: F) -> Vec<RecordRef>
    where
        F: FnMut(&Record) -> bool,
    {
        self.iter().filter(|r| predicate(r)).cloned().collect()
    }

    /// Lazy in-order traversal. Each call starts a fresh pass.
    pub fn iter(&self) -> Iter<'_> {
        let mut it = Iter {
            stack: Vec::with_capacity(self.height() as usize),
            remaining: self.len,
        };
        it.push_left(self.root.as_deref());
        it
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }


    /// Height of the tree (0 when empty).
    #[inline]
    pub fn height(&self) -> u32 {
        height(&self.root) as u32
    }
}

/// In-order iterator over an [`OrderedIndex`].
pub struct Iter<'a> {
    stack: Vec<&'a Node>,
    remaining: usize,
}

impl<'a> Iter<'a> {
    fn push_left(&mut self, mut link: Option<&'a Node>) {
        while let Some(node) = link {
            self.stack.push(node);
            link = node.left.as_deref();
        }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a RecordRef;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left(node.right.as_deref());
        self.remaining -= 1;
        Some(&node.record)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}

// -----------------------------------------------------------------------
// TREE SURGERY
// -----------------------------------------------------------------------

fn rotate_right(mut node: Box<Node>) -> Box<Node> {
    let Some(mut pivot) = node.left.take() else {
        return node;
    };
    node.left = pivot.right.take();
    node.update();
    pivot.right = Some(node);
    pivot.update();
    pivot
}

fn rotate_left(mut node: Box<Node>) -> Box<Node> {
    let Some(mut pivot) = node.right.take() else {
        return node;
    };
    node.right = pivot.left.take();
    node.update();
    pivot.left = Some(node);
    pivot.update();
    pivot
}

fn rebalance(mut node: Box<Node>) -> Box<Node> {
    node.update();
    let bf = node.balance();
    if bf > 1 {
        if node.left.as_ref().is_some_and(|l| l.balance() < 0) {
            node.left = node.left.take().map(rotate_left);
        }
        rotate_right(node)
    } else if bf < -1 {
        if node.right.as_ref().is_some_and(|r| r.balance() > 0) {
            node.right = node.right.take().map(rotate_right);
        }
        rotate_left(node)
    } else {
        node
    }
}

fn insert_at(link: Link, new: Box<Node>) -> Box<Node> {
    let Some(mut node) = link else {
        return new;
    };
    if new.key() <= node.key() {
        node.left = Some(insert_at(node.left.take(), new));
    } else {
        node.right = Some(insert_at(node.right.take(), new));
    }
    rebalance(node)
}

/// Locate `record` by identity. Equal phone numbers may sit on either side
/// of each other after rotations, so both subtrees are tried on a tie.
fn find_seq(link: &Link, record: &RecordRef) -> Option<u64> {
    let node = link.as_ref()?;
    match record.phone.as_str().cmp(node.record.phone.as_str()) {
        Ordering::Less => find_seq(&node.left, record),
        Ordering::Greater => find_seq(&node.right, record),
        Ordering::Equal if Arc::ptr_eq(&node.record, record) => Some(node.seq),
        Ordering::Equal => {
            find_seq(&node.left, record).or_else(|| find_seq(&node.right, record))
        }
    }
}

/// Detach the minimum node of a subtree. Returns the rebalanced remainder
/// and the detached node.
fn take_min(mut node: Box<Node>) -> (Link, Box<Node>) {
    match node.left.take() {
        None => {
            let rest = node.right.take();
            (rest, node)
        }
        Some(left) => {
            let (rest, min) = take_min(left);
            node.left = rest;
            (Some(rebalance(node)), min)
        }
    }
}

fn delete_at(link: Link, key: Key<'_>, removed: &mut Option<RecordRef>) -> Link {
    let mut node = link?;
    let ord = key.cmp(&node.key());
    match ord {
        Ordering::Less => node.left = delete_at(node.left.take(), key, removed),
        Ordering::Greater => node.right = delete_at(node.right.take(), key, removed),
        Ordering::Equal => match (node.left.take(), node.right.take()) {
            (None, child) | (child, None) => {
                let Node { record, .. } = *node;
                *removed = Some(record);
                return child;
            }
            (Some(left), Some(right)) => {
                // Two children: take over the in-order successor's payload.
                let (rest, successor) = take_min(right);
                let Node { record, seq, .. } = *successor;
                *removed = Some(std::mem::replace(&mut node.record, record));
                node.seq = seq;
                node.left = Some(left);
                node.right = rest;
            }
        },
    }
    Some(rebalance(node))
}
