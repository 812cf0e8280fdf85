// model = "claude-opus-4-5"
// created = "2026-10-14"
// modified = "2026-10-16"
// driver = "Isaac Clayton"

//! A singly linked chain kept in ascending key order.
//!
//! Every adjacent pair `A -> B` satisfies `key(A) < key(B)`: the order is
//! strict because equal keys are rejected on insert rather than merged.
//! Insert, remove and lookup are linear scans with O(1) extra space; the
//! only allocation is the node created by a successful insert.
//!
//! This is the roster behind a reservation session. The caller normalizes
//! names before handing them over and renders the outcomes; the chain itself
//! never formats or prints.
//!
//! ```
//! use relink::ordered::{Insertion, OrderedChain, Removal};
//!
//! let mut roster = OrderedChain::new();
//! assert_eq!(roster.insert("Mallory".to_string()), Insertion::Inserted);
//! assert_eq!(roster.insert("Alice".to_string()), Insertion::Inserted);
//! assert_eq!(roster.insert("Alice".to_string()), Insertion::Duplicate);
//! assert!(roster.contains("Alice"));
//! assert_eq!(roster.remove("Bob"), Removal::NotFound);
//! assert_eq!(roster.enumerate().collect::<Vec<_>>(), ["Alice", "Mallory"]);
//! ```

use std::borrow::Borrow;
use std::fmt;

use tracing::trace;

use crate::arena::{Arena, ChainIter, Idx, NULL};

/// Outcome of [`OrderedChain::insert`].
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Insertion {
    /// The key was spliced in at its sorted position.
    Inserted,
    /// An equal key is already present; the chain is unchanged.
    Duplicate,
}

/// Outcome of [`OrderedChain::remove`].
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Removal {
    /// The key was unlinked and its node released.
    Removed,
    /// No node holds the key; the chain is unchanged.
    NotFound,
}

/// A sorted, duplicate-free singly linked chain.
pub struct OrderedChain<K> {
    arena: Arena<K>,
    head: Idx,
    len: usize,
}

impl<K: Ord> OrderedChain<K> {
    pub fn new() -> OrderedChain<K> {
        return OrderedChain {
            arena: Arena::new(),
            head: NULL,
            len: 0,
        };
    }

    /// Number of keys in the chain.
    pub fn len(&self) -> usize {
        return self.len;
    }

    pub fn is_empty(&self) -> bool {
        return self.head == NULL;
    }

    /// The smallest key, if any.
    pub fn first(&self) -> Option<&K> {
        if self.head == NULL {
            return None;
        }
        return Some(self.arena.item(self.head));
    }

    // --- Invariant checking ---

    #[cfg(debug_assertions)]
    fn check_invariants(&self) {
        let mut count = 0usize;
        let mut prev: Option<&K> = None;
        for key in self.arena.iter(self.head) {
            if let Some(prev) = prev {
                assert!(prev < key, "INVARIANT VIOLATED: keys out of order at position {}", count);
            }
            prev = Some(key);
            count += 1;
        }
        assert_eq!(
            count, self.len,
            "INVARIANT VIOLATED: chain holds {} nodes != len()={}",
            count, self.len
        );
        assert_eq!(
            self.arena.live(), self.len,
            "INVARIANT VIOLATED: arena holds {} live nodes != len()={}",
            self.arena.live(), self.len
        );
    }

    #[cfg(not(debug_assertions))]
    #[inline(always)]
    fn check_invariants(&self) {}

    // --- Core operations ---

    /// Insert `key` at its sorted position, rejecting duplicates.
    pub fn insert(&mut self, key: K) -> Insertion {
        // New head: empty chain or key sorts before everything.
        if self.head == NULL || key < *self.arena.item(self.head) {
            let idx = self.arena.alloc(key);
            self.arena.set_next(idx, self.head);
            self.head = idx;
            self.len += 1;
            trace!(position = 0, len = self.len, "inserted key");
            self.check_invariants();
            return Insertion::Inserted;
        }

        if self.find(&key).is_some() {
            trace!(len = self.len, "rejected duplicate key");
            return Insertion::Duplicate;
        }

        // Advance while the successor still sorts before the new key.
        let mut cursor = self.head;
        let mut position = 1usize;
        loop {
            let next = self.arena.next(cursor);
            if next == NULL || *self.arena.item(next) >= key {
                break;
            }
            cursor = next;
            position += 1;
        }

        let idx = self.arena.alloc(key);
        let next = self.arena.next(cursor);
        self.arena.set_next(idx, next);
        self.arena.set_next(cursor, idx);
        self.len += 1;
        trace!(position, len = self.len, "inserted key");
        self.check_invariants();
        return Insertion::Inserted;
    }

    /// Unlink and release the node holding `key`.
    pub fn remove<Q>(&mut self, key: &Q) -> Removal
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        if self.head == NULL {
            return Removal::NotFound;
        }

        if self.holds(self.head, key) {
            let old = self.head;
            self.head = self.arena.next(old);
            self.arena.release(old);
            self.len -= 1;
            trace!(position = 0, len = self.len, "removed key");
            self.check_invariants();
            return Removal::Removed;
        }

        // `trail` stays one node behind the candidate.
        let mut trail = self.head;
        let mut position = 1usize;
        loop {
            let next = self.arena.next(trail);
            if next == NULL {
                trace!(len = self.len, "key not found for removal");
                return Removal::NotFound;
            }
            if self.holds(next, key) {
                break;
            }
            trail = next;
            position += 1;
        }

        let target = self.arena.next(trail);
        let after = self.arena.next(target);
        self.arena.set_next(trail, after);
        self.arena.release(target);
        self.len -= 1;
        trace!(position, len = self.len, "removed key");
        self.check_invariants();
        return Removal::Removed;
    }

    /// True if a node holds `key`.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        return self.find(key).is_some();
    }

    /// Zero-based position of `key` in ascending order.
    pub fn position<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        return self.enumerate().position(|k| Borrow::<Q>::borrow(k) == key);
    }

    /// Keys in ascending order. Each call starts again from the head.
    pub fn enumerate(&self) -> Keys<'_, K> {
        return Keys { inner: self.arena.iter(self.head) };
    }

    /// Remove every key.
    pub fn clear(&mut self) {
        self.arena.release_chain(self.head);
        self.head = NULL;
        self.len = 0;
        self.check_invariants();
    }

    fn holds<Q>(&self, idx: Idx, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let stored: &Q = self.arena.item(idx).borrow();
        return stored == key;
    }

    /// Linear scan for an exact match.
    fn find<Q>(&self, key: &Q) -> Option<Idx>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut idx = self.head;
        while idx != NULL {
            if self.holds(idx, key) {
                return Some(idx);
            }
            idx = self.arena.next(idx);
        }
        return None;
    }
}

impl<K: Ord> Default for OrderedChain<K> {
    fn default() -> Self {
        return Self::new();
    }
}

impl<K: Ord> Extend<K> for OrderedChain<K> {
    /// Insert every key; duplicates are skipped.
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            let _ = self.insert(key);
        }
    }
}

impl<K: Ord> FromIterator<K> for OrderedChain<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut chain = OrderedChain::new();
        chain.extend(iter);
        return chain;
    }
}

impl<K: Ord + fmt::Debug> fmt::Debug for OrderedChain<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return f.debug_list().entries(self.enumerate()).finish();
    }
}

/// Ascending iterator over the keys of an [`OrderedChain`].
pub struct Keys<'a, K> {
    inner: ChainIter<'a, K>,
}

impl<'a, K> Iterator for Keys<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        return self.inner.next();
    }
}
