// model = "claude-opus-4-5"
// created = "2026-10-14"
// modified = "2026-10-16"
// driver = "Isaac Clayton"

//! Node arena shared by every chain algorithm in the crate.
//!
//! Nodes are stored in a `Vec` and addressed by `Idx`. A successor link is
//! just another `Idx`, with `NULL` marking the end of a linear chain. Because
//! links are plain integers, relinking is O(1) and the arena, not the nodes,
//! owns the storage: a chain handle is nothing more than the index of its
//! first node.
//!
//! ```text
//! linear:   head -> A -> B -> C -> NULL
//! circular: entry -> A -> B -> C -> (entry)
//! ```
//!
//! Released slots go onto a free list and are handed out again by `alloc`.
//! Accessing a released slot is a caller bug and panics, the same way an
//! out-of-bounds slice index does.

/// Node index type. u32 saves space vs usize on 64-bit.
pub type Idx = u32;

/// Null index marker: the successor of the last node of a linear chain,
/// and the handle of an empty chain.
pub const NULL: Idx = Idx::MAX;

/// A single node: one payload and one successor link.
struct Node<T> {
    /// `None` once the slot has been released.
    item: Option<T>,
    next: Idx,
}

/// Storage for the nodes of any number of chains.
pub struct Arena<T> {
    nodes: Vec<Node<T>>,
    /// Released slots, reused before the arena grows.
    free_list: Vec<Idx>,
    /// Number of live (allocated, not yet released) nodes.
    live: usize,
}

impl<T> Arena<T> {
    pub fn new() -> Arena<T> {
        return Arena {
            nodes: Vec::new(),
            free_list: Vec::new(),
            live: 0,
        };
    }

    /// Create an arena with room for `capacity` nodes before reallocating.
    pub fn with_capacity(capacity: usize) -> Arena<T> {
        return Arena {
            nodes: Vec::with_capacity(capacity),
            free_list: Vec::new(),
            live: 0,
        };
    }

    /// Number of live nodes across all chains in this arena.
    pub fn live(&self) -> usize {
        return self.live;
    }

    /// True if `idx` names a node that has been allocated and not released.
    pub fn is_live(&self, idx: Idx) -> bool {
        return self
            .nodes
            .get(idx as usize)
            .is_some_and(|node| node.item.is_some());
    }

    // --- Node access helpers ---

    fn node(&self, idx: Idx) -> &Node<T> {
        let node = &self.nodes[idx as usize];
        assert!(node.item.is_some(), "node {} has been released", idx);
        return node;
    }

    fn node_mut(&mut self, idx: Idx) -> &mut Node<T> {
        let node = &mut self.nodes[idx as usize];
        assert!(node.item.is_some(), "node {} has been released", idx);
        return node;
    }

    /// Allocate an unlinked node holding `item`.
    pub fn alloc(&mut self, item: T) -> Idx {
        if let Some(idx) = self.free_list.pop() {
            let node = &mut self.nodes[idx as usize];
            node.item = Some(item);
            node.next = NULL;
            self.live += 1;
            return idx;
        }
        let idx = self.nodes.len() as Idx;
        assert!(idx != NULL, "arena is full");
        self.nodes.push(Node { item: Some(item), next: NULL });
        self.live += 1;
        return idx;
    }

    /// Release a node, returning its payload. The caller must already have
    /// unlinked it from whatever chain it belonged to.
    pub fn release(&mut self, idx: Idx) -> T {
        let node = &mut self.nodes[idx as usize];
        let item = node.item.take();
        node.next = NULL;
        match item {
            Some(item) => {
                self.live -= 1;
                self.free_list.push(idx);
                return item;
            }
            None => panic!("node {} released twice", idx),
        }
    }

    pub fn item(&self, idx: Idx) -> &T {
        match &self.nodes[idx as usize].item {
            Some(item) => return item,
            None => panic!("node {} has been released", idx),
        }
    }

    pub fn item_mut(&mut self, idx: Idx) -> &mut T {
        match &mut self.nodes[idx as usize].item {
            Some(item) => return item,
            None => panic!("node {} has been released", idx),
        }
    }

    /// Successor of `idx`, or `NULL` at the end of a linear chain.
    pub fn next(&self, idx: Idx) -> Idx {
        return self.node(idx).next;
    }

    pub fn set_next(&mut self, idx: Idx, next: Idx) {
        self.node_mut(idx).next = next;
    }

    /// Successor link without the liveness check, for validators that must
    /// not panic on a released slot.
    pub(crate) fn raw_next(&self, idx: Idx) -> Option<Idx> {
        let node = self.nodes.get(idx as usize)?;
        node.item.as_ref()?;
        return Some(node.next);
    }

    // --- Chain construction ---

    /// Build a linear chain from `items`, returning its head (`NULL` if empty).
    pub fn link<I: IntoIterator<Item = T>>(&mut self, items: I) -> Idx {
        let mut head = NULL;
        let mut tail = NULL;
        for item in items {
            let idx = self.alloc(item);
            if tail == NULL {
                head = idx;
            } else {
                self.set_next(tail, idx);
            }
            tail = idx;
        }
        return head;
    }

    /// Build a circular chain from `items`, returning its entry node
    /// (`NULL` if empty). The last node links back to the entry.
    pub fn link_ring<I: IntoIterator<Item = T>>(&mut self, items: I) -> Idx {
        let entry = self.link(items);
        if entry != NULL {
            let last = self.last(entry);
            self.set_next(last, entry);
        }
        return entry;
    }

    /// Last node of a non-empty linear chain.
    pub fn last(&self, head: Idx) -> Idx {
        let mut idx = head;
        while self.next(idx) != NULL {
            idx = self.next(idx);
        }
        return idx;
    }

    /// Release every node of a linear chain, returning the payloads in order.
    pub fn release_chain(&mut self, head: Idx) -> Vec<T> {
        let mut items = Vec::new();
        let mut idx = head;
        while idx != NULL {
            let next = self.next(idx);
            items.push(self.release(idx));
            idx = next;
        }
        return items;
    }

    /// Release every node of a circular chain, returning the payloads in
    /// order starting from `entry`.
    pub fn release_ring(&mut self, entry: Idx) -> Vec<T> {
        if entry == NULL {
            return Vec::new();
        }
        // Open the ring first so it can be released as a linear chain.
        let mut last = entry;
        while self.next(last) != entry {
            last = self.next(last);
        }
        self.set_next(last, NULL);
        return self.release_chain(entry);
    }

    // --- Traversal ---

    /// Iterate the payloads of a linear chain.
    pub fn iter(&self, head: Idx) -> ChainIter<'_, T> {
        return ChainIter { arena: self, idx: head };
    }

    /// Iterate the payloads of a circular chain once around, from `entry`.
    pub fn ring_iter(&self, entry: Idx) -> RingIter<'_, T> {
        return RingIter { arena: self, entry, idx: entry };
    }

    /// Number of nodes in a linear chain.
    pub fn count(&self, head: Idx) -> usize {
        return self.iter(head).count();
    }

    /// Number of nodes in a circular chain.
    pub fn ring_count(&self, entry: Idx) -> usize {
        return self.ring_iter(entry).count();
    }
}

impl<T: Clone> Arena<T> {
    /// Payloads of a linear chain, in order.
    pub fn values(&self, head: Idx) -> Vec<T> {
        return self.iter(head).cloned().collect();
    }

    /// Payloads of a circular chain once around, from `entry`.
    pub fn ring_values(&self, entry: Idx) -> Vec<T> {
        return self.ring_iter(entry).cloned().collect();
    }
}

impl<T> Default for Arena<T> {
    fn default() -> Self {
        return Self::new();
    }
}

/// Iterator over a linear chain, ending at `NULL`.
pub struct ChainIter<'a, T> {
    arena: &'a Arena<T>,
    idx: Idx,
}

impl<'a, T> Iterator for ChainIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.idx == NULL {
            return None;
        }
        let idx = self.idx;
        self.idx = self.arena.next(idx);
        return Some(self.arena.item(idx));
    }
}

/// Iterator over a circular chain, ending when it wraps back to the entry.
pub struct RingIter<'a, T> {
    arena: &'a Arena<T>,
    entry: Idx,
    idx: Idx,
}

impl<'a, T> Iterator for RingIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.idx == NULL {
            return None;
        }
        let idx = self.idx;
        let next = self.arena.next(idx);
        self.idx = if next == self.entry { NULL } else { next };
        return Some(self.arena.item(idx));
    }
}
