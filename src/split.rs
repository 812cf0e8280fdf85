// model = "claude-opus-4-5"
// created = "2026-10-15"
// modified = "2026-10-16"
// driver = "Isaac Clayton"

//! Splitting a circular chain into two circular halves.
//!
//! ```text
//! before: entry -> 1 -> 2 -> 3 -> 4 -> 5 -> (entry)
//! after:  entry -> 1 -> 2 -> 3 -> (entry)      second -> 4 -> 5 -> (second)
//! ```
//!
//! The first half keeps the entry and gets ⌈n/2⌉ nodes, the second half
//! gets ⌊n/2⌋. The sizes fall out of the bisection stopping rule; nothing
//! counts the nodes.

use tracing::trace;

use crate::arena::{Arena, Idx, NULL};
use crate::bisect::ring_midpoint;
use crate::topology::{check_ring, TopologyError};

/// Entry nodes of the two rings produced by [`split`]. Either may be `NULL`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Halves {
    pub first: Idx,
    pub second: Idx,
}

/// Split the circular chain entered at `entry` into two circular chains.
///
/// An empty chain yields two `NULL` halves and a single node is returned as
/// the first half with no second half.
pub fn split<T>(arena: &mut Arena<T>, entry: Idx) -> Halves {
    if entry == NULL || arena.next(entry) == entry {
        return Halves { first: entry, second: NULL };
    }

    let mid = ring_midpoint(arena, entry);
    let second = arena.next(mid);

    // The second half still ends at the original entry; find its last node
    // before closing the first half.
    let mut last = second;
    while arena.next(last) != entry {
        last = arena.next(last);
    }

    arena.set_next(mid, entry);
    arena.set_next(last, second);
    trace!(first = entry, second, "split circular chain");
    return Halves { first: entry, second };
}

/// Like [`split`], but first checks that `entry` starts a well-formed
/// circular chain.
pub fn try_split<T>(arena: &mut Arena<T>, entry: Idx) -> Result<Halves, TopologyError> {
    check_ring(arena, entry)?;
    return Ok(split(arena, entry));
}
