// model = "claude-opus-4-5"
// created = "2026-10-14"
// modified = "2026-10-15"
// driver = "Isaac Clayton"

//! Left rotation of a linear chain by relinking three seams.
//!
//! ```text
//! before (k = 2): 10 -> 20 -> 30 -> 40 -> 50 -> NULL
//!                       ^pivot
//! after:          30 -> 40 -> 50 -> 10 -> 20 -> NULL
//! ```
//!
//! The k-th node becomes the new tail, its successor the new head, and the
//! old tail links back to the old head. A `k` larger than the chain leaves
//! it unchanged rather than wrapping around modulo the length.

use tracing::{debug, trace};

use crate::arena::{Arena, Idx, NULL};

/// Rotate the chain at `head` left by `k` nodes and return the new head.
///
/// `k == 0`, `k == len` and `k > len` all leave the chain as it was.
pub fn rotate_left<T>(arena: &mut Arena<T>, head: Idx, k: usize) -> Idx {
    if head == NULL || k == 0 {
        return head;
    }

    // Walk to the k-th node (1-indexed).
    let mut pivot = head;
    for _ in 1..k {
        pivot = arena.next(pivot);
        if pivot == NULL {
            debug!(k, "rotation past the end of the chain, leaving it unchanged");
            return head;
        }
    }

    let new_head = arena.next(pivot);
    if new_head == NULL {
        // k equals the length: a full turn.
        trace!(k, "full rotation");
        return head;
    }

    let mut tail = new_head;
    while arena.next(tail) != NULL {
        tail = arena.next(tail);
    }
    arena.set_next(tail, head);
    arena.set_next(pivot, NULL);
    trace!(k, "rotated chain");
    return new_head;
}
