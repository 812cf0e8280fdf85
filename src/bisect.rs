// model = "claude-opus-4-5"
// created = "2026-10-14"
// modified = "2026-10-15"
// driver = "Isaac Clayton"

//! Slow/fast pointer bisection.
//!
//! `slow` moves one node per step and `fast` moves two. The walk stops as
//! soon as `fast` cannot take two more steps without reaching `end`, which is
//! `NULL` for a linear chain and the entry node for a circular one. The
//! stopping rule is the same in both cases, only the sentinel differs:
//!
//! ```text
//! n = 5: A B C D E    slow stops on C (the middle)
//! n = 4: A B C D      slow stops on B (last node of the first half)
//! ```
//!
//! In both cases `slow` is the last node of a first half of ⌈n/2⌉ nodes.

use crate::arena::{Arena, Idx, NULL};

/// Bisect the chain starting at `start`, treating `end` as the terminator.
/// Returns the last node of the first half. `start` must not be `NULL`.
pub fn bisect<T>(arena: &Arena<T>, start: Idx, end: Idx) -> Idx {
    let mut slow = start;
    let mut fast = start;
    loop {
        let one = arena.next(fast);
        if one == end {
            break;
        }
        let two = arena.next(one);
        if two == end {
            break;
        }
        slow = arena.next(slow);
        fast = two;
    }
    return slow;
}

/// Midpoint of a non-empty linear chain.
pub fn midpoint<T>(arena: &Arena<T>, head: Idx) -> Idx {
    return bisect(arena, head, NULL);
}

/// Midpoint of a non-empty circular chain entered at `entry`.
pub fn ring_midpoint<T>(arena: &Arena<T>, entry: Idx) -> Idx {
    return bisect(arena, entry, entry);
}
