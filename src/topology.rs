// model = "claude-opus-4-5"
// created = "2026-10-15"
// modified = "2026-10-16"
// driver = "Isaac Clayton"

//! Topology validation for caller-built chains.
//!
//! The chain algorithms trust their input: a "circular" chain that never
//! returns to its entry makes them loop or panic. These checks walk a chain
//! once, remembering every node visited, and report the first defect found.
//! They use O(n) extra space and are meant for untrusted input, tests, and
//! the `try_` entry points, not for the hot path.

use rustc_hash::FxHashSet;
use thiserror::Error;
use tracing::debug;

use crate::arena::{Arena, Idx, NULL};

/// A chain whose links do not form the expected shape.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TopologyError {
    /// A link points at an index outside the arena's live set.
    #[error("node {at} links to {next}, which is not a live node")]
    Dangling { at: Idx, next: Idx },

    /// A linear chain visits node `at` a second time.
    #[error("linear chain revisits node {at}")]
    Cycle { at: Idx },

    /// A circular chain reaches the end of the links without returning to
    /// its entry.
    #[error("circular chain from {entry} ends without returning to it")]
    Unclosed { entry: Idx },

    /// A circular chain loops back to `at` without passing through `entry`.
    #[error("circular chain from {entry} loops back to {at} instead of the entry")]
    Lasso { entry: Idx, at: Idx },
}

/// Check that `head` starts a well-formed linear chain and return its length.
pub fn check_linear<T>(arena: &Arena<T>, head: Idx) -> Result<usize, TopologyError> {
    if head == NULL {
        return Ok(0);
    }
    if !arena.is_live(head) {
        let err = TopologyError::Dangling { at: NULL, next: head };
        debug!(%err, "invalid linear chain");
        return Err(err);
    }

    let mut visited = FxHashSet::default();
    let mut idx = head;
    while idx != NULL {
        if !visited.insert(idx) {
            let err = TopologyError::Cycle { at: idx };
            debug!(%err, "invalid linear chain");
            return Err(err);
        }
        let next = step(arena, idx)?;
        idx = next;
    }
    return Ok(visited.len());
}

/// Check that `entry` starts a well-formed circular chain and return its
/// length. An empty chain (`NULL`) is valid and has length zero.
pub fn check_ring<T>(arena: &Arena<T>, entry: Idx) -> Result<usize, TopologyError> {
    if entry == NULL {
        return Ok(0);
    }
    if !arena.is_live(entry) {
        let err = TopologyError::Dangling { at: NULL, next: entry };
        debug!(%err, "invalid circular chain");
        return Err(err);
    }

    let mut visited = FxHashSet::default();
    visited.insert(entry);
    let mut idx = step(arena, entry)?;
    while idx != entry {
        if idx == NULL {
            let err = TopologyError::Unclosed { entry };
            debug!(%err, "invalid circular chain");
            return Err(err);
        }
        if !visited.insert(idx) {
            let err = TopologyError::Lasso { entry, at: idx };
            debug!(%err, "invalid circular chain");
            return Err(err);
        }
        idx = step(arena, idx)?;
    }
    return Ok(visited.len());
}

/// Follow one link, rejecting links to released or out-of-range slots.
fn step<T>(arena: &Arena<T>, idx: Idx) -> Result<Idx, TopologyError> {
    let next = arena
        .raw_next(idx)
        .ok_or(TopologyError::Dangling { at: NULL, next: idx })?;
    if next != NULL && !arena.is_live(next) {
        return Err(TopologyError::Dangling { at: idx, next });
    }
    return Ok(next);
}
