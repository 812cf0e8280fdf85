// model = "claude-opus-4-5"
// created = "2026-10-14"
// modified = "2026-10-16"
// driver = "Isaac Clayton"

//! Relink - in-place algorithms over singly and circularly linked chains.
//!
//! Every chain lives in an [`Arena`](arena::Arena): nodes are addressed by
//! index and a successor link is just another index, so rewiring a chain is
//! O(1) and never fights the borrow checker. The algorithms only relink
//! nodes the caller already built; none of them allocate.
//!
//! | Module       | Operation                                          |
//! |--------------|----------------------------------------------------|
//! | `ordered`    | sorted, duplicate-free chain (insert/remove/lookup) |
//! | `rotate`     | rotate a linear chain left by `k`                  |
//! | `palindrome` | non-destructive palindrome check, in-place reverse |
//! | `split`      | split a circular chain into two circular halves    |
//! | `bisect`     | slow/fast midpoint search shared by the above      |
//! | `topology`   | optional validation of caller-built chains         |
//!
//! # Quick Start
//!
//! ```
//! use relink::arena::Arena;
//! use relink::palindrome::is_palindrome;
//! use relink::rotate::rotate_left;
//! use relink::split::split;
//!
//! let mut arena = Arena::new();
//!
//! let head = arena.link([10, 20, 30, 40, 50]);
//! let head = rotate_left(&mut arena, head, 2);
//! assert_eq!(arena.values(head), vec![30, 40, 50, 10, 20]);
//!
//! let word = arena.link([1, 2, 3, 2, 1]);
//! assert!(is_palindrome(&mut arena, word));
//!
//! let ring = arena.link_ring([1, 2, 3, 4, 5]);
//! let halves = split(&mut arena, ring);
//! assert_eq!(arena.ring_values(halves.first), vec![1, 2, 3]);
//! assert_eq!(arena.ring_values(halves.second), vec![4, 5]);
//! ```

pub mod arena;
pub mod bisect;
pub mod ordered;
pub mod palindrome;
pub mod rotate;
pub mod split;
pub mod topology;

pub use arena::{Arena, Idx, NULL};
pub use topology::TopologyError;
