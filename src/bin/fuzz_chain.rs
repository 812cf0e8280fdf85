//! AFL Fuzz harness for the chain algorithms
//!
//! This harness checks every operation against a plain `Vec` model:
//! 1. OrderedChain: enumerate() matches a sorted, deduplicated model
//! 2. Rotation: matches slice rotation, with k > len a no-op
//! 3. Palindrome: matches comparison with the reversed model, and the chain
//!    is unchanged afterwards
//! 4. Split: halves concatenate back to the original ring
//!
//! Model: one arena shared by a linear scratch chain, plus a separate
//! OrderedChain roster.

use afl::fuzz;
use relink::arena::Arena;
use relink::ordered::{Insertion, OrderedChain, Removal};
use relink::palindrome::is_palindrome;
use relink::rotate::rotate_left;
use relink::split::split;
use relink::topology::{check_linear, check_ring};

/// Operation types the fuzzer can generate
#[derive(Debug, Clone, Copy)]
enum FuzzOp {
    /// Insert a key into the roster
    Insert { key: u8 },
    /// Remove a key from the roster
    Remove { key: u8 },
    /// Rotate the scratch chain
    Rotate { k: u8 },
    /// Push a value onto the end of the scratch chain
    Push { value: u8 },
    /// Check the scratch chain for a palindrome
    Palindrome,
    /// Copy the scratch chain into a ring and split it
    Split,
}

impl FuzzOp {
    fn from_bytes(bytes: &[u8]) -> Option<(FuzzOp, &[u8])> {
        if bytes.is_empty() {
            return None;
        }

        let op_type = bytes[0] % 6;
        let rest = &bytes[1..];

        match op_type {
            0 if !rest.is_empty() => Some((FuzzOp::Insert { key: rest[0] % 32 }, &rest[1..])),
            1 if !rest.is_empty() => Some((FuzzOp::Remove { key: rest[0] % 32 }, &rest[1..])),
            2 if !rest.is_empty() => Some((FuzzOp::Rotate { k: rest[0] % 40 }, &rest[1..])),
            // Small value range so palindromes actually occur
            3 if !rest.is_empty() => Some((FuzzOp::Push { value: rest[0] % 3 }, &rest[1..])),
            4 => Some((FuzzOp::Palindrome, rest)),
            5 => Some((FuzzOp::Split, rest)),
            _ => None,
        }
    }
}

fn main() {
    fuzz!(|data: &[u8]| {
        let mut roster: OrderedChain<u8> = OrderedChain::new();
        let mut roster_model: Vec<u8> = Vec::new();

        let mut arena: Arena<u8> = Arena::new();
        let mut head = relink::NULL;
        let mut model: Vec<u8> = Vec::new();

        let mut remaining = data;

        while let Some((op, rest)) = FuzzOp::from_bytes(remaining) {
            remaining = rest;

            match op {
                FuzzOp::Insert { key } => {
                    let expected = match roster_model.binary_search(&key) {
                        Ok(_) => Insertion::Duplicate,
                        Err(pos) => {
                            roster_model.insert(pos, key);
                            Insertion::Inserted
                        }
                    };
                    assert_eq!(roster.insert(key), expected);
                }

                FuzzOp::Remove { key } => {
                    let expected = match roster_model.binary_search(&key) {
                        Ok(pos) => {
                            roster_model.remove(pos);
                            Removal::Removed
                        }
                        Err(_) => Removal::NotFound,
                    };
                    assert_eq!(roster.remove(&key), expected);
                }

                FuzzOp::Rotate { k } => {
                    let k = k as usize;
                    head = rotate_left(&mut arena, head, k);
                    if k <= model.len() {
                        model.rotate_left(k % model.len().max(1));
                    }
                    assert_eq!(arena.values(head), model, "Rotation mismatch for k = {}", k);
                }

                FuzzOp::Push { value } => {
                    let idx = arena.alloc(value);
                    if head == relink::NULL {
                        head = idx;
                    } else {
                        let last = arena.last(head);
                        arena.set_next(last, idx);
                    }
                    model.push(value);
                }

                FuzzOp::Palindrome => {
                    let expected = model.iter().eq(model.iter().rev());
                    assert_eq!(is_palindrome(&mut arena, head), expected, "Palindrome mismatch");
                    assert_eq!(arena.values(head), model, "Chain not restored after palindrome check");
                }

                FuzzOp::Split => {
                    let mut ring_arena = Arena::new();
                    let entry = ring_arena.link_ring(model.iter().copied());
                    let halves = split(&mut ring_arena, entry);
                    let first = ring_arena.ring_values(halves.first);
                    let second = ring_arena.ring_values(halves.second);
                    assert_eq!(first.len(), model.len().div_ceil(2), "First half size");
                    assert_eq!(second.len(), model.len() / 2, "Second half size");
                    assert_eq!(check_ring(&ring_arena, halves.first), Ok(first.len()));
                    assert_eq!(check_ring(&ring_arena, halves.second), Ok(second.len()));
                    let rebuilt: Vec<u8> = first.into_iter().chain(second).collect();
                    assert_eq!(rebuilt, model, "Halves do not rebuild the ring");
                }
            }
        }

        // Final consistency checks
        assert_eq!(roster.enumerate().copied().collect::<Vec<_>>(), roster_model);
        assert_eq!(roster.len(), roster_model.len());
        assert_eq!(check_linear(&arena, head), Ok(model.len()));
        assert_eq!(arena.live(), model.len());
    });
}
