// model = "claude-opus-4-5"
// created = "2026-10-14"
// modified = "2026-10-16"
// driver = "Isaac Clayton"

//! Palindrome check on a linear chain in O(1) extra space.
//!
//! 1. Bisect the chain; `mid` is the last node of the first half.
//! 2. Reverse everything after `mid` in place.
//! 3. Walk the head and the reversed half in lockstep, comparing payloads.
//! 4. Reverse the half back and reattach it to `mid`.
//!
//! For odd lengths the middle node stays in the first half and is never
//! compared. Step 4 is owned by a guard so the chain is restored on every
//! exit, including an early mismatch and unwinding out of `PartialEq`.

use tracing::trace;

use crate::arena::{Arena, Idx, NULL};
use crate::bisect::midpoint;
use crate::topology::{check_linear, TopologyError};

/// Reverse the linear chain at `head` in place and return the new head.
pub fn reverse<T>(arena: &mut Arena<T>, head: Idx) -> Idx {
    let mut prev = NULL;
    let mut idx = head;
    while idx != NULL {
        let next = arena.next(idx);
        arena.set_next(idx, prev);
        prev = idx;
        idx = next;
    }
    return prev;
}

/// The second half of a chain, detached and reversed. Dropping the guard
/// reverses it back and links it to `mid` again.
struct ReversedHalf<'a, T> {
    arena: &'a mut Arena<T>,
    mid: Idx,
    half: Idx,
}

impl<'a, T> ReversedHalf<'a, T> {
    fn new(arena: &'a mut Arena<T>, mid: Idx) -> Self {
        let after = arena.next(mid);
        arena.set_next(mid, NULL);
        let half = reverse(arena, after);
        return ReversedHalf { arena, mid, half };
    }
}

impl<T: PartialEq> ReversedHalf<'_, T> {
    /// Compare the reversed half against the chain starting at `head`.
    fn mirrors(&self, head: Idx) -> bool {
        let mut first = head;
        let mut second = self.half;
        while second != NULL {
            if self.arena.item(first) != self.arena.item(second) {
                return false;
            }
            first = self.arena.next(first);
            second = self.arena.next(second);
        }
        return true;
    }
}

impl<T> Drop for ReversedHalf<'_, T> {
    fn drop(&mut self) {
        let after = reverse(self.arena, self.half);
        self.arena.set_next(self.mid, after);
    }
}

/// True if the chain at `head` reads the same forwards and backwards.
/// The chain is left exactly as it was found.
pub fn is_palindrome<T: PartialEq>(arena: &mut Arena<T>, head: Idx) -> bool {
    if head == NULL || arena.next(head) == NULL {
        return true;
    }

    let mid = midpoint(arena, head);
    let half = ReversedHalf::new(arena, mid);
    let result = half.mirrors(head);
    trace!(result, "palindrome check");
    return result;
}

/// Like [`is_palindrome`], but first checks that `head` starts a
/// well-formed linear chain.
pub fn try_is_palindrome<T: PartialEq>(
    arena: &mut Arena<T>,
    head: Idx,
) -> Result<bool, TopologyError> {
    check_linear(arena, head)?;
    return Ok(is_palindrome(arena, head));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(values: &[i64]) -> bool {
        let mut arena = Arena::new();
        let head = arena.link(values.iter().copied());
        let result = is_palindrome(&mut arena, head);
        assert_eq!(arena.values(head), values, "chain not restored");
        result
    }

    #[test]
    fn reverse_chain() {
        let mut arena = Arena::new();
        let head = arena.link([1, 2, 3]);
        let head = reverse(&mut arena, head);
        assert_eq!(arena.values(head), vec![3, 2, 1]);
        assert_eq!(reverse(&mut arena, NULL), NULL);
    }

    #[test]
    fn reverse_twice_is_identity() {
        let mut arena = Arena::new();
        let head = arena.link(0..7);
        let back = reverse(&mut arena, head);
        let head_again = reverse(&mut arena, back);
        assert_eq!(head_again, head);
        assert_eq!(arena.values(head), (0..7).collect::<Vec<_>>());
    }

    #[test]
    fn trivial_chains() {
        assert!(check(&[]));
        assert!(check(&[5]));
    }

    #[test]
    fn odd_palindrome() {
        assert!(check(&[1, 2, 3, 2, 1]));
        assert!(check(&[1, 2, 1]));
    }

    #[test]
    fn even_palindrome() {
        assert!(check(&[1, 2, 2, 1]));
        assert!(check(&[7, 7]));
    }

    #[test]
    fn not_palindrome() {
        assert!(!check(&[1, 2, 3, 4]));
        assert!(!check(&[1, 2]));
        assert!(!check(&[1, 2, 3, 1, 1]));
    }

    #[test]
    fn mismatch_at_middle_pair() {
        assert!(!check(&[1, 2, 3, 4, 2, 1]));
    }

    #[test]
    fn restores_tail_link() {
        let mut arena = Arena::new();
        let head = arena.link([1, 2, 3, 4]);
        let tail = arena.last(head);
        let _ = is_palindrome(&mut arena, head);
        assert_eq!(arena.last(head), tail);
        assert_eq!(arena.next(tail), NULL);
    }

    /// Payload whose comparison panics when it meets `trip`.
    #[derive(Debug, Clone, Copy)]
    struct Tripwire {
        value: u32,
        trip: u32,
    }

    impl PartialEq for Tripwire {
        fn eq(&self, other: &Self) -> bool {
            if self.value == self.trip || other.value == other.trip {
                panic!("comparison tripped on {}", self.trip);
            }
            self.value == other.value
        }
    }

    #[test]
    fn restores_chain_when_comparison_panics() {
        let mut arena = Arena::new();
        let head = arena.link([1, 2, 3, 4, 9].map(|value| Tripwire { value, trip: 9 }));
        let tail = arena.last(head);

        let outcome = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            is_palindrome(&mut arena, head)
        }));
        assert!(outcome.is_err());

        let values: Vec<u32> = arena.iter(head).map(|t| t.value).collect();
        assert_eq!(values, vec![1, 2, 3, 4, 9]);
        assert_eq!(arena.last(head), tail);
        assert_eq!(arena.next(tail), NULL);
    }

    #[test]
    fn checked_rejects_cycle() {
        let mut arena = Arena::new();
        let entry = arena.link_ring([1, 2, 1]);
        assert_eq!(
            try_is_palindrome(&mut arena, entry),
            Err(TopologyError::Cycle { at: entry })
        );
    }

    #[test]
    fn checked_accepts_linear() {
        let mut arena = Arena::new();
        let head = arena.link(["a", "b", "a"]);
        assert_eq!(try_is_palindrome(&mut arena, head), Ok(true));
    }
}
