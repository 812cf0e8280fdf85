// model = "claude-opus-4-5"
// created = "2026-10-15"
// modified = "2026-10-16"
// driver = "Isaac Clayton"

//! Fixture-driven tests replaying the reservation, rotation, palindrome and
//! split walkthroughs stored in `tests/fixtures/demo_cases.json`.

use serde::Deserialize;

use relink::arena::{Arena, NULL};
use relink::ordered::{Insertion, OrderedChain, Removal};
use relink::palindrome::is_palindrome;
use relink::rotate::rotate_left;
use relink::split::split;

const CASES: &str = include_str!("fixtures/demo_cases.json");

#[derive(Debug, Deserialize)]
struct Cases {
    reservations: Vec<ReservationCase>,
    rotations: Vec<RotationCase>,
    palindromes: Vec<PalindromeCase>,
    splits: Vec<SplitCase>,
}

#[derive(Debug, Deserialize)]
struct ReservationCase {
    name: String,
    steps: Vec<Step>,
    roster: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
enum Step {
    Reserve { key: String, expect: Expect },
    Cancel { key: String, expect: Expect },
    Check { key: String, expect: Expect },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
enum Expect {
    Inserted,
    Duplicate,
    Removed,
    NotFound,
    Present,
    Absent,
}

#[derive(Debug, Deserialize)]
struct RotationCase {
    values: Vec<i64>,
    k: usize,
    expect: Vec<i64>,
}

#[derive(Debug, Deserialize)]
struct PalindromeCase {
    values: Vec<i64>,
    expect: bool,
}

#[derive(Debug, Deserialize)]
struct SplitCase {
    values: Vec<i64>,
    first: Vec<i64>,
    second: Vec<i64>,
}

fn load() -> Cases {
    serde_json::from_str(CASES).expect("fixture file should parse")
}

fn insertion(outcome: Insertion) -> Expect {
    match outcome {
        Insertion::Inserted => Expect::Inserted,
        Insertion::Duplicate => Expect::Duplicate,
    }
}

fn removal(outcome: Removal) -> Expect {
    match outcome {
        Removal::Removed => Expect::Removed,
        Removal::NotFound => Expect::NotFound,
    }
}

#[test]
fn reservation_sessions() {
    for case in load().reservations {
        let mut roster = OrderedChain::new();
        for (i, step) in case.steps.iter().enumerate() {
            let (actual, expect) = match step {
                Step::Reserve { key, expect } => (insertion(roster.insert(key.clone())), *expect),
                Step::Cancel { key, expect } => (removal(roster.remove(key.as_str())), *expect),
                Step::Check { key, expect } => {
                    let present = roster.contains(key.as_str());
                    (if present { Expect::Present } else { Expect::Absent }, *expect)
                }
            };
            assert_eq!(actual, expect, "{}: step {} ({:?})", case.name, i, step);
        }
        let listed: Vec<String> = roster.enumerate().cloned().collect();
        assert_eq!(listed, case.roster, "{}: final roster", case.name);
    }
}

#[test]
fn rotations() {
    for case in load().rotations {
        let mut arena = Arena::new();
        let head = arena.link(case.values.iter().copied());
        let head = rotate_left(&mut arena, head, case.k);
        assert_eq!(arena.values(head), case.expect, "{:?} by {}", case.values, case.k);
    }
}

#[test]
fn palindromes() {
    for case in load().palindromes {
        let mut arena = Arena::new();
        let head = arena.link(case.values.iter().copied());
        assert_eq!(is_palindrome(&mut arena, head), case.expect, "{:?}", case.values);
        assert_eq!(arena.values(head), case.values, "chain not restored");
    }
}

#[test]
fn splits() {
    for case in load().splits {
        let mut arena = Arena::new();
        let entry = arena.link_ring(case.values.iter().copied());
        let halves = split(&mut arena, entry);
        assert_eq!(arena.ring_values(halves.first), case.first, "{:?}", case.values);
        assert_eq!(arena.ring_values(halves.second), case.second, "{:?}", case.values);
        if case.second.is_empty() {
            assert_eq!(halves.second, NULL);
        }
    }
}
