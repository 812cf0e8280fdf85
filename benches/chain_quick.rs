// Quick benchmark for getting summary results across all chain algorithms

use std::time::Instant;

use relink::arena::Arena;
use relink::ordered::OrderedChain;
use relink::palindrome::is_palindrome;
use relink::rotate::rotate_left;
use relink::split::split;

use rand::{Rng, SeedableRng};
use rand::rngs::StdRng;

fn time_ops<F: FnMut() -> u64>(mut f: F, iterations: usize) -> f64 {
    // Warmup
    for _ in 0..3 {
        let _ = f();
    }

    let start = Instant::now();
    for _ in 0..iterations {
        let _ = f();
    }
    let elapsed = start.elapsed();
    elapsed.as_nanos() as f64 / iterations as f64
}

fn main() {
    let sizes = [100usize, 1000, 10000];

    println!(
        "{:>8} {:>14} {:>14} {:>14} {:>14} {:>14}",
        "size", "insert", "remove", "rotate", "palindrome", "split"
    );

    for size in sizes {
        let mut rng = StdRng::seed_from_u64(size as u64);
        let keys: Vec<u64> = (0..size).map(|_| rng.gen_range(0..size as u64 * 4)).collect();

        let insert = time_ops(|| {
            let mut chain = OrderedChain::new();
            for key in &keys {
                let _ = chain.insert(*key);
            }
            chain.len() as u64
        }, 10);

        let remove = time_ops(|| {
            let mut chain: OrderedChain<u64> = keys.iter().copied().collect();
            for key in &keys {
                let _ = chain.remove(key);
            }
            chain.len() as u64
        }, 10);

        let mut arena = Arena::with_capacity(size);
        let mut head = arena.link(0..size as u64);
        let rotate = time_ops(|| {
            let k = rng.gen_range(0..=size);
            head = rotate_left(&mut arena, head, k);
            head as u64
        }, 1000);

        let mut mirror = Arena::with_capacity(size);
        let half = size as u64 / 2;
        let word = mirror.link((0..half).chain((0..half).rev()));
        let palindrome = time_ops(|| is_palindrome(&mut mirror, word) as u64, 1000);

        let split_time = time_ops(|| {
            let mut ring = Arena::with_capacity(size);
            let entry = ring.link_ring(0..size as u64);
            let halves = split(&mut ring, entry);
            halves.second as u64
        }, 100);

        // insert and remove include building the chain; per-key cost is the
        // more useful number
        println!(
            "{:>8} {:>11.1}ns {:>11.1}ns {:>11.1}ns {:>11.1}ns {:>11.1}ns",
            size,
            insert / size as f64,
            remove / size as f64,
            rotate,
            palindrome,
            split_time,
        );
    }
}
