// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Parallel hand iteration.
use rand::prelude::*;
use std::thread;

use crate::{Card, Deck, deck::next_combination};

/// Binomial coefficients table for n <= 53 and k <= 7.
const fn make_nck() -> [[u64; 8]; 54] {
    let mut t = [[0u64; 8]; 54];
    let mut n = 0;

    while n < 54 {
        t[n][0] = 1;

        let mut k = 1;
        while k <= 7 && k <= n {
            // nck(n, k) = nck(n - 1, k - 1) + nck(n - 1, k)
            t[n][k] = t[n - 1][k - 1] + t[n - 1][k];
            k += 1;
        }

        n += 1;
    }

    t
}

const NCK: [[u64; 8]; 54] = make_nck();

/// Returns n choose k, zero if n < k.
fn nck(n: usize, k: usize) -> usize {
    assert!(n <= 53, "n={n} must be 0 <= n <= 53");
    assert!(k <= 7, "k={k} must be 0 <= k <= 7");
    NCK[n][k] as usize
}

/// Returns the positions of the nth k-combination of n elements in
/// lexicographic order.
fn nth_combination(n: usize, k: usize, mut nth: usize) -> Vec<usize> {
    let mut idx = Vec::with_capacity(k);
    let mut next = 0;

    for i in 0..k {
        // Skip the combinations that start with a smaller position.
        loop {
            let count = nck(n - next - 1, k - i - 1);
            if nth < count {
                break;
            }

            nth -= count;
            next += 1;
        }

        idx.push(next);
        next += 1;
    }

    idx
}

impl Deck {
    /// Parallel for each, calls the `f` closure for each k-cards hand.
    ///
    /// The closure takes the task identifier (0..num_tasks) and a slice of
    /// cards of length k.
    ///
    /// Panics if k is not 2 <= k <= 7.
    pub fn par_for_each<F>(&self, num_tasks: usize, k: usize, f: F)
    where
        F: Fn(usize, &[Card]) + Send + Sync,
    {
        assert!((2..=7).contains(&k), "2 <= k <= 7");
        assert!(num_tasks > 0);

        let n = self.cards.len();
        if k > n {
            return;
        }

        let num_hands = nck(n, k);
        let hands_per_task = num_hands.div_ceil(num_tasks);

        thread::scope(|s| {
            for task_id in 0..num_tasks {
                let start = task_id * hands_per_task;
                if start >= num_hands {
                    break;
                }

                let count = hands_per_task.min(num_hands - start);
                let f = &f;
                s.spawn(move || {
                    let mut idx = nth_combination(n, k, start);
                    let mut h = vec![Card::JOKER; k];

                    for _ in 0..count {
                        for (pos, &i) in idx.iter().enumerate() {
                            h[pos] = self.cards[i];
                        }

                        f(task_id, &h);

                        if !next_combination(&mut idx, n) {
                            break;
                        }
                    }
                });
            }
        });
    }

    /// Calls the `f` closure from `num_tasks` parallel tasks, each task
    /// samples `samples_per_task` k-cards hands with a generator seeded from
    /// `seed` and its task identifier.
    ///
    /// Panics if k is not 2 <= k <= 7.
    pub fn par_sample<F>(&self, num_tasks: usize, samples_per_task: usize, k: usize, seed: u64, f: F)
    where
        F: Fn(usize, &[Card]) + Send + Sync,
    {
        assert!((2..=7).contains(&k), "2 <= k <= 7");
        assert!(num_tasks > 0);

        thread::scope(|s| {
            for task_id in 0..num_tasks {
                let f = &f;
                s.spawn(move || {
                    let mut rng = StdRng::seed_from_u64(seed.wrapping_add(task_id as u64));
                    self.sample(&mut rng, samples_per_task, k, |h| f(task_id, h));
                });
            }
        });
    }
}
