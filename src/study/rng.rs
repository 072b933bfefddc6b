//! Random source for quiz generation.
//!
//! Quiz code only needs "an index below `n`", so the trait is that one
//! method. Two implementations:
//!
//! - `StdQuizRng`: `rand::rngs::StdRng`, from entropy or a fixed seed
//! - `SequenceRng`: replays a fixed list of values, for deterministic tests

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub trait QuizRng {
    /// Uniform index in `[0, bound)`. Returns 0 when `bound` is 0.
    fn below(&mut self, bound: usize) -> usize;
}

/// Production random source.
#[derive(Debug, Clone)]
pub struct StdQuizRng {
    rng: StdRng,
}

impl StdQuizRng {
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl QuizRng for StdQuizRng {
    fn below(&mut self, bound: usize) -> usize {
        if bound == 0 {
            return 0;
        }
        self.rng.gen_range(0..bound)
    }
}

/// Replays `values` cyclically, each reduced modulo the requested bound.
#[derive(Debug, Clone)]
pub struct SequenceRng {
    values: Vec<usize>,
    pos: usize,
}

impl SequenceRng {
    pub fn new(values: Vec<usize>) -> Self {
        Self { values, pos: 0 }
    }
}

impl QuizRng for SequenceRng {
    fn below(&mut self, bound: usize) -> usize {
        if bound == 0 || self.values.is_empty() {
            return 0;
        }
        let v = self.values[self.pos % self.values.len()];
        self.pos += 1;
        v % bound
    }
}

/// Fisher-Yates shuffle driven by `rng`.
pub fn shuffle_with_rng<T>(slice: &mut [T], rng: &mut dyn QuizRng) {
    for i in (1..slice.len()).rev() {
        let j = rng.below(i + 1);
        slice.swap(i, j);
    }
}

/// Up to `k` distinct elements of `pool`, sampled without replacement.
pub fn sample_without_replacement<T: Copy>(pool: &[T], k: usize, rng: &mut dyn QuizRng) -> Vec<T> {
    let mut remaining = pool.to_vec();
    let take = k.min(remaining.len());
    for i in 0..take {
        let j = i + rng.below(remaining.len() - i);
        remaining.swap(i, j);
    }
    remaining.truncate(take);
    remaining
}
