//! Random number sources for the engine.

use std::collections::VecDeque;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Uniform integer source, inclusive on both ends.
pub trait RandomSource {
    fn next_int(&mut self, low: i32, high: i32) -> i32;

    /// Draw from a `(low, high)` range constant.
    fn roll(&mut self, range: (i32, i32)) -> i32 {
        self.next_int(range.0, range.1)
    }
}

/// ChaCha8-backed source. Same seed = same game.
#[derive(Debug, Clone)]
pub struct SeededRandom {
    rng: ChaCha8Rng,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededRandom {
    fn next_int(&mut self, low: i32, high: i32) -> i32 {
        self.rng.gen_range(low..=high)
    }
}

/// Replays a fixed sequence of values.
///
/// Each value is clamped into the requested range. Once the script runs
/// out, every draw returns `low`.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRandom {
    values: VecDeque<i32>,
}

impl ScriptedRandom {
    pub fn new(values: impl IntoIterator<Item = i32>) -> Self {
        Self {
            values: values.into_iter().collect(),
        }
    }

    /// Values not yet drawn.
    pub fn remaining(&self) -> usize {
        self.values.len()
    }
}

impl RandomSource for ScriptedRandom {
    fn next_int(&mut self, low: i32, high: i32) -> i32 {
        match self.values.pop_front() {
            Some(value) => value.clamp(low, high),
            None => low,
        }
    }
}
