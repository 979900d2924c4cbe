//! Random sources for simulated sensors
//!
//! Sensors never call an RNG directly. They draw through [`RandomSource`], so
//! the simulation can be:
//! - Live ([`ThreadRandom`])
//! - Reproducible from a seed ([`SeededRandom`])
//! - Fully scripted for tests ([`SequenceRandom`])

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of uniformly distributed values
pub trait RandomSource {
    /// Draw a value from the half-open range `[low, high)`
    ///
    /// Callers guarantee `low < high`. Scripted sources such as
    /// [`SequenceRandom`] replay their values as given and may fall outside
    /// the range.
    fn next_in_range(&mut self, low: f64, high: f64) -> f64;
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    fn next_in_range(&mut self, low: f64, high: f64) -> f64 {
        (**self).next_in_range(low, high)
    }
}

/// Thread-local RNG, seeded by the OS
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn next_in_range(&mut self, low: f64, high: f64) -> f64 {
        rand::thread_rng().gen_range(low..high)
    }
}

/// Reproducible RNG from a fixed seed
#[derive(Debug, Clone)]
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    /// Create from a seed; equal seeds give equal sequences
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededRandom {
    fn next_in_range(&mut self, low: f64, high: f64) -> f64 {
        self.rng.gen_range(low..high)
    }
}

/// Replays a fixed list of values, cycling when exhausted
///
/// Values are returned exactly as given; the requested range is ignored.
/// An empty sequence yields `low`.
#[derive(Debug, Clone, Default)]
pub struct SequenceRandom {
    values: Vec<f64>,
    position: usize,
}

impl SequenceRandom {
    /// Create from the values to replay
    pub fn new(values: impl Into<Vec<f64>>) -> Self {
        Self {
            values: values.into(),
            position: 0,
        }
    }

    /// Values handed out so far
    pub fn drawn(&self) -> usize {
        self.position
    }
}

impl RandomSource for SequenceRandom {
    fn next_in_range(&mut self, low: f64, _high: f64) -> f64 {
        if self.values.is_empty() {
            return low;
        }

        let value = self.values[self.position % self.values.len()];
        self.position += 1;
        value
    }
}
