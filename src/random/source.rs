//! RandomSource trait and its implementations.
//!
//! Defines the single capability the generators draw their randomness
//! from. Implementations must return values inside the requested
//! inclusive bounds.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Trait for sources of random draws used to set up the generators.
///
/// Bounds are inclusive on both ends, matching the way the generators
/// describe their draws (seed in `[1, range]`, register length in
/// `[14, 18]`, tap distance in `[1, q-1]`).
pub trait RandomSource {
    /// Returns a uniformly distributed integer in `[low, high]`.
    ///
    /// Callers guarantee `low <= high`.
    fn next_in(&mut self, low: u64, high: u64) -> u64;

    /// Returns a uniformly distributed bit.
    fn next_bit(&mut self) -> bool {
        self.next_in(0, 1) == 1
    }
}

/// Random source backed by [`rand::rngs::StdRng`].
///
/// [`new`](Self::new) seeds from operating system entropy;
/// [`with_seed`](Self::with_seed) gives a reproducible stream.
#[derive(Debug, Clone)]
pub struct StdSource {
    rng: StdRng,
}

impl Default for StdSource {
    fn default() -> Self {
        Self::new()
    }
}

impl StdSource {
    /// Creates a source seeded from operating system entropy.
    pub fn new() -> Self {
        StdSource {
            rng: StdRng::from_entropy(),
        }
    }

    /// Creates a source with a fixed, deterministic seed.
    ///
    /// # Parameters
    /// - `seed`: The seed value for deterministic output.
    pub fn with_seed(seed: u64) -> Self {
        StdSource {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for StdSource {
    fn next_in(&mut self, low: u64, high: u64) -> u64 {
        self.rng.gen_range(low..=high)
    }

    fn next_bit(&mut self) -> bool {
        self.rng.gen_bool(0.5)
    }
}

/// Random source that replays a fixed script of values.
///
/// Each draw takes the next script value. Values inside the requested bounds
/// are returned unchanged; values outside are folded in as
/// `low + value % (high - low + 1)`. The script wraps around when exhausted;
/// an empty script always yields `low`.
///
/// Useful to pin the exact register length, register bits and tap distance
/// of a Tausworthe run.
#[derive(Debug, Clone)]
pub struct ScriptedSource {
    script: Vec<u64>,
    pos: usize,
}

impl ScriptedSource {
    /// Creates a source replaying `script` in order.
    ///
    /// # Parameters
    /// - `script`: Values returned by successive draws.
    pub fn new(script: Vec<u64>) -> Self {
        ScriptedSource { script, pos: 0 }
    }

    /// Returns how many draws have been made so far.
    pub fn draws(&self) -> usize {
        self.pos
    }
}

impl RandomSource for ScriptedSource {
    fn next_in(&mut self, low: u64, high: u64) -> u64 {
        if self.script.is_empty() {
            return low;
        }
        let value = self.script[self.pos % self.script.len()];
        self.pos += 1;
        if (low..=high).contains(&value) {
            return value;
        }
        match (high - low).checked_add(1) {
            Some(width) => low + value % width,
            None => value,
        }
    }
}
