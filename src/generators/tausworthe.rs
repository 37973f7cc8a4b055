//! Tausworthe generator: bit-shift-register sequence with a mixing pass.
//!
//! Each generation call draws a register length `q`, a random register and a
//! tap distance `r`, runs the feedback register for `size` steps, and then
//! mixes neighbouring raw values into the final output:
//!
//! ```text
//! prev = raw[i - 1]            (raw[-1] wraps to the last element)
//! raw[i] / 100 != prev / 100   -> prev mod range
//! otherwise                    -> (raw[i] + prev) mod (r * q) mod range
//! ```

use log::debug;

use super::check_range;
use super::register::BitRegister;
use crate::error::RandCheckError;
use crate::random::RandomSource;

/// Smallest register length drawn by default.
pub const DEFAULT_MIN_REGISTER_LEN: usize = 14;

/// Largest register length drawn by default.
pub const DEFAULT_MAX_REGISTER_LEN: usize = 18;

/// Bounds accepted by [`TauswortheGenerator::with_register_bounds`].
///
/// A `q`-bit window must fit in a `u64` with room for the sum of two raw
/// values in the mixing pass.
const REGISTER_LEN_LIMITS: (usize, usize) = (2, 62);

/// Width of the blocks compared by the mixing pass.
const MIX_BLOCK: u64 = 100;

/// Tausworthe generator configured with register length bounds.
///
/// The generator itself holds no state between calls; all register state
/// lives inside a single [`generate`](Self::generate) call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TauswortheGenerator {
    min_len: usize,
    max_len: usize,
}

impl Default for TauswortheGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl TauswortheGenerator {
    /// Creates a generator drawing `q` from `[14, 18]`.
    pub fn new() -> Self {
        TauswortheGenerator {
            min_len: DEFAULT_MIN_REGISTER_LEN,
            max_len: DEFAULT_MAX_REGISTER_LEN,
        }
    }

    /// Creates a generator drawing `q` from `[min_len, max_len]`.
    ///
    /// # Errors
    /// - [`RandCheckError::InvalidRegisterBounds`] unless
    ///   `2 <= min_len <= max_len <= 62`.
    /// - [`RandCheckError::DegenerateTapSearch`] if `min_len == 2`: a drawn
    ///   `q = 2` has no tap distance, and the failure must surface before
    ///   any randomness is drawn.
    pub fn with_register_bounds(min_len: usize, max_len: usize) -> Result<Self, RandCheckError> {
        let (lo, hi) = REGISTER_LEN_LIMITS;
        if min_len < lo || max_len > hi || min_len > max_len {
            return Err(RandCheckError::InvalidRegisterBounds);
        }
        if find_tap(min_len, 1).is_err() {
            return Err(RandCheckError::DegenerateTapSearch);
        }
        Ok(TauswortheGenerator { min_len, max_len })
    }

    /// Returns the inclusive register length bounds.
    pub fn register_bounds(&self) -> (usize, usize) {
        (self.min_len, self.max_len)
    }

    /// Generates `size` values in `[0, range)`.
    ///
    /// Draw order from `source`: register length `q`, then `q` register bits,
    /// then the starting tap distance.
    ///
    /// # Errors
    /// - [`RandCheckError::InvalidRange`] if `range <= 1`, before any draw.
    /// - [`RandCheckError::DegenerateTapSearch`] if no tap distance
    ///   `r < q` with `q % r != 0` exists. The constructors never admit
    ///   such a `q`, so this only guards the search itself.
    pub fn generate(
        &self,
        range: u64,
        size: usize,
        source: &mut dyn RandomSource,
    ) -> Result<Vec<u64>, RandCheckError> {
        check_range(range)?;
        let q = source.next_in(self.min_len as u64, self.max_len as u64) as usize;
        let tail: Vec<bool> = (0..q).map(|_| source.next_bit()).collect();
        let start = source.next_in(1, (q - 1) as u64) as usize;
        let r = find_tap(q, start)?;
        debug!("tausworthe register q={} r={} (range={}, size={})", q, r, range, size);

        let mut register = BitRegister::new(&tail, r);
        let raw: Vec<u64> = (0..size).map(|_| register.step()).collect();
        Ok(mix(&raw, (r * q) as u64, range))
    }
}

/// Generates `size` values in `[0, range)` with the default register bounds.
///
/// # Errors
/// See [`TauswortheGenerator::generate`].
pub fn generate(
    range: u64,
    size: usize,
    source: &mut dyn RandomSource,
) -> Result<Vec<u64>, RandCheckError> {
    TauswortheGenerator::new().generate(range, size, source)
}

/// Finds the first tap distance `r >= start` with `r < q` and `q % r != 0`.
///
/// # Errors
/// Returns [`RandCheckError::DegenerateTapSearch`] if the search reaches `q`.
pub(crate) fn find_tap(q: usize, start: usize) -> Result<usize, RandCheckError> {
    (start.max(1)..q)
        .find(|&r| q % r != 0)
        .ok_or(RandCheckError::DegenerateTapSearch)
}

/// Combines each raw value with its predecessor into the final sequence.
///
/// Index 0 pairs with the last raw value.
pub(crate) fn mix(raw: &[u64], modulus: u64, range: u64) -> Vec<u64> {
    let n = raw.len();
    (0..n)
        .map(|i| {
            let cur = raw[i];
            let prev = raw[(i + n - 1) % n];
            if cur / MIX_BLOCK != prev / MIX_BLOCK {
                prev % range
            } else {
                (cur + prev) % modulus % range
            }
        })
        .collect()
}
