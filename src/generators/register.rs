//! BitRegister: index-addressed feedback shift register for the Tausworthe generator.
//!
//! The register holds a window of `q + 1` bits followed by `q` scratch
//! slots. Each step fills the scratch slots with the feedback rule
//! `bit[j] = bit[j - r] XOR bit[j - q]` and slides the newest `q + 1` bits
//! back to the front with an in-place copy, so the buffer never grows.

/// Fixed-capacity bit register with feedback taps at distances `q` and `r`.
///
/// Bits are stored one per `u8` slot (0 or 1) in a buffer of `2q + 1` slots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct BitRegister {
    bits: Vec<u8>,
    len: usize,
    tap: usize,
}

impl BitRegister {
    /// Creates a register from explicit window bits.
    ///
    /// The window is `1` followed by `tail`, giving `q + 1` bits where
    /// `q = tail.len()`.
    ///
    /// # Parameters
    /// - `tail`: The `q` bits following the fixed leading one.
    /// - `tap`: Tap distance `r`, with `1 <= r < q`.
    pub(crate) fn new(tail: &[bool], tap: usize) -> Self {
        let len = tail.len();
        let mut bits = Vec::with_capacity(2 * len + 1);
        bits.push(1);
        bits.extend(tail.iter().map(|&b| b as u8));
        bits.resize(2 * len + 1, 0);
        BitRegister { bits, len, tap }
    }

    /// Register length `q`.
    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    /// Advances the register by `q` bits and returns the new window reduced mod `2^q`.
    ///
    /// Bit `j` for `j` in `[q, 2q)` is written to slot `j + 1`, reading slots
    /// `j - r` and `j - q`. Taps with `j - r > q` read bits produced earlier in
    /// the same step.
    pub(crate) fn step(&mut self) -> u64 {
        let q = self.len;
        let r = self.tap;
        for j in q..2 * q {
            self.bits[j + 1] = self.bits[j - r] ^ self.bits[j - q];
        }
        self.bits.copy_within(q..=2 * q, 0);
        self.window_value()
    }

    /// Returns the current window as a binary number modulo `2^q`.
    ///
    /// The leading bit of the `q + 1`-bit window falls outside the modulus,
    /// so only slots `1..=q` contribute.
    fn window_value(&self) -> u64 {
        self.bits[1..=self.len]
            .iter()
            .fold(0u64, |acc, &bit| (acc << 1) | bit as u64)
    }
}
