//! Integer sequence generators.
//!
//! Both generators produce a [`Vec<u64>`] whose elements lie in
//! `[0, range)`. Setup randomness comes from a
//! [`RandomSource`](crate::random::RandomSource); the generation itself is a
//! deterministic recurrence.

pub mod linear;
pub(crate) mod register;
pub mod tausworthe;

pub use tausworthe::TauswortheGenerator;

use crate::error::RandCheckError;

/// Rejects generation ranges that cannot hold two distinct values.
pub(crate) fn check_range(range: u64) -> Result<(), RandCheckError> {
    if range <= 1 {
        return Err(RandCheckError::InvalidRange);
    }
    Ok(())
}
