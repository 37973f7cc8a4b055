//! Error types for the randcheck library.

use std::fmt;

/// Errors produced by the randcheck library.
///
/// Every variant is a caller precondition violation. Generators and the
/// Pearson test report them before consuming any randomness or producing
/// any output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RandCheckError {
    /// Generation range is not greater than 1.
    InvalidRange,
    /// Linear generator seed is zero.
    InvalidSeed,
    /// Statistics were requested on an empty sample.
    EmptySample,
    /// Coefficient of variation requested on a sample whose mean is zero.
    ZeroMean,
    /// No tap distance `r` with `1 <= r < q` and `q % r != 0` exists.
    DegenerateTapSearch,
    /// Tausworthe register length bounds are outside [2, 62] or inverted.
    InvalidRegisterBounds,
    /// Pearson test needs at least 2 sample elements.
    SampleTooSmall,
    /// Domain upper bound for the Pearson histogram is negative or not finite.
    InvalidDomainBound,
    /// The chi-square distribution could not be built for the degrees of freedom.
    InvalidDistribution,
    /// Pearson test bands, search step or epsilon are out of bounds.
    InvalidPearsonConfig,
}

impl fmt::Display for RandCheckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RandCheckError::InvalidRange => {
                write!(f, "Generation range must be greater than 1")
            }
            RandCheckError::InvalidSeed => {
                write!(f, "Linear generator seed must be positive")
            }
            RandCheckError::EmptySample => {
                write!(f, "Sample statistics require a non-empty sample")
            }
            RandCheckError::ZeroMean => {
                write!(f, "Coefficient of variation is undefined for a zero mean")
            }
            RandCheckError::DegenerateTapSearch => {
                write!(f, "No valid tap distance exists for the register length")
            }
            RandCheckError::InvalidRegisterBounds => {
                write!(f, "Register length bounds must satisfy 2 <= min <= max <= 62")
            }
            RandCheckError::SampleTooSmall => {
                write!(f, "Pearson test requires at least 2 sample elements")
            }
            RandCheckError::InvalidDomainBound => {
                write!(f, "Domain upper bound must be finite and non-negative")
            }
            RandCheckError::InvalidDistribution => {
                write!(f, "Chi-square distribution parameters are invalid")
            }
            RandCheckError::InvalidPearsonConfig => {
                write!(f, "Pearson test requires 0 < lower < upper < 1, step > 0 and epsilon > 0")
            }
        }
    }
}

impl std::error::Error for RandCheckError {}
