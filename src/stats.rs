//! Sample statistics for generated sequences.
//!
//! Computes mean, population standard deviation and coefficient of
//! variation, and compares a sample against the theoretical values of the
//! discrete uniform distribution over the generation range.

use statrs::statistics::Statistics;

use crate::error::RandCheckError;

/// Arithmetic mean of `sample`.
///
/// # Errors
/// Returns [`RandCheckError::EmptySample`] if `sample` is empty.
pub fn mean(sample: &[u64]) -> Result<f64, RandCheckError> {
    if sample.is_empty() {
        return Err(RandCheckError::EmptySample);
    }
    Ok(sample.iter().map(|&x| x as f64).mean())
}

/// Population standard deviation of `sample`: `sqrt(sum((x - mean)^2) / n)`.
///
/// # Errors
/// Returns [`RandCheckError::EmptySample`] if `sample` is empty.
pub fn standard_deviation(sample: &[u64]) -> Result<f64, RandCheckError> {
    if sample.is_empty() {
        return Err(RandCheckError::EmptySample);
    }
    Ok(sample.iter().map(|&x| x as f64).population_std_dev())
}

/// Coefficient of variation of `sample`: standard deviation over mean.
///
/// # Errors
/// - [`RandCheckError::EmptySample`] if `sample` is empty.
/// - [`RandCheckError::ZeroMean`] if the mean is zero.
pub fn coefficient_of_variation(sample: &[u64]) -> Result<f64, RandCheckError> {
    SampleStatistics::from_sample(sample)?.cv()
}

/// Mean, standard deviation and coefficient of variation of one sample.
///
/// The coefficient of variation is stored as `None` when the mean is zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleStatistics {
    pub mean: f64,
    pub deviation: f64,
    cv: Option<f64>,
}

impl SampleStatistics {
    /// Computes the statistics of `sample`.
    ///
    /// # Errors
    /// Returns [`RandCheckError::EmptySample`] if `sample` is empty.
    pub fn from_sample(sample: &[u64]) -> Result<Self, RandCheckError> {
        let mean = mean(sample)?;
        let deviation = standard_deviation(sample)?;
        let cv = (mean != 0.0).then(|| deviation / mean);
        Ok(SampleStatistics {
            mean,
            deviation,
            cv,
        })
    }

    /// Coefficient of variation.
    ///
    /// # Errors
    /// Returns [`RandCheckError::ZeroMean`] if the sample mean is zero.
    pub fn cv(&self) -> Result<f64, RandCheckError> {
        self.cv.ok_or(RandCheckError::ZeroMean)
    }

    /// Returns `true` if the sample is homogeneous with respect to `reference`,
    /// i.e. its coefficient of variation is below the theoretical one.
    ///
    /// A zero-mean sample is never homogeneous.
    pub fn is_homogeneous(&self, reference: &UniformReference) -> bool {
        self.cv.is_some_and(|cv| cv < reference.cv)
    }
}

/// Theoretical statistics of the uniform distribution for a generation range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UniformReference {
    pub mean: f64,
    pub deviation: f64,
    pub cv: f64,
}

impl UniformReference {
    /// Reference values for values generated in `[0, range)`.
    ///
    /// Mean `range / 2`, deviation `sqrt(((range + 1)^2 - 1) / 12)`.
    ///
    /// # Errors
    /// Returns [`RandCheckError::InvalidRange`] if `range <= 1`.
    pub fn for_range(range: u64) -> Result<Self, RandCheckError> {
        if range <= 1 {
            return Err(RandCheckError::InvalidRange);
        }
        let r = range as f64;
        let mean = r / 2.0;
        let deviation = (((r + 1.0).powi(2) - 1.0) / 12.0).sqrt();
        Ok(UniformReference {
            mean,
            deviation,
            cv: deviation / mean,
        })
    }
}

/// Counts the homogeneous samples in `stats` with respect to `reference`.
pub fn count_homogeneous(stats: &[SampleStatistics], reference: &UniformReference) -> usize {
    stats.iter().filter(|s| s.is_homogeneous(reference)).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_mean_basic() {
        assert!((mean(&[1, 2, 3, 4]).unwrap() - 2.5).abs() < EPS);
    }

    #[test]
    fn test_population_deviation() {
        // population variance of [2, 4, 4, 4, 5, 5, 7, 9] is 4
        let dev = standard_deviation(&[2, 4, 4, 4, 5, 5, 7, 9]).unwrap();
        assert!((dev - 2.0).abs() < EPS, "deviation was {}", dev);
    }

    #[test]
    fn test_constant_sequence_zero_deviation() {
        assert_eq!(standard_deviation(&[42; 17]).unwrap(), 0.0);
        assert_eq!(coefficient_of_variation(&[42; 17]).unwrap(), 0.0);
    }

    #[test]
    fn test_single_element() {
        let stats = SampleStatistics::from_sample(&[5]).unwrap();
        assert_eq!(stats.mean, 5.0);
        assert_eq!(stats.deviation, 0.0);
    }

    #[test]
    fn test_cv() {
        let cv = coefficient_of_variation(&[2, 4, 4, 4, 5, 5, 7, 9]).unwrap();
        assert!((cv - 0.4).abs() < EPS);
    }

    #[test]
    fn test_empty_sample() {
        assert_eq!(mean(&[]), Err(RandCheckError::EmptySample));
        assert_eq!(standard_deviation(&[]), Err(RandCheckError::EmptySample));
        assert_eq!(coefficient_of_variation(&[]), Err(RandCheckError::EmptySample));
        assert_eq!(
            SampleStatistics::from_sample(&[]),
            Err(RandCheckError::EmptySample)
        );
    }

    #[test]
    fn test_zero_mean_flagged() {
        assert_eq!(coefficient_of_variation(&[0, 0, 0]), Err(RandCheckError::ZeroMean));
        let stats = SampleStatistics::from_sample(&[0, 0]).unwrap();
        assert_eq!(stats.cv(), Err(RandCheckError::ZeroMean));
    }

    #[test]
    fn test_uniform_reference() {
        let reference = UniformReference::for_range(10_000).unwrap();
        assert_eq!(reference.mean, 5000.0);
        assert!((reference.deviation - 2887.0400).abs() < 1e-3);
        assert!((reference.cv - 0.57741).abs() < 1e-4);
        assert_eq!(
            UniformReference::for_range(1),
            Err(RandCheckError::InvalidRange)
        );
    }

    #[test]
    fn test_homogeneity() {
        let reference = UniformReference::for_range(10).unwrap();
        let tight = SampleStatistics::from_sample(&[4, 5, 6]).unwrap();
        let spread = SampleStatistics::from_sample(&[0, 0, 0, 9]).unwrap();
        let zero = SampleStatistics::from_sample(&[0]).unwrap();
        assert!(tight.is_homogeneous(&reference));
        assert!(!spread.is_homogeneous(&reference));
        assert!(!zero.is_homogeneous(&reference));
        assert_eq!(count_homogeneous(&[tight, spread, zero], &reference), 1);
    }
}
