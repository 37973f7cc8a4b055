//! Pearson chi-square goodness-of-fit test for uniformity and randomness.
//!
//! A sample of `n` values is split into `k = 1 + floor(log2(n))` equal
//! intervals (Sturges' rule) over `[0, upper + epsilon)`. The statistic
//!
//! ```text
//! stat = (sum(nu[i]^2 / p)) / n - n,    p = 1 / k
//! ```
//!
//! is compared against the chi-square quantiles `Q(0.10)` and `Q(0.90)` with
//! `k - 1` degrees of freedom. Below the band the sample is too even to be
//! random, above it the sample is not uniform. Inside the band the smallest
//! grid probability whose quantile covers the statistic is reported as the
//! confidence.
//!
//! `Q(p) >= stat` holds exactly when `p >= CDF(stat)`, so decisions are made
//! on the CDF of the statistic. The quantiles are only reported.

use std::fmt;

use log::debug;
use statrs::distribution::{ChiSquared, Continuous, ContinuousCDF};

use crate::error::RandCheckError;

/// Lower edge of the acceptance band.
pub const DEFAULT_LOWER_BAND: f64 = 0.10;

/// Upper edge of the acceptance band.
pub const DEFAULT_UPPER_BAND: f64 = 0.90;

/// Step of the confidence search inside the band.
pub const DEFAULT_SEARCH_STEP: f64 = 0.01;

/// Margin added to the domain upper bound so the maximum value lands inside the last bin.
pub const DEFAULT_EPSILON: f64 = 0.01;

/// Constants driving the Pearson test.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PearsonConfig {
    pub lower_band: f64,
    pub upper_band: f64,
    pub search_step: f64,
    pub epsilon: f64,
}

impl Default for PearsonConfig {
    fn default() -> Self {
        PearsonConfig {
            lower_band: DEFAULT_LOWER_BAND,
            upper_band: DEFAULT_UPPER_BAND,
            search_step: DEFAULT_SEARCH_STEP,
            epsilon: DEFAULT_EPSILON,
        }
    }
}

/// Verdict of the Pearson test for one sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Classification {
    /// Statistic below the lower band: the sample is too even to look random.
    InsufficientlyRandom,
    /// Statistic above the upper band: the sample is not uniform.
    InsufficientlyUniform,
    /// Statistic inside the band, with the confidence found by the search.
    UniformAndRandom { confidence: f64 },
}

impl Classification {
    /// Returns the confidence level for [`Classification::UniformAndRandom`].
    pub fn confidence(&self) -> Option<f64> {
        match self {
            Classification::UniformAndRandom { confidence } => Some(*confidence),
            _ => None,
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Classification::InsufficientlyRandom => write!(f, "sample is not random enough"),
            Classification::InsufficientlyUniform => write!(f, "sample is not uniform enough"),
            Classification::UniformAndRandom { confidence } => write!(
                f,
                "sample is uniform and random with probability {:.2}",
                confidence
            ),
        }
    }
}

/// Bin borders and observed counts of a sample.
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    /// `k + 1` strictly increasing borders from `0` to `upper + epsilon`.
    pub borders: Vec<f64>,
    /// Number of sample values in `[borders[i], borders[i + 1])`.
    pub counts: Vec<u64>,
}

impl Histogram {
    /// Bins `sample` into `bins` equal intervals over `[0, top)`.
    ///
    /// Each value goes to the first interval containing it; values outside
    /// every interval are not counted.
    pub fn build(sample: &[u64], bins: usize, top: f64) -> Self {
        let borders = borders(bins, top);
        let mut counts = vec![0u64; bins];
        for &value in sample {
            let x = value as f64;
            if let Some(i) = borders.windows(2).position(|w| w[0] <= x && x < w[1]) {
                counts[i] += 1;
            }
        }
        Histogram { borders, counts }
    }

    /// Number of bins `k`.
    pub fn bins(&self) -> usize {
        self.counts.len()
    }

    /// Total number of counted values.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }
}

/// Full result of one Pearson test run.
#[derive(Debug, Clone, PartialEq)]
pub struct PearsonOutcome {
    pub histogram: Histogram,
    pub statistic: f64,
    /// `Q(lower_band, k - 1)`.
    pub lower_threshold: f64,
    /// `Q(upper_band, k - 1)`.
    pub upper_threshold: f64,
    pub classification: Classification,
}

/// Number of bins for a sample of `n` values: `1 + floor(log2(n))`.
///
/// Returns 0 for an empty sample.
pub fn bin_count(n: usize) -> usize {
    if n == 0 {
        return 0;
    }
    1 + n.ilog2() as usize
}

/// `bins + 1` evenly spaced borders from `0` to `top`, the last one exactly `top`.
pub fn borders(bins: usize, top: f64) -> Vec<f64> {
    let width = top / bins as f64;
    (0..=bins)
        .map(|i| if i == bins { top } else { i as f64 * width })
        .collect()
}

/// Pearson chi-square tester.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PearsonTest {
    config: PearsonConfig,
}

impl PearsonTest {
    /// Creates a tester from `config`.
    ///
    /// # Errors
    /// Returns [`RandCheckError::InvalidPearsonConfig`] unless
    /// `0 < lower_band < upper_band < 1`, `search_step > 0` and `epsilon > 0`.
    pub fn new(config: PearsonConfig) -> Result<Self, RandCheckError> {
        let PearsonConfig {
            lower_band,
            upper_band,
            search_step,
            epsilon,
        } = config;
        let bands_ok = lower_band > 0.0 && lower_band < upper_band && upper_band < 1.0;
        let step_ok = search_step.is_finite() && search_step > 0.0;
        let epsilon_ok = epsilon.is_finite() && epsilon > 0.0;
        if !(bands_ok && step_ok && epsilon_ok) {
            return Err(RandCheckError::InvalidPearsonConfig);
        }
        Ok(PearsonTest { config })
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &PearsonConfig {
        &self.config
    }

    /// Runs the test on `sample` with values expected in `[0, domain_upper_bound]`.
    ///
    /// # Errors
    /// - [`RandCheckError::SampleTooSmall`] if `sample.len() < 2`.
    /// - [`RandCheckError::InvalidDomainBound`] if the bound is negative or not finite.
    pub fn evaluate(
        &self,
        sample: &[u64],
        domain_upper_bound: f64,
    ) -> Result<PearsonOutcome, RandCheckError> {
        let n = sample.len();
        if n < 2 {
            return Err(RandCheckError::SampleTooSmall);
        }
        if !domain_upper_bound.is_finite() || domain_upper_bound < 0.0 {
            return Err(RandCheckError::InvalidDomainBound);
        }

        let k = bin_count(n);
        let histogram = Histogram::build(sample, k, domain_upper_bound + self.config.epsilon);
        let statistic = statistic(&histogram.counts, n);
        let dist = ChiSquared::new((k - 1) as f64).map_err(|_| RandCheckError::InvalidDistribution)?;
        let lower_threshold = quantile(&dist, self.config.lower_band);
        let upper_threshold = quantile(&dist, self.config.upper_band);
        let classification = self.decide(dist.cdf(statistic));
        debug!(
            "pearson n={} k={} stat={:.4} band=[{:.4}, {:.4}] -> {:?}",
            n, k, statistic, lower_threshold, upper_threshold, classification
        );

        Ok(PearsonOutcome {
            histogram,
            statistic,
            lower_threshold,
            upper_threshold,
            classification,
        })
    }

    /// Classifies a precomputed statistic against `k - 1 = dof` degrees of freedom.
    ///
    /// # Errors
    /// Returns [`RandCheckError::InvalidDistribution`] if `dof` is zero.
    pub fn classify_statistic(
        &self,
        statistic: f64,
        dof: usize,
    ) -> Result<Classification, RandCheckError> {
        if dof == 0 {
            return Err(RandCheckError::InvalidDistribution);
        }
        let dist = ChiSquared::new(dof as f64).map_err(|_| RandCheckError::InvalidDistribution)?;
        Ok(self.decide(dist.cdf(statistic)))
    }

    /// Decides on `cdf = CDF(stat)`.
    fn decide(&self, cdf: f64) -> Classification {
        if cdf < self.config.lower_band {
            Classification::InsufficientlyRandom
        } else if cdf > self.config.upper_band {
            Classification::InsufficientlyUniform
        } else {
            let confidence = self
                .search_grid()
                .find(|&prob| prob >= cdf)
                .unwrap_or(self.config.upper_band);
            Classification::UniformAndRandom { confidence }
        }
    }

    /// Probabilities `lower, lower + step, ..., upper`.
    ///
    /// Points are counted in whole steps and the last one is exactly the
    /// upper band, so every statistic at or below `Q(upper)` finds a match.
    fn search_grid(&self) -> impl Iterator<Item = f64> {
        let PearsonConfig {
            lower_band,
            upper_band,
            search_step,
            ..
        } = self.config;
        let steps = ((upper_band - lower_band) / search_step).round() as usize;
        (0..=steps).map(move |i| {
            if i == steps {
                upper_band
            } else {
                (lower_band + i as f64 * search_step).min(upper_band)
            }
        })
    }
}

/// Chi-square quantile `Q(p)`.
///
/// statrs inverts the CDF by a short bisection; a few Newton steps on the
/// CDF bring the result to full precision.
fn quantile(dist: &ChiSquared, p: f64) -> f64 {
    let mut x = dist.inverse_cdf(p);
    for _ in 0..4 {
        let density = dist.pdf(x);
        let usable = density.is_finite() && density > 0.0;
        if !usable {
            break;
        }
        x = (x - (dist.cdf(x) - p) / density).max(0.0);
    }
    x
}

/// Pearson statistic `(sum(nu[i]^2 / p)) / n - n` with `p = 1 / k`.
pub fn statistic(counts: &[u64], n: usize) -> f64 {
    let p = 1.0 / counts.len() as f64;
    let n = n as f64;
    counts.iter().map(|&nu| (nu as f64).powi(2) / p).sum::<f64>() / n - n
}

/// Classifies `sample` with the default configuration.
///
/// # Errors
/// See [`PearsonTest::evaluate`].
pub fn classify(sample: &[u64], domain_upper_bound: f64) -> Result<Classification, RandCheckError> {
    PearsonTest::default()
        .evaluate(sample, domain_upper_bound)
        .map(|outcome| outcome.classification)
}
