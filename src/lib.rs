//! Pseudo-random integer generators with a Pearson chi-square uniformity check.
//!
//! randcheck produces integer samples with two generators, computes their
//! sample statistics and decides whether a sample looks uniform and random.
//!
//! # Architecture
//!
//! ```text
//! RandomSource  (seed, register and tap draws; system-seeded or scripted)
//!     ↓
//! linear        (LCG: r = ((k*r + b) mod m) mod range)
//! tausworthe    (BitRegister feedback + neighbour mixing)
//!     ↓ Vec<u64>
//! stats         (mean, population deviation, coefficient of variation)
//! pearson       (Sturges binning + chi-square band + confidence search)
//! ```
//!
//! # Examples
//!
//! Reproducible linear sample and its statistics:
//!
//! ```
//! use randcheck::{linear, stats};
//!
//! let sample = linear::generate(10_000, 100, 1).unwrap();
//! assert_eq!(&sample[..3], &[3132, 5847, 2901]);
//!
//! let triple = stats::SampleStatistics::from_sample(&sample).unwrap();
//! assert!(triple.mean > 0.0);
//! ```
//!
//! Tausworthe sample classified by the Pearson test:
//!
//! ```
//! use randcheck::{classify, tausworthe, StdSource};
//!
//! let mut source = StdSource::with_seed(7);
//! let sample = tausworthe::generate(10_000, 1000, &mut source).unwrap();
//! assert!(sample.iter().all(|&v| v < 10_000));
//!
//! let verdict = classify(&sample, 10_000.0).unwrap();
//! println!("{}", verdict);
//! ```

#![deny(clippy::all)]

pub mod error;
pub mod generators;
pub mod pearson;
pub mod random;
pub mod stats;

pub use error::RandCheckError;
pub use generators::{linear, tausworthe, TauswortheGenerator};
pub use pearson::{classify, Classification, PearsonConfig, PearsonOutcome, PearsonTest};
pub use random::{RandomSource, ScriptedSource, StdSource};
pub use stats::{SampleStatistics, UniformReference};
