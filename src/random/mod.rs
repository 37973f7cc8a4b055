//! Random source subsystem for randcheck.
//!
//! Every random draw made by the generators (seeds, register lengths,
//! register bits, tap distances) flows through a [`RandomSource`], so the
//! same generator code runs system-seeded in production and fully
//! reproducible in tests.

pub mod source;

pub use source::{RandomSource, ScriptedSource, StdSource};
