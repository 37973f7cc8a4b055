//! Regression tests for the Tausworthe tap-distance search.
//!
//! The search starts at a drawn `r` in `[1, q-1]` and increments while
//! `q % r == 0`. Left unbounded it would reach `r == q`, where `q % q == 0`
//! holds forever. These tests pin the bounded search: it stops below `q`,
//! picks the first non-divisor, and reports `DegenerateTapSearch` instead
//! of looping when no non-divisor exists. Register bounds that could draw
//! such a length are refused when the generator is built.

use randcheck::error::RandCheckError;
use randcheck::random::{ScriptedSource, StdSource};
use randcheck::TauswortheGenerator;

/// Register lengths whose tap search has to skip at least one divisor.
const COMPOSITE_LENGTHS: [u64; 3] = [14, 16, 18];

/// Script: register length `q`, `q` register bits, starting tap `start`.
fn script(q: u64, start: u64) -> ScriptedSource {
    let mut values = vec![q];
    values.extend((0..q).map(|i| i % 2));
    values.push(start);
    ScriptedSource::new(values)
}

// ═══════════════════════════════════════════════════════════════════════
// Bounded search terminates for every starting tap
// ═══════════════════════════════════════════════════════════════════════

/// Every starting tap in `[1, q-1]` for the default register lengths
/// produces a full sequence.
#[test]
fn tap_search_terminates_for_all_starts() {
    let generator = TauswortheGenerator::new();
    for q in 14..=18u64 {
        for start in 1..q {
            let mut src = script(q, start);
            let seq = generator.generate(10_000, 50, &mut src).unwrap();
            assert_eq!(seq.len(), 50, "q={} start={}", q, start);
            assert!(seq.iter().all(|&v| v < 10_000));
        }
    }
}

/// Starting on a divisor and on the following non-divisor lands on the same
/// tap, so the two runs produce identical output.
#[test]
fn tap_search_skips_divisor_to_next_tap() {
    let generator = TauswortheGenerator::new();
    for q in COMPOSITE_LENGTHS {
        let divisor = (2..q).find(|d| q % d == 0 && q % (d + 1) != 0).unwrap();
        let from_divisor = generator.generate(10_000, 40, &mut script(q, divisor)).unwrap();
        let from_next = generator
            .generate(10_000, 40, &mut script(q, divisor + 1))
            .unwrap();
        assert_eq!(from_divisor, from_next, "q={} divisor={}", q, divisor);
    }
}

/// The last candidate `q - 1` never divides `q > 2`, so starting there
/// is always accepted.
#[test]
fn tap_search_accepts_last_candidate() {
    let generator = TauswortheGenerator::new();
    for q in 14..=18u64 {
        let seq = generator.generate(1000, 20, &mut script(q, q - 1)).unwrap();
        assert_eq!(seq.len(), 20);
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Degenerate register length
// ═══════════════════════════════════════════════════════════════════════

/// `q = 2` only offers `r = 1`, which divides 2. Bounds admitting it are
/// refused up front, so no draw is ever made for such a generator.
#[test]
fn tap_search_degenerate_length_reports_error() {
    for max_len in [2, 3, 18, 62] {
        assert_eq!(
            TauswortheGenerator::with_register_bounds(2, max_len),
            Err(RandCheckError::DegenerateTapSearch),
            "max_len={}",
            max_len
        );
    }
}

/// `q = 3` is the smallest length with a valid tap.
#[test]
fn tap_search_smallest_valid_length() {
    let generator = TauswortheGenerator::with_register_bounds(3, 3).unwrap();
    let mut src = StdSource::with_seed(1);
    let seq = generator.generate(8, 100, &mut src).unwrap();
    assert_eq!(seq.len(), 100);
    assert!(seq.iter().all(|&v| v < 8));
}
