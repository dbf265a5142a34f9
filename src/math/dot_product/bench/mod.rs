//! Timing harness for dot product strategies.
//!
//! Only the strategy call sits between the two clock readings. Input
//! generation, logging and report formatting all happen outside.

use crate::error::Result;
use crate::utils::clock::Clock;
use std::hint::black_box;
use std::time::Duration;

/// Result of one timed strategy invocation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Measurement {
    /// Dot product returned by the strategy
    pub result: f64,
    /// Wall-clock time spent inside the strategy
    pub elapsed: Duration,
}

impl Measurement {
    /// Elapsed time in (fractional) milliseconds.
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1000.0
    }
}

/// Run `strategy` on `a` and `b` once and measure how long it takes.
///
/// A shape mismatch is reported by the strategy before it computes anything
/// and is propagated without a measurement.
#[inline(never)]
pub fn timed<C, F>(clock: &C, strategy: F, a: &[f64], b: &[f64]) -> Result<Measurement>
where
    C: Clock + ?Sized,
    F: Fn(&[f64], &[f64]) -> Result<f64>,
{
    let (a, b) = (black_box(a), black_box(b));

    let start = clock.now();
    let outcome = strategy(a, b);
    let end = clock.now();

    let result = black_box(outcome)?;
    Ok(Measurement {
        result,
        elapsed: end.saturating_sub(start),
    })
}
