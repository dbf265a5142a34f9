//! # Dot Product Algorithm
//!
//! The dot product (also known as scalar product) computes the sum of products
//! of corresponding elements in two vectors:
//!
//! `dot(a, b) = Σ(a[i] * b[i])`
//!
//! ## Strategies
//!
//! - **Vectorized**: a batch reduction over the contiguous buffers, with
//!   several independent accumulators the compiler maps onto SIMD registers
//! - **Scalar loop**: one accumulator, one element per iteration, in index order
//!
//! Both are pure functions of their inputs. They may disagree in the last few
//! bits because they sum in a different order; [`equivalence_tolerance`]
//! bounds how far apart they are allowed to be.

pub mod bench;
pub mod code;
pub mod test;

pub use bench::{timed, Measurement};
pub use code::*;

use crate::random::{UniformSource, VectorSource};

/// Sizes exercised by [`verify`]: empty, below one lane block, around the
/// block boundary, and unaligned large sizes.
const VERIFY_SIZES: &[usize] = &[0, 1, 2, 3, 7, 8, 9, 15, 16, 17, 1023, 4096, 100_003];

/// Seed used by [`verify`] so failures are reproducible
const VERIFY_SEED: u64 = 0x5eed_d07;

/// Relative rounding allowance per term, independent of the input length
pub const EQUIVALENCE_EPS: f64 = 1e-12;

/// Largest difference allowed between two summation orders of `a · b`:
/// `EQUIVALENCE_EPS * n * max|a[i] * b[i]|`.
pub fn equivalence_tolerance(a: &[f64], b: &[f64]) -> f64 {
    let n = a.len().min(b.len()) as f64;
    let max_term = a
        .iter()
        .zip(b)
        .map(|(x, y)| (x * y).abs())
        .fold(0.0, f64::max);
    EQUIVALENCE_EPS * n * max_term
}

/// Check one pair of vectors: every variant against the scalar reference.
pub fn verify_inputs(a: &[f64], b: &[f64]) -> Result<(), String> {
    let variants = available_variants();
    let reference = variants
        .iter()
        .find(|v| v.name == REFERENCE_VARIANT)
        .ok_or("No 'scalar_loop' variant found for reference")?;

    let expected = (reference.function)(a, b).map_err(|e| e.to_string())?;
    let tolerance = equivalence_tolerance(a, b);

    for variant in &variants {
        if variant.name == REFERENCE_VARIANT {
            continue;
        }

        let result = (variant.function)(a, b).map_err(|e| e.to_string())?;
        let diff = (result - expected).abs();

        // No reordering is possible with two terms or fewer
        let exact = a.len() <= 2;
        if (exact && result.to_bits() != expected.to_bits()) || diff > tolerance {
            return Err(format!(
                "Variant '{}' failed verification at n = {}. Expected {}, got {}, diff {} (tolerance {})",
                variant.name,
                a.len(),
                expected,
                result,
                diff,
                tolerance
            ));
        }
    }

    Ok(())
}

/// Verify correctness of all variants against the reference on seeded data.
pub fn verify() -> Result<(), String> {
    let mut source = UniformSource::seeded(VERIFY_SEED);
    for &n in VERIFY_SIZES {
        let (a, b) = source.generate(n);
        verify_inputs(&a, &b)?;
    }
    Ok(())
}
