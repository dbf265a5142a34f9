//! Vectorized (batch reduction) implementation of dot product.
//!
//! The whole product sequence is reduced in one pass over contiguous
//! buffers. Eight independent accumulators break the add dependency chain,
//! which lets the compiler keep them in SIMD registers (two AVX or four SSE2
//! lanes of f64) without any intrinsics. Summation order differs from the
//! scalar loop, so results may differ from it in the last few bits.

use crate::error::{check_shape, Result};

/// Number of independent accumulators.
pub const LANES: usize = 8;

/// Batch sum of elementwise products.
///
/// Callers must check that both slices have the same length. Inputs
/// shorter than [`LANES`] take only the sequential tail and are therefore
/// summed exactly like the scalar loop.
#[inline]
pub fn batch_dot_product(a: &[f64], b: &[f64]) -> f64 {
    let a_chunks = a.chunks_exact(LANES);
    let b_chunks = b.chunks_exact(LANES);
    let a_tail = a_chunks.remainder();
    let b_tail = b_chunks.remainder();

    let mut acc = [0.0f64; LANES];
    for (ca, cb) in a_chunks.zip(b_chunks) {
        for ((sum, x), y) in acc.iter_mut().zip(ca).zip(cb) {
            *sum += x * y;
        }
    }

    // Pairwise fold: 8 -> 4 -> 2 -> 1
    let s0 = (acc[0] + acc[4]) + (acc[2] + acc[6]);
    let s1 = (acc[1] + acc[5]) + (acc[3] + acc[7]);
    let lanes = s0 + s1;

    let tail = a_tail
        .iter()
        .zip(b_tail)
        .fold(0.0, |sum, (x, y)| sum + x * y);

    lanes + tail
}

/// Compute the dot product with the batch reduction primitive.
///
/// # Arguments
/// * `a` - First vector
/// * `b` - Second vector
///
/// # Errors
/// Returns [`Error::ShapeMismatch`](crate::error::Error::ShapeMismatch) if the
/// vectors have different lengths. No partial sum is computed in that case.
///
/// # Example
/// ```
/// use vectorized_dot::math::dot_product::dot_product_vectorized;
///
/// let a = [1.0, 2.0, 3.0];
/// let b = [4.0, 5.0, 6.0];
/// assert_eq!(dot_product_vectorized(&a, &b).unwrap(), 32.0);
/// ```
pub fn dot_product_vectorized(a: &[f64], b: &[f64]) -> Result<f64> {
    check_shape(a, b)?;
    Ok(batch_dot_product(a, b))
}
