//! Scalar loop implementation of dot product.
//!
//! This is the naive reference: one accumulator, one element at a time,
//! strictly increasing index order. Its result is reproducible bit for bit
//! and every other variant is checked against it.

use crate::error::{check_shape, Result};

/// Compute the dot product with an explicit index-ordered loop.
///
/// # Arguments
/// * `a` - First vector
/// * `b` - Second vector
///
/// # Errors
/// Returns [`Error::ShapeMismatch`](crate::error::Error::ShapeMismatch) if the
/// vectors have different lengths.
///
/// # Example
/// ```
/// use vectorized_dot::math::dot_product::dot_product_scalar_loop;
///
/// let a = [1.0, 2.0, 3.0];
/// let b = [4.0, 5.0, 6.0];
/// assert_eq!(dot_product_scalar_loop(&a, &b).unwrap(), 32.0);
/// ```
#[allow(clippy::needless_range_loop)]
pub fn dot_product_scalar_loop(a: &[f64], b: &[f64]) -> Result<f64> {
    check_shape(a, b)?;

    let mut sum = 0.0;
    for i in 0..a.len() {
        sum += a[i] * b[i];
    }
    Ok(sum)
}
