//! Dot product implementations.
//!
//! This module contains both strategies of the dot product algorithm.

mod scalar_loop;
mod vectorized;

pub use scalar_loop::dot_product_scalar_loop;
pub use vectorized::{batch_dot_product, dot_product_vectorized, LANES};

use crate::error::Result;
use crate::utils::VariantInfo;

/// Type alias for dot product function signature
pub type DotProductFn = fn(&[f64], &[f64]) -> Result<f64>;

/// Name of the reference variant every other variant is compared against
pub const REFERENCE_VARIANT: &str = "scalar_loop";

/// Get all available variants, batch reduction first
pub fn available_variants() -> Vec<VariantInfo<DotProductFn>> {
    vec![
        VariantInfo {
            name: "vectorized",
            label: "Vectorized",
            description: "Batch reduction over contiguous buffers (8 lane accumulators)",
            function: dot_product_vectorized,
        },
        VariantInfo {
            name: REFERENCE_VARIANT,
            label: "Non-Vectorized",
            description: "Explicit index-by-index accumulation (reference)",
            function: dot_product_scalar_loop,
        },
    ]
}
