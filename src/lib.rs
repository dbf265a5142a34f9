//! # Vectorized-Dot
//!
//! Computes the dot product of two equal-length vectors twice, once with a
//! batch reduction and once with an explicit scalar loop, and times both.

pub mod config;
pub mod error;
pub mod math;
pub mod random;
pub mod utils;

/// Re-export tui from utils
pub use utils::tui;

/// Re-export run_scenarios from utils::runner
pub use utils::runner::run_scenarios;

pub use error::{Error, Result};

/// Re-export commonly used items
pub mod prelude {
    pub use crate::config::{Config, Scenario};
    pub use crate::error::{Error, Result};
    pub use crate::math::dot_product::{
        dot_product_scalar_loop, dot_product_vectorized, timed, Measurement,
    };
    pub use crate::random::{UniformSource, VectorSource};
    pub use crate::utils::{Clock, ConsoleSink, MonotonicClock, OutputSink};
}
