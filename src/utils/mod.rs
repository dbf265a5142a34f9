//! Utility modules for timing, reporting and scenario execution.

pub mod clock;
pub mod runner;
pub mod tui;

// Re-export commonly used items
pub use clock::{Clock, MonotonicClock};
pub use runner::{run_scenario, run_scenarios, ScenarioReport};
pub use tui::{ConsoleSink, OutputSink};

/// Information about an algorithm implementation variant.
/// Generic over F which is the function signature.
pub struct VariantInfo<F> {
    /// Unique identifier for this variant (e.g., "vectorized", "scalar_loop")
    pub name: &'static str,
    /// Label printed in front of its measurement
    pub label: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// The specific implementation function
    pub function: F,
}
