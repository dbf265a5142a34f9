//! Scenario execution.
//!
//! Each scenario generates its inputs once, times every strategy against the
//! same borrowed vectors, and only then hands the measurements to the sink.
//! Output formatting therefore never lands inside a measured interval.

use crate::config::{Config, Scenario};
use crate::error::Result;
use crate::math::dot_product::{self, timed, Measurement, REFERENCE_VARIANT};
use crate::random::VectorSource;
use crate::utils::clock::Clock;
use crate::utils::tui::OutputSink;

/// Measurement of one variant within a scenario
#[derive(Clone, Debug)]
pub struct VariantMeasurement {
    pub name: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    pub measurement: Measurement,
}

/// Everything measured for one scenario
#[derive(Clone, Debug)]
pub struct ScenarioReport {
    pub scenario: Scenario,
    pub measurements: Vec<VariantMeasurement>,
}

impl ScenarioReport {
    /// Measurement of the variant called `name`
    pub fn get(&self, name: &str) -> Option<&Measurement> {
        self.measurements
            .iter()
            .find(|m| m.name == name)
            .map(|m| &m.measurement)
    }

    /// How many times faster the batch reduction ran than the scalar loop.
    ///
    /// `None` when a variant is missing or the batch reduction took no
    /// measurable time.
    pub fn speedup(&self) -> Option<f64> {
        let vectorized = self.get("vectorized")?;
        let scalar = self.get(REFERENCE_VARIANT)?;
        let v_ms = vectorized.elapsed_ms();
        if v_ms <= 0.0 {
            return None;
        }
        Some(scalar.elapsed_ms() / v_ms)
    }

    /// Absolute difference between the two strategies' results
    pub fn result_difference(&self) -> Option<f64> {
        let vectorized = self.get("vectorized")?;
        let scalar = self.get(REFERENCE_VARIANT)?;
        Some((vectorized.result - scalar.result).abs())
    }
}

/// Run one scenario: generate, time every variant, then report.
pub fn run_scenario<S, C, O>(
    scenario: Scenario,
    source: &mut S,
    clock: &C,
    sink: &mut O,
) -> Result<ScenarioReport>
where
    S: VectorSource + ?Sized,
    C: Clock + ?Sized,
    O: OutputSink + ?Sized,
{
    let (a, b) = source.generate(scenario.size);

    let mut measurements = Vec::new();
    for variant in dot_product::available_variants() {
        let measurement = timed(clock, variant.function, &a, &b)?;
        measurements.push(VariantMeasurement {
            name: variant.name,
            label: variant.label,
            description: variant.description,
            measurement,
        });
    }

    let report = ScenarioReport {
        scenario,
        measurements,
    };

    sink.scenario_start(&report)?;
    for m in &report.measurements {
        log::debug!(
            "{} on n = {}: {} in {:?}",
            m.name,
            scenario.size,
            m.measurement.result,
            m.measurement.elapsed
        );
        sink.report(m.label, m.measurement.result, m.measurement.elapsed_ms())?;
    }
    sink.scenario_end(&report)?;

    match report.speedup() {
        Some(s) if s < 1.0 => log::warn!(
            "scenario {}: batch reduction was slower than the scalar loop ({:.2}x)",
            scenario.name,
            s
        ),
        Some(s) => log::info!("scenario {} done, speedup {:.2}x", scenario.name, s),
        None => log::info!("scenario {} done", scenario.name),
    }

    Ok(report)
}

/// Run every configured scenario in order, stopping at the first error.
pub fn run_scenarios<S, C, O>(
    config: &Config,
    source: &mut S,
    clock: &C,
    sink: &mut O,
) -> Result<Vec<ScenarioReport>>
where
    S: VectorSource + ?Sized,
    C: Clock + ?Sized,
    O: OutputSink + ?Sized,
{
    config
        .scenarios
        .iter()
        .map(|&scenario| run_scenario(scenario, source, clock, sink))
        .collect()
}
