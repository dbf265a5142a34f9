//! Text User Interface (TUI) utilities.
//!
//! Handles formatted output for the CLI. Nothing in here runs while a
//! strategy is being timed; the runner hands over finished measurements.

use crate::utils::runner::ScenarioReport;
use std::io::{self, Write};
use terminal_size::{terminal_size, Width};

/// Get the current terminal width, constrained to a reasonable range
fn get_term_width() -> usize {
    if let Some((Width(w), _)) = terminal_size() {
        (w as usize).clamp(40, 200)
    } else {
        80
    }
}

/// Receives finished measurements and turns them into text.
pub trait OutputSink {
    /// Emit one line for one measurement.
    fn report(&mut self, label: &str, value: f64, elapsed_ms: f64) -> io::Result<()>;

    /// Called before the measurements of a scenario are reported.
    fn scenario_start(&mut self, _report: &ScenarioReport) -> io::Result<()> {
        Ok(())
    }

    /// Called after every measurement of a scenario has been reported.
    fn scenario_end(&mut self, _report: &ScenarioReport) -> io::Result<()> {
        Ok(())
    }
}

/// Format a single measurement line
pub fn format_measurement(label: &str, value: f64, elapsed_ms: f64) -> String {
    format!("{}: result = {}, elapsed = {:.3} ms", label, value, elapsed_ms)
}

/// Format the speedup summary of a scenario
pub fn format_summary(report: &ScenarioReport) -> String {
    let speedup = match report.speedup() {
        Some(s) => format!("{:.2}x", s),
        None => "n/a".to_string(),
    };
    let diff = match report.result_difference() {
        Some(d) => format!("{:.3e}", d),
        None => "n/a".to_string(),
    };
    format!(
        "Speedup (vectorized vs. scalar loop): {}, |difference| = {}",
        speedup, diff
    )
}

/// Sink writing human-readable lines to any writer.
pub struct ConsoleSink<W: Write> {
    out: W,
    width: usize,
}

impl ConsoleSink<io::Stdout> {
    /// Sink on standard output, sized to the terminal
    pub fn stdout() -> Self {
        Self::new(io::stdout(), get_term_width().min(80))
    }
}

impl<W: Write> ConsoleSink<W> {
    pub fn new(out: W, width: usize) -> Self {
        Self { out, width }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Print the application header
    pub fn print_header(&mut self) -> io::Result<()> {
        let title = " Vectorized vs. Scalar Dot Product ";
        let inner = self.width.saturating_sub(2).max(title.chars().count());
        let padding = inner.saturating_sub(title.chars().count()) / 2;
        let right_padding = inner.saturating_sub(padding + title.chars().count());

        let border = "═".repeat(inner);

        writeln!(self.out, "╔{}╗", border)?;
        writeln!(
            self.out,
            "║{}{}{}║",
            " ".repeat(padding),
            title,
            " ".repeat(right_padding)
        )?;
        writeln!(self.out, "╚{}╝", border)?;
        writeln!(self.out)
    }
}

impl<W: Write> OutputSink for ConsoleSink<W> {
    fn report(&mut self, label: &str, value: f64, elapsed_ms: f64) -> io::Result<()> {
        writeln!(self.out, "  {}", format_measurement(label, value, elapsed_ms))
    }

    fn scenario_start(&mut self, report: &ScenarioReport) -> io::Result<()> {
        let scenario = &report.scenario;
        writeln!(self.out, "  Scenario: {} (N = {})", scenario.name, scenario.size)?;
        for m in &report.measurements {
            writeln!(self.out, "    {:<16} {}", m.label, m.description)?;
        }
        writeln!(self.out, "  {}", "─".repeat(self.width.saturating_sub(4)))
    }

    fn scenario_end(&mut self, report: &ScenarioReport) -> io::Result<()> {
        writeln!(self.out, "  {}", "─".repeat(self.width.saturating_sub(4)))?;
        writeln!(self.out, "  {}", format_summary(report))?;
        writeln!(self.out)?;
        self.out.flush()
    }
}
