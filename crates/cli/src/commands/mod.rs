//! Report commands and their shared output plumbing.

pub mod accuracy;
pub mod cache;
pub mod fractional;

use std::fmt;
use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::ValueEnum;
use powkit_math::ErrorStats;
use serde::Serialize;

/// How reports are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Aligned human-readable table
    Text,
    /// Pretty-printed JSON
    Json,
}

/// One graded algorithm on one dataset.
#[derive(Debug, Clone, Serialize)]
pub struct StatsRow {
    /// Algorithm name
    pub algorithm: &'static str,
    /// Dataset name
    pub dataset: &'static str,
    /// Aggregated error against the reference
    pub stats: ErrorStats,
    /// Documented relative error bound, when the algorithm has one
    pub bound: Option<f64>,
}

impl StatsRow {
    /// Whether the row stays inside its documented bound.
    pub fn within_bound(&self) -> bool {
        self.bound.map_or(true, |bound| self.stats.max_relative() <= bound)
    }
}

/// Table of graded algorithms.
#[derive(Debug, Clone, Serialize)]
pub struct StatsReport {
    /// Report heading
    pub title: &'static str,
    /// Graded rows
    pub rows: Vec<StatsRow>,
}

impl fmt::Display for StatsReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        writeln!(f, "{}", "─".repeat(self.title.len()))?;
        writeln!(
            f,
            "{:<14} {:<10} {:>6} {:>12} {:>12} {:>12} {:>5}",
            "algorithm", "dataset", "count", "max abs", "max rel", "mean rel", "nan"
        )?;
        for row in &self.rows {
            let flag = if row.within_bound() { "" } else { "  (exceeds bound)" };
            writeln!(
                f,
                "{:<14} {:<10} {:>6} {:>12.3e} {:>12.3e} {:>12.3e} {:>5}{}",
                row.algorithm,
                row.dataset,
                row.stats.count(),
                row.stats.max_absolute(),
                row.stats.max_relative(),
                row.stats.mean_relative(),
                row.stats.nan_count(),
                flag
            )?;
        }
        Ok(())
    }
}

/// Writes `report` to stdout in the requested format.
pub fn emit<R: Serialize + fmt::Display>(report: &R, format: OutputFormat) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    match format {
        OutputFormat::Text => {
            write!(out, "{}", report).context("Failed to write text report")?;
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut out, report)
                .context("Failed to serialize JSON report")?;
            writeln!(out).context("Failed to write JSON report")?;
        }
    }
    out.flush().context("Failed to flush stdout")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(max_error: f64, bound: Option<f64>) -> StatsRow {
        let mut stats = ErrorStats::new();
        stats.record(1.0, 1.0 + max_error);
        StatsRow {
            algorithm: "series",
            dataset: "int",
            stats,
            bound,
        }
    }

    #[test]
    fn test_within_bound() {
        assert!(row(1e-8, Some(1e-6)).within_bound());
        assert!(!row(1e-3, Some(1e-6)).within_bound());
        assert!(row(1.0, None).within_bound());
    }

    #[test]
    fn test_text_report_lists_every_row() {
        let report = StatsReport {
            title: "Test",
            rows: vec![row(0.0, None), row(1e-3, Some(1e-6))],
        };
        let text = report.to_string();
        assert_eq!(text.lines().count(), 5);
        assert!(text.contains("exceeds bound"));
    }

    #[test]
    fn test_json_report_shape() {
        let report = StatsReport {
            title: "Test",
            rows: vec![row(0.5, Some(1e-9))],
        };
        let value = serde_json::to_value(&report).expect("serializable");
        assert_eq!(value["rows"][0]["algorithm"], "series");
        assert_eq!(value["rows"][0]["stats"]["count"], 1);
        assert_eq!(value["rows"][0]["bound"], 1e-9);
    }
}
