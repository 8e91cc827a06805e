//! Accuracy report for the integer-exponent strategies.

use anyhow::{bail, Result};
use clap::Args;
use powkit_math::datasets::{
    ERROR_GRID_BASES, ERROR_GRID_EXPONENTS, FLOAT32_BASES, FLOAT_BASES, INT_BASES, INT_EXPONENTS,
};
use powkit_math::pow::{pow_fast_int, pow_hierarchical, pow_reference, pow_ultra_fast};
use powkit_math::{Arithmetic, ErrorStats, RealPromote};
use tracing::{debug, info};

use super::{emit, OutputFormat, StatsReport, StatsRow};

/// Relative bound for float multiplication chains against the reference
const FLOAT_BOUND: f64 = 1e-12;

/// Relative bound for single-precision results against the f64 reference
const F32_BOUND: f64 = 1e-5;

/// Arguments for `powkit accuracy`.
#[derive(Args, Debug)]
pub struct AccuracyArgs {
    /// Exit with an error if any algorithm exceeds its bound
    #[arg(long)]
    strict: bool,
}

/// Execute the accuracy report.
pub fn execute(args: &AccuracyArgs, format: OutputFormat) -> Result<()> {
    let report = build_report();
    emit(&report, format)?;

    let failing: Vec<_> = report
        .rows
        .iter()
        .filter(|row| !row.within_bound())
        .map(|row| format!("{}/{}", row.algorithm, row.dataset))
        .collect();
    if args.strict && !failing.is_empty() {
        bail!("accuracy bound exceeded by {}", failing.join(", "));
    }
    Ok(())
}

/// Grades every strategy on every dataset.
pub fn build_report() -> StatsReport {
    let mut rows = Vec::new();
    rows.extend(integer_rows("int", &INT_BASES, &INT_EXPONENTS, Some(0.0)));
    rows.extend(integer_rows("float", &FLOAT_BASES, &INT_EXPONENTS, Some(FLOAT_BOUND)));
    rows.extend(integer_rows("f32", &FLOAT32_BASES, &INT_EXPONENTS, Some(F32_BOUND)));
    rows.extend(grid_rows());
    StatsReport {
        title: "Integer-exponent accuracy against the libm reference",
        rows,
    }
}

fn integer_rows<T>(
    dataset: &'static str,
    bases: &[T],
    exponents: &[u32],
    bound: Option<f64>,
) -> Vec<StatsRow>
where
    T: Arithmetic + RealPromote<u32>,
{
    let strategies: [(&'static str, fn(T, u32) -> T); 3] = [
        ("fast_int", pow_fast_int::<T>),
        ("hierarchical", pow_hierarchical::<T>),
        ("ultra_fast", pow_ultra_fast::<T>),
    ];

    strategies
        .iter()
        .map(|&(algorithm, strategy)| {
            let mut stats = ErrorStats::new();
            for &base in bases {
                for &exponent in exponents {
                    let reference = pow_reference(base, exponent).to_f64();
                    let metric = stats.record(reference, strategy(base, exponent).to_f64());
                    debug!(algorithm, ?base, exponent, relative = metric.relative, "graded");
                }
            }
            info!(
                algorithm,
                dataset,
                max_relative = stats.max_relative(),
                "dataset graded"
            );
            StatsRow {
                algorithm,
                dataset,
                stats,
                bound,
            }
        })
        .collect()
}

/// The error-analysis grid mixes fractional and integral exponents; the
/// integer strategies are graded on the integral ones only, and the reference
/// itself is cross-checked against the platform `powf`.
fn grid_rows() -> Vec<StatsRow> {
    let integral: Vec<u32> = ERROR_GRID_EXPONENTS
        .iter()
        .filter(|exponent| exponent.fract() == 0.0)
        .map(|&exponent| exponent as u32)
        .collect();
    let mut rows = integer_rows("grid", &ERROR_GRID_BASES, &integral, Some(FLOAT_BOUND));

    let mut stats = ErrorStats::new();
    for &base in &ERROR_GRID_BASES {
        for &exponent in &ERROR_GRID_EXPONENTS {
            let reference: f64 = pow_reference(base, exponent);
            stats.record(base.powf(exponent), reference);
        }
    }
    rows.push(StatsRow {
        algorithm: "reference",
        dataset: "grid",
        stats,
        bound: Some(FLOAT_BOUND),
    });
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_covers_every_strategy_and_dataset() {
        let report = build_report();
        // three strategies over four datasets, plus the reference cross-check
        assert_eq!(report.rows.len(), 13);
        for dataset in ["int", "float", "f32", "grid"] {
            let rows = report
                .rows
                .iter()
                .filter(|row| row.dataset == dataset)
                .count();
            assert_eq!(rows, if dataset == "grid" { 4 } else { 3 });
        }
    }

    #[test]
    fn test_all_rows_within_bound() {
        let report = build_report();
        for row in &report.rows {
            assert!(
                row.within_bound(),
                "{}/{}: {:.2e}",
                row.algorithm,
                row.dataset,
                row.stats.max_relative()
            );
        }
    }

    #[test]
    fn test_integer_dataset_is_exact() {
        let report = build_report();
        for row in report.rows.iter().filter(|row| row.dataset == "int") {
            assert_eq!(row.stats.max_absolute(), 0.0, "{}", row.algorithm);
            assert_eq!(row.stats.count(), INT_BASES.len() * INT_EXPONENTS.len());
        }
    }

    #[test]
    fn test_grid_uses_integral_exponents_only() {
        let report = build_report();
        let fast = report
            .rows
            .iter()
            .find(|row| row.dataset == "grid" && row.algorithm == "fast_int")
            .expect("grid row");
        assert_eq!(fast.stats.count(), ERROR_GRID_BASES.len() * 2);
    }
}
