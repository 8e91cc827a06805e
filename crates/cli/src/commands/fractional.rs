//! Accuracy report for the `x^(2/3)` approximations.

use anyhow::{bail, Result};
use clap::Args;
use powkit_math::datasets::{FRACTIONAL_FLOAT_BASES, FRACTIONAL_INT_BASES, TWO_THIRDS};
use powkit_math::pow::{
    pow_2_3_cbrt, pow_2_3_cbrt_f32, pow_2_3_exp_log, pow_2_3_exp_log_f32, pow_2_3_series,
    pow_2_3_series_f32, pow_reference,
};
use powkit_math::ErrorStats;
use tracing::{info, warn};

use super::{emit, OutputFormat, StatsReport, StatsRow};

/// Documented bound for the cube-root and exp/log approximations
const PRECISE_BOUND: f64 = 1e-9;

/// Documented bound for the binomial series
const SERIES_BOUND: f64 = 1e-6;

/// Bound for every single-precision variant
const F32_BOUND: f64 = 1e-5;

/// Arguments for `powkit fractional`.
#[derive(Args, Debug)]
pub struct FractionalArgs {
    /// Extra bases to grade as a `custom` dataset (repeatable)
    #[arg(short, long = "base", value_name = "X", allow_negative_numbers = true)]
    bases: Vec<f64>,

    /// Exit with an error if any approximation exceeds its bound
    #[arg(long)]
    strict: bool,
}

/// Execute the fractional accuracy report.
pub fn execute(args: &FractionalArgs, format: OutputFormat) -> Result<()> {
    let report = build_report(&args.bases);
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

/// Grades the three approximations on the fixed datasets and `custom_bases`.
pub fn build_report(custom_bases: &[f64]) -> StatsReport {
    let int_bases: Vec<f64> = FRACTIONAL_INT_BASES.iter().map(|&base| f64::from(base)).collect();

    let mut rows = f64_rows("int", &int_bases);
    rows.extend(f64_rows("float", &FRACTIONAL_FLOAT_BASES));
    rows.extend(f32_rows(&FRACTIONAL_FLOAT_BASES));
    if !custom_bases.is_empty() {
        let negative = custom_bases.iter().filter(|base| **base < 0.0).count();
        if negative > 0 {
            warn!(negative, "negative bases have no real x^(2/3) and grade as NaN");
        }
        rows.extend(f64_rows("custom", custom_bases));
    }

    StatsReport {
        title: "x^(2/3) accuracy against the libm reference",
        rows,
    }
}

fn f64_rows(dataset: &'static str, bases: &[f64]) -> Vec<StatsRow> {
    let approximations: [(&'static str, fn(f64) -> f64, f64); 3] = [
        ("cbrt", pow_2_3_cbrt::<f64>, PRECISE_BOUND),
        ("exp_log", pow_2_3_exp_log::<f64>, PRECISE_BOUND),
        ("series", pow_2_3_series::<f64>, SERIES_BOUND),
    ];

    approximations
        .iter()
        .map(|&(algorithm, approximation, bound)| {
            let mut stats = ErrorStats::new();
            for &base in bases {
                let reference: f64 = pow_reference(base, TWO_THIRDS);
                stats.record(reference, approximation(base));
            }
            info!(algorithm, dataset, max_relative = stats.max_relative(), "dataset graded");
            StatsRow {
                algorithm,
                dataset,
                stats,
                bound: Some(bound),
            }
        })
        .collect()
}

fn f32_rows(bases: &[f64]) -> Vec<StatsRow> {
    let approximations: [(&'static str, fn(f32) -> f32); 3] = [
        ("cbrt", pow_2_3_cbrt_f32),
        ("exp_log", pow_2_3_exp_log_f32),
        ("series", pow_2_3_series_f32),
    ];

    approximations
        .iter()
        .map(|&(algorithm, approximation)| {
            let mut stats = ErrorStats::new();
            for &base in bases {
                let base = base as f32;
                let reference: f32 = pow_reference(base, TWO_THIRDS as f32);
                stats.record(f64::from(reference), f64::from(approximation(base)));
            }
            info!(
                algorithm,
                dataset = "f32",
                max_relative = stats.max_relative(),
                "dataset graded"
            );
            StatsRow {
                algorithm,
                dataset: "f32",
                stats,
                bound: Some(F32_BOUND),
            }
        })
        .collect()
}
