//! Absolute and relative error against a trusted reference
//!
//! [`compute_error`] grades a single value; [`ErrorStats`] aggregates many
//! gradings into max and mean figures for reports.
//!
//! # Example
//!
//! ```rust
//! use powkit_math::error_metric::{compute_error, ErrorStats};
//!
//! let metric = compute_error(4.0, 4.000_4);
//! assert!((metric.relative - 1e-4).abs() < 1e-12);
//!
//! let mut stats = ErrorStats::new();
//! stats.record(4.0, 4.000_4);
//! stats.record(0.0, 0.0);
//! assert_eq!(stats.count(), 2);
//! ```

use serde::Serialize;

/// Error of one value against its reference
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ErrorMetric {
    /// `|reference - value|`
    pub absolute: f64,
    /// `absolute / |reference|`, or 0 when the reference is 0
    pub relative: f64,
}

/// Computes the absolute and relative error of `value` against `reference`
///
/// The relative error is defined as zero when `reference == 0` so a zero
/// reference never divides by zero.
#[inline]
pub fn compute_error(reference: f64, value: f64) -> ErrorMetric {
    let absolute = (reference - value).abs();
    let relative = if reference != 0.0 {
        absolute / reference.abs()
    } else {
        0.0
    };
    ErrorMetric { absolute, relative }
}

/// Running max and mean of [`ErrorMetric`]s
///
/// NaN errors (a NaN value or reference) are counted separately and kept out
/// of the max and mean.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct ErrorStats {
    count: usize,
    nan_count: usize,
    max_absolute: f64,
    max_relative: f64,
    sum_absolute: f64,
    sum_relative: f64,
}

impl ErrorStats {
    /// Creates empty statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Grades `value` against `reference` and folds the result in
    pub fn record(&mut self, reference: f64, value: f64) -> ErrorMetric {
        let metric = compute_error(reference, value);
        self.push(metric);
        metric
    }

    /// Folds an already computed metric in
    pub fn push(&mut self, metric: ErrorMetric) {
        self.count += 1;
        if metric.absolute.is_nan() || metric.relative.is_nan() {
            self.nan_count += 1;
            return;
        }
        self.max_absolute = self.max_absolute.max(metric.absolute);
        self.max_relative = self.max_relative.max(metric.relative);
        self.sum_absolute += metric.absolute;
        self.sum_relative += metric.relative;
    }

    /// Combines two sets of statistics
    pub fn merge(&mut self, other: &ErrorStats) {
        self.count += other.count;
        self.nan_count += other.nan_count;
        self.max_absolute = self.max_absolute.max(other.max_absolute);
        self.max_relative = self.max_relative.max(other.max_relative);
        self.sum_absolute += other.sum_absolute;
        self.sum_relative += other.sum_relative;
    }

    /// Number of recorded values, NaN included
    pub fn count(&self) -> usize {
        self.count
    }

    /// Number of recorded values whose error was NaN
    pub fn nan_count(&self) -> usize {
        self.nan_count
    }

    /// Largest absolute error seen
    pub fn max_absolute(&self) -> f64 {
        self.max_absolute
    }

    /// Largest relative error seen
    pub fn max_relative(&self) -> f64 {
        self.max_relative
    }

    /// Mean absolute error over the non-NaN values
    pub fn mean_absolute(&self) -> f64 {
        self.mean(self.sum_absolute)
    }

    /// Mean relative error over the non-NaN values
    pub fn mean_relative(&self) -> f64 {
        self.mean(self.sum_relative)
    }

    fn mean(&self, sum: f64) -> f64 {
        let finite = self.count - self.nan_count;
        if finite == 0 {
            0.0
        } else {
            sum / finite as f64
        }
    }
}
