//! Test utilities for powkit-math
//!
//! Provides reference helpers, proptest strategies, and assertion helpers
//! shared by the integration tests.

#![allow(dead_code)]

use powkit_math::compute_error;
use proptest::prelude::*;

/// Relative tolerance for comparing float results of differently ordered
/// multiplication chains
pub const FLOAT_CHAIN_TOLERANCE: f64 = 1e-12;

/// Relative error bound for `pow_2_3_cbrt` and `pow_2_3_exp_log`
pub const PRECISE_APPROX_TOLERANCE: f64 = 1e-9;

/// Relative error bound for `pow_2_3_series`
pub const SERIES_APPROX_TOLERANCE: f64 = 1e-6;

// ============================================================================
// Reference helpers
// ============================================================================

/// `x^(2/3)` from libm
#[inline]
pub fn ref_pow_2_3(x: f64) -> f64 {
    libm::pow(x, 2.0 / 3.0)
}

/// Integer power with explicit wrapping, written independently of the
/// crate's algorithms
pub fn ref_wrapping_pow_i64(base: i64, exponent: u32) -> i64 {
    base.wrapping_pow(exponent)
}

/// Unsigned counterpart of [`ref_wrapping_pow_i64`]
pub fn ref_wrapping_pow_u64(base: u64, exponent: u32) -> u64 {
    base.wrapping_pow(exponent)
}

// ============================================================================
// Proptest strategies
// ============================================================================

/// Small signed bases whose low powers stay well inside i64
pub fn small_i64_base() -> impl Strategy<Value = i64> {
    -64i64..=64
}

/// Any i32 base, for wrapping agreement
pub fn any_i32_base() -> impl Strategy<Value = i32> {
    any::<i32>()
}

/// Exponents in the range the benchmarks exercise, plus a little headroom
pub fn exponent() -> impl Strategy<Value = u32> {
    0u32..=64
}

/// Full exponent range
pub fn any_exponent() -> impl Strategy<Value = u32> {
    any::<u32>()
}

/// Positive normal f64 bases for the 2/3 approximations
pub fn positive_f64() -> impl Strategy<Value = f64> {
    (1e-6f64..=1e6f64).prop_filter("positive normal", |x| x.is_normal())
}

/// Moderate float bases for integer-exponent agreement
pub fn moderate_f64() -> impl Strategy<Value = f64> {
    (-4.0f64..=4.0f64).prop_filter("normal or zero", |&x| x.is_normal() || x == 0.0)
}

// ============================================================================
// Assertion helpers
// ============================================================================

/// Assert that `value` is within `tolerance` relative error of `reference`
pub fn assert_relative_error(reference: f64, value: f64, tolerance: f64, context: &str) {
    let metric = compute_error(reference, value);
    assert!(
        metric.relative <= tolerance || (reference == 0.0 && metric.absolute <= tolerance),
        "{}: expected {}, got {}, abs err {:.2e}, rel err {:.2e} (limit {:.0e})",
        context,
        reference,
        value,
        metric.absolute,
        metric.relative,
        tolerance
    );
}

/// Assert that two floats are bit-identical, with a readable message
pub fn assert_bit_identical(expected: f64, actual: f64, context: &str) {
    assert_eq!(
        expected.to_bits(),
        actual.to_bits(),
        "{}: expected {} ({:#018x}), got {} ({:#018x})",
        context,
        expected,
        expected.to_bits(),
        actual,
        actual.to_bits()
    );
}
