//! Approximations of `x^(2/3)`
//!
//! Three independent strategies, each trading accuracy for speed differently.
//! All of them return NaN for a negative base.
//!
//! | Function | Method | Documented bound (f64, relative) |
//! |----------|--------|----------------------------------|
//! | `pow_2_3_cbrt` | `cbrt(x²)` | < 1e-9 |
//! | `pow_2_3_exp_log` | `exp(⅔·ln x)` | < 1e-9 |
//! | `pow_2_3_series` | 10-term binomial series | < 1e-6 |
//!
//! In practice all three land within a few ulps of `libm::pow` on the
//! benchmark bases; the series is the loosest at around 1e-11.
//!
//! The generic entry points accept any [`Arithmetic`] base and compute in
//! `f64`. The `_f32` variants compute in single precision.

use crate::traits::{Arithmetic, Real};

/// Number of binomial terms summed by the series approximation
pub const SERIES_TERMS: u32 = 10;

/// Bases below this are scaled by powers of 8 before the series expansion
///
/// With a cube root of at least 10 the nearest perfect cube is within a few
/// percent of the scaled base, which keeps `|z|` small enough for ten terms.
const SERIES_MIN_SCALED_BASE: f64 = 1000.0;

/// Upper bound on range-reduction steps (enough to lift the smallest f64
/// subnormal past `SERIES_MIN_SCALED_BASE`)
const SERIES_MAX_SCALE_STEPS: u32 = 400;

#[inline(always)]
fn cbrt_of_square<R: Real>(base: R) -> R {
    if base < R::ZERO {
        return R::NAN;
    }
    (base * base).cbrt()
}

#[inline(always)]
fn exp_of_scaled_log<R: Real>(base: R) -> R {
    if base < R::ZERO {
        return R::NAN;
    }
    if base == R::ZERO {
        return R::ZERO;
    }
    (R::TWO_THIRDS * base.ln()).exp()
}

fn binomial_series<R: Real>(base: R) -> R {
    if base < R::ZERO {
        return R::NAN;
    }
    if base == R::ZERO {
        return R::ZERO;
    }
    if !base.is_finite() {
        return base.powf(R::TWO_THIRDS);
    }

    // x^(2/3) = (8^k·x)^(2/3) / 4^k, both factors exact in binary floating point
    let eight = R::from_f64(8.0);
    let quarter = R::from_f64(0.25);
    let min_scaled = R::from_f64(SERIES_MIN_SCALED_BASE);
    let mut scaled = base;
    let mut rescale = R::ONE;
    let mut steps = 0;
    while scaled < min_scaled && steps < SERIES_MAX_SCALE_STEPS {
        scaled = scaled * eight;
        rescale = rescale * quarter;
        steps += 1;
    }

    // Near the top of the range `n³` can round past the largest finite value
    let n = scaled.cbrt().round();
    let nearest_cube = n * n * n;
    if nearest_cube == R::ZERO || !nearest_cube.is_finite() {
        return base.powf(R::TWO_THIRDS);
    }

    let z = scaled / nearest_cube - R::ONE;
    let mut term = R::ONE;
    let mut sum = R::ONE;
    for k in 1..SERIES_TERMS {
        let k = R::from_f64(f64::from(k));
        term = term * (R::TWO_THIRDS - k + R::ONE) / k * z;
        sum = sum + term;
    }

    n * n * sum * rescale
}

/// `x^(2/3)` as the cube root of the square
///
/// `x²` overflows to infinity above roughly `1.3e154` and underflows to zero
/// below roughly `1.5e-162`; the result follows.
///
/// # Example
///
/// ```rust
/// use powkit_math::pow::pow_2_3_cbrt;
///
/// assert!((pow_2_3_cbrt(8i32) - 4.0).abs() < 1e-12);
/// assert!(pow_2_3_cbrt(-1.0f64).is_nan());
/// ```
#[inline]
pub fn pow_2_3_cbrt<T: Arithmetic>(base: T) -> f64 {
    cbrt_of_square(base.to_f64())
}

/// Single-precision [`pow_2_3_cbrt`]
#[inline]
pub fn pow_2_3_cbrt_f32(base: f32) -> f32 {
    cbrt_of_square(base)
}

/// `x^(2/3)` as `exp((2/3)·ln x)`
///
/// Zero is special-cased to return zero (where `ln` diverges).
#[inline]
pub fn pow_2_3_exp_log<T: Arithmetic>(base: T) -> f64 {
    exp_of_scaled_log(base.to_f64())
}

/// Single-precision [`pow_2_3_exp_log`]
#[inline]
pub fn pow_2_3_exp_log_f32(base: f32) -> f32 {
    exp_of_scaled_log(base)
}

/// `x^(2/3)` by a truncated binomial series around the nearest perfect cube
///
/// With `n = round(cbrt(x))` and `a = n³`, `x^(2/3) = n²·(1 + z)^(2/3)` where
/// `z = x/a − 1`. The series sums [`SERIES_TERMS`] terms of
/// `term_k = term_{k−1}·(⅔ − k + 1)/k·z`.
///
/// Small bases are first multiplied by `8^k` until the base is at least
/// 1000, and the result divided by `4^k`. Both scalings are exact, and the
/// reduction keeps `|z| < 0.1` so the truncated series stays accurate for
/// bases like 2 or 3 whose nearest cube is far away. If the nearest cube is
/// zero or overflows (bases within rounding of the type's maximum), the
/// `libm` power is used.
///
/// # Example
///
/// ```rust
/// use powkit_math::pow::pow_2_3_series;
///
/// assert_eq!(pow_2_3_series(0u32), 0.0);
/// assert!((pow_2_3_series(27.0f64) - 9.0).abs() < 1e-12);
/// assert!(pow_2_3_series(-4i32).is_nan());
/// ```
#[inline]
pub fn pow_2_3_series<T: Arithmetic>(base: T) -> f64 {
    binomial_series(base.to_f64())
}

/// Single-precision [`pow_2_3_series`]
#[inline]
pub fn pow_2_3_series_f32(base: f32) -> f32 {
    binomial_series(base)
}
