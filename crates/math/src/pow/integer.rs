//! Integer-exponent strategies
//!
//! Three interchangeable ways to compute `base^exponent` for `exponent >= 0`:
//!
//! - [`pow_fast_int`]: iterative square-and-multiply
//! - [`pow_hierarchical`]: recursive divide-and-conquer
//! - [`pow_ultra_fast`]: unrolled fast paths for small constant exponents
//!
//! The exponent is a `u32`, so a negative exponent cannot reach these
//! functions. [`try_pow_int`] is the single checked entry point for signed
//! exponents and rejects negative ones with [`PowError`].
//!
//! # Agreement
//!
//! Integer products wrap (see [`Arithmetic::mul_wrapping`]), and wrapping
//! multiplication is associative, so all three strategies return identical
//! values for every integer input, overflow included. For floats,
//! `pow_fast_int` and `pow_ultra_fast` perform the same multiplications in
//! the same order and agree bit for bit; `pow_hierarchical` accumulates the
//! odd factors in the opposite order and agrees within rounding.

use crate::error::{PowError, PowResult};
use crate::traits::Arithmetic;

#[inline(always)]
fn square_and_multiply<T: Arithmetic>(base: T, exponent: u32) -> T {
    let mut result = T::ONE;
    let mut factor = base;
    let mut remaining = exponent;

    while remaining > 0 {
        if remaining & 1 == 1 {
            result = result.mul_wrapping(factor);
        }
        factor = factor.mul_wrapping(factor);
        remaining >>= 1;
    }

    result
}

/// Iterative binary exponentiation
///
/// Computes `base^exponent` in O(log exponent) multiplications. Returns
/// `T::ONE` for `exponent == 0`, including `0^0`.
///
/// # Example
///
/// ```rust
/// use powkit_math::pow::pow_fast_int;
///
/// assert_eq!(pow_fast_int(2i32, 10), 1024);
/// assert_eq!(pow_fast_int(1.5f64, 2), 2.25);
/// ```
#[inline]
pub fn pow_fast_int<T: Arithmetic>(base: T, exponent: u32) -> T {
    square_and_multiply(base, exponent)
}

/// Binary exponentiation with a signed exponent
///
/// # Errors
///
/// - [`PowError::NegativeExponent`] when `exponent < 0`
/// - [`PowError::ExponentOutOfRange`] when `exponent > u32::MAX`
///
/// # Example
///
/// ```rust
/// use powkit_math::pow::try_pow_int;
/// use powkit_math::PowError;
///
/// assert_eq!(try_pow_int(2u64, 10), Ok(1024));
/// assert_eq!(
///     try_pow_int(2u64, -1),
///     Err(PowError::NegativeExponent { exponent: -1 })
/// );
/// ```
pub fn try_pow_int<T: Arithmetic>(base: T, exponent: i64) -> PowResult<T> {
    if exponent < 0 {
        return Err(PowError::NegativeExponent { exponent });
    }
    let exponent = u32::try_from(exponent).map_err(|_| PowError::ExponentOutOfRange {
        exponent,
        max: u32::MAX,
    })?;
    Ok(pow_fast_int(base, exponent))
}

/// Recursive divide-and-conquer exponentiation
///
/// `base^e = base * (base²)^(e/2)` for odd `e`, `(base²)^(e/2)` for even `e`.
/// Recursion depth is at most 32 (one frame per exponent bit).
///
/// # Example
///
/// ```rust
/// use powkit_math::pow::pow_hierarchical;
///
/// assert_eq!(pow_hierarchical(3i32, 5), 243);
/// ```
pub fn pow_hierarchical<T: Arithmetic>(base: T, exponent: u32) -> T {
    match exponent {
        0 => T::ONE,
        1 => base,
        _ => {
            let half = pow_hierarchical(base.mul_wrapping(base), exponent >> 1);
            if exponent & 1 == 1 {
                base.mul_wrapping(half)
            } else {
                half
            }
        }
    }
}

/// Binary exponentiation with unrolled small-exponent fast paths
///
/// Exponents 0, 1, 2, 3, 4 and 8 are computed with a fixed minimal number of
/// multiplications; every other exponent runs the square-and-multiply loop.
/// Results are identical to [`pow_fast_int`].
///
/// # Example
///
/// ```rust
/// use powkit_math::pow::pow_ultra_fast;
///
/// assert_eq!(pow_ultra_fast(5u32, 8), 390_625);
/// ```
#[inline]
pub fn pow_ultra_fast<T: Arithmetic>(base: T, exponent: u32) -> T {
    match exponent {
        0 => T::ONE,
        1 => base,
        2 => base.mul_wrapping(base),
        3 => base.mul_wrapping(base).mul_wrapping(base),
        4 => {
            let square = base.mul_wrapping(base);
            square.mul_wrapping(square)
        }
        8 => {
            let square = base.mul_wrapping(base);
            let fourth = square.mul_wrapping(square);
            fourth.mul_wrapping(fourth)
        }
        _ => square_and_multiply(base, exponent),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_concrete_values() {
        assert_eq!(pow_fast_int(2i32, 10), 1024);
        assert_eq!(pow_hierarchical(3i32, 5), 243);
        assert_eq!(pow_ultra_fast(5u32, 8), 390_625);
    }

    #[test]
    fn test_zero_exponent_is_one() {
        assert_eq!(pow_fast_int(0i64, 0), 1);
        assert_eq!(pow_hierarchical(-9i16, 0), 1);
        assert_eq!(pow_ultra_fast(0.0f32, 0), 1.0);
        assert_eq!(pow_ultra_fast(f64::NAN, 0), 1.0);
    }

    #[test]
    fn test_unit_exponent_is_identity() {
        assert_eq!(pow_fast_int(-7i32, 1), -7);
        assert_eq!(pow_hierarchical(u64::MAX, 1), u64::MAX);
        assert_eq!(pow_ultra_fast(2.75f64, 1), 2.75);
    }

    #[test]
    fn test_negative_base_sign() {
        assert_eq!(pow_fast_int(-2i32, 3), -8);
        assert_eq!(pow_hierarchical(-2i32, 4), 16);
        assert_eq!(pow_ultra_fast(-3i64, 3), -27);
    }

    #[test]
    fn test_fast_paths_match_loop() {
        for exponent in [0, 1, 2, 3, 4, 5, 7, 8, 9, 15, 16] {
            for base in [-3i32, -1, 0, 1, 2, 7, 11] {
                assert_eq!(
                    pow_ultra_fast(base, exponent),
                    pow_fast_int(base, exponent),
                    "{}^{}",
                    base,
                    exponent
                );
            }
        }
    }

    #[test]
    fn test_float_fast_paths_bit_identical() {
        for exponent in 0..=16 {
            for base in [0.1f64, 0.5, 1.3, 2.7, 5.9] {
                assert_eq!(
                    pow_ultra_fast(base, exponent).to_bits(),
                    pow_fast_int(base, exponent).to_bits(),
                    "{}^{}",
                    base,
                    exponent
                );
            }
        }
    }

    #[test]
    fn test_overflow_wraps_identically() {
        // 2^10 squares the factor past i16::MAX on the final iteration
        assert_eq!(pow_fast_int(2i16, 10), 1024);
        assert_eq!(pow_fast_int(3i16, 15), pow_hierarchical(3i16, 15));
        assert_eq!(pow_ultra_fast(7u16, 8), pow_hierarchical(7u16, 8));
        assert_eq!(pow_fast_int(11u64, 63), pow_hierarchical(11u64, 63));
    }

    #[test]
    fn test_large_exponent_recursion_is_shallow() {
        assert_eq!(pow_hierarchical(1u32, u32::MAX), 1);
        assert_eq!(pow_hierarchical(-1i64, u32::MAX), -1);
        assert_eq!(pow_fast_int(0u16, u32::MAX), 0);
    }

    #[test]
    fn test_try_pow_int_domain() {
        assert_eq!(try_pow_int(2i32, 10), Ok(1024));
        assert_eq!(try_pow_int(5i16, 0), Ok(1));
        assert_eq!(
            try_pow_int(2i32, -1),
            Err(PowError::NegativeExponent { exponent: -1 })
        );
        assert_eq!(
            try_pow_int(1.0f64, i64::from(u32::MAX) + 1),
            Err(PowError::ExponentOutOfRange {
                exponent: i64::from(u32::MAX) + 1,
                max: u32::MAX,
            })
        );
    }
}
