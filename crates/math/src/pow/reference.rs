//! Reference power
//!
//! Ground truth for the accuracy tests and the fallback for exponent domains
//! the integer algorithms do not cover (fractional or negative exponents).

use crate::traits::{Arithmetic, Real, RealPromote};

/// Computes `base^exponent` with the `libm` power routine
///
/// Both operands are promoted to the common real type given by
/// [`RealPromote`]: `f32` when both are `f32`, `f64` otherwise.
///
/// A negative base with a non-integer exponent yields NaN. A negative
/// integral exponent yields the reciprocal, like any real power.
///
/// # Example
///
/// ```rust
/// use powkit_math::pow::pow_reference;
///
/// assert_eq!(pow_reference(2.0f32, 3.0f32), 8.0f32);
/// assert_eq!(pow_reference(2i16, -1i32), 0.5f64);
/// assert!(pow_reference(-8.0f64, 0.5f64).is_nan());
/// ```
#[inline]
pub fn pow_reference<B, E>(base: B, exponent: E) -> <B as RealPromote<E>>::Output
where
    B: RealPromote<E>,
    E: Arithmetic,
{
    let base: <B as RealPromote<E>>::Output = Real::from_f64(base.to_f64());
    let exponent: <B as RealPromote<E>>::Output = Real::from_f64(exponent.to_f64());
    base.powf(exponent)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_integer_operands_promote_to_f64() {
        let result: f64 = pow_reference(3i32, 4u16);
        assert_eq!(result, 81.0);
    }

    #[test]
    fn test_reference_mixed_float_operands() {
        let result: f64 = pow_reference(2.0f32, 0.5f64);
        assert!((result - core::f64::consts::SQRT_2).abs() < 1e-7);

        let result: f32 = pow_reference(4.0f32, 0.5f32);
        assert_eq!(result, 2.0);
    }

    #[test]
    fn test_reference_zero_exponent() {
        assert_eq!(pow_reference(0.0f64, 0.0f64), 1.0);
        assert_eq!(pow_reference(-7i64, 0i64), 1.0);
    }

    #[test]
    fn test_reference_negative_base_fractional_exponent_is_nan() {
        assert!(pow_reference(-4.0f64, 2.0f64 / 3.0).is_nan());
        assert!(pow_reference(-4i32, 0.5f32).is_nan());
    }

    #[test]
    fn test_reference_negative_base_integral_exponent() {
        assert_eq!(pow_reference(-2i32, 3i32), -8.0);
        assert_eq!(pow_reference(-2.0f32, 2.0f32), 4.0);
    }
}
