//! Numeric capability traits
//!
//! Every algorithm in this crate is written once against these traits and
//! monomorphized for each supported operand type:
//!
//! - [`Arithmetic`]: all eight operand types (`i16`, `i32`, `i64`, `u16`,
//!   `u32`, `u64`, `f32`, `f64`)
//! - [`Real`]: the floating-point subset, backed by `libm`
//! - [`RealPromote`]: the binary promotion rule used by the reference power

use core::fmt::Debug;
use core::hash::Hash;
use core::ops::{Add, Div, Mul, Neg, Sub};

/// Operand type accepted by the integer-exponent algorithms and the caches
///
/// # Example
///
/// ```rust
/// use powkit_math::Arithmetic;
///
/// assert_eq!(i16::ONE, 1);
/// assert_eq!(300i16.mul_wrapping(300), 24_464); // wraps, never panics
/// assert_eq!(2.5f64.mul_wrapping(2.0), 5.0);
/// ```
pub trait Arithmetic: Copy + PartialEq + PartialOrd + Debug + Send + Sync + 'static {
    /// Exact key representation used by the memoization caches
    ///
    /// Integers use their own value. Floats use the IEEE 754 bit pattern, so
    /// key equality is bit equality: `-0.0` and `0.0` are different keys and
    /// every NaN payload is its own key. No tolerance or quantization is
    /// applied.
    type Bits: Copy + Eq + Ord + Hash + Debug + Send + Sync + 'static;

    /// Additive identity
    const ZERO: Self;

    /// Multiplicative identity
    const ONE: Self;

    /// Multiply two values
    ///
    /// Integer products wrap on overflow so results are identical in debug
    /// and release builds. Float products are plain IEEE 754 multiplication.
    fn mul_wrapping(self, rhs: Self) -> Self;

    /// Convert to `f64` for real-valued algorithms and error metrics
    fn to_f64(self) -> f64;

    /// Exact cache key for this value
    fn key_bits(self) -> Self::Bits;

    /// Dense array index for this value
    ///
    /// `Some` only for non-negative, finite, integral values that fit in a
    /// `usize`; `-0.0` returns `None`. Dense caches bypass every value that
    /// returns `None`.
    fn as_index(self) -> Option<usize>;
}

/// Floating-point operand type
///
/// Transcendental functions are routed through `libm` so results do not
/// depend on the platform C library.
pub trait Real:
    Arithmetic
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
{
    /// Quiet NaN
    const NAN: Self;

    /// The exponent 2/3 rounded to this type
    const TWO_THIRDS: Self;

    /// Convert from `f64` (rounding to nearest for `f32`)
    fn from_f64(value: f64) -> Self;

    /// `self^exponent`
    fn powf(self, exponent: Self) -> Self;

    /// Cube root
    fn cbrt(self) -> Self;

    /// Natural exponential
    fn exp(self) -> Self;

    /// Natural logarithm
    fn ln(self) -> Self;

    /// Round half away from zero
    fn round(self) -> Self;

    /// Neither infinite nor NaN
    fn is_finite(self) -> bool;
}

macro_rules! impl_arithmetic_int {
    ($($t:ty),+) => {
        $(
            impl Arithmetic for $t {
                type Bits = $t;

                const ZERO: Self = 0;
                const ONE: Self = 1;

                #[inline(always)]
                fn mul_wrapping(self, rhs: Self) -> Self {
                    self.wrapping_mul(rhs)
                }

                #[inline(always)]
                fn to_f64(self) -> f64 {
                    self as f64
                }

                #[inline(always)]
                fn key_bits(self) -> Self::Bits {
                    self
                }

                #[inline(always)]
                fn as_index(self) -> Option<usize> {
                    usize::try_from(self).ok()
                }
            }
        )+
    };
}

impl_arithmetic_int!(i16, i32, i64, u16, u32, u64);

macro_rules! impl_arithmetic_float {
    ($t:ty, $bits:ty) => {
        impl Arithmetic for $t {
            type Bits = $bits;

            const ZERO: Self = 0.0;
            const ONE: Self = 1.0;

            #[inline(always)]
            fn mul_wrapping(self, rhs: Self) -> Self {
                self * rhs
            }

            #[inline(always)]
            fn to_f64(self) -> f64 {
                self as f64
            }

            #[inline(always)]
            fn key_bits(self) -> Self::Bits {
                self.to_bits()
            }

            #[inline]
            fn as_index(self) -> Option<usize> {
                // -0.0 is excluded so it never shares a slot with 0.0.
                // `usize::MAX as $t` rounds up, so the upper comparison is strict.
                if self.is_finite()
                    && self.is_sign_positive()
                    && self.fract() == 0.0
                    && self < usize::MAX as $t
                {
                    Some(self as usize)
                } else {
                    None
                }
            }
        }
    };
}

impl_arithmetic_float!(f32, u32);
impl_arithmetic_float!(f64, u64);

impl Real for f32 {
    const NAN: Self = f32::NAN;
    const TWO_THIRDS: Self = 2.0 / 3.0;

    #[inline(always)]
    fn from_f64(value: f64) -> Self {
        value as f32
    }

    #[inline(always)]
    fn powf(self, exponent: Self) -> Self {
        libm::powf(self, exponent)
    }

    #[inline(always)]
    fn cbrt(self) -> Self {
        libm::cbrtf(self)
    }

    #[inline(always)]
    fn exp(self) -> Self {
        libm::expf(self)
    }

    #[inline(always)]
    fn ln(self) -> Self {
        libm::logf(self)
    }

    #[inline(always)]
    fn round(self) -> Self {
        libm::roundf(self)
    }

    #[inline(always)]
    fn is_finite(self) -> bool {
        f32::is_finite(self)
    }
}

impl Real for f64 {
    const NAN: Self = f64::NAN;
    const TWO_THIRDS: Self = 2.0 / 3.0;

    #[inline(always)]
    fn from_f64(value: f64) -> Self {
        value
    }

    #[inline(always)]
    fn powf(self, exponent: Self) -> Self {
        libm::pow(self, exponent)
    }

    #[inline(always)]
    fn cbrt(self) -> Self {
        libm::cbrt(self)
    }

    #[inline(always)]
    fn exp(self) -> Self {
        libm::exp(self)
    }

    #[inline(always)]
    fn ln(self) -> Self {
        libm::log(self)
    }

    #[inline(always)]
    fn round(self) -> Self {
        libm::round(self)
    }

    #[inline(always)]
    fn is_finite(self) -> bool {
        f64::is_finite(self)
    }
}

/// Binary numeric promotion to a common real type
///
/// `f32` combined with `f32` stays `f32`; every other pairing (including
/// integer with integer) promotes to `f64`.
pub trait RealPromote<Rhs: Arithmetic>: Arithmetic {
    /// Common real type of `Self` and `Rhs`
    type Output: Real;
}

macro_rules! promote_to_f64 {
    ($lhs:ty => $($rhs:ty),+) => {
        $(
            impl RealPromote<$rhs> for $lhs {
                type Output = f64;
            }
        )+
    };
}

promote_to_f64!(i16 => i16, i32, i64, u16, u32, u64, f32, f64);
promote_to_f64!(i32 => i16, i32, i64, u16, u32, u64, f32, f64);
promote_to_f64!(i64 => i16, i32, i64, u16, u32, u64, f32, f64);
promote_to_f64!(u16 => i16, i32, i64, u16, u32, u64, f32, f64);
promote_to_f64!(u32 => i16, i32, i64, u16, u32, u64, f32, f64);
promote_to_f64!(u64 => i16, i32, i64, u16, u32, u64, f32, f64);
promote_to_f64!(f32 => i16, i32, i64, u16, u32, u64, f64);
promote_to_f64!(f64 => i16, i32, i64, u16, u32, u64, f32, f64);

impl RealPromote<f32> for f32 {
    type Output = f32;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_products_wrap() {
        assert_eq!(i16::MAX.mul_wrapping(2), -2);
        assert_eq!(u16::MAX.mul_wrapping(u16::MAX), 1);
        assert_eq!(7i64.mul_wrapping(6), 42);
    }

    #[test]
    fn test_float_key_bits_distinguish_signed_zero() {
        assert_ne!(0.0f64.key_bits(), (-0.0f64).key_bits());
        assert_eq!(1.5f32.key_bits(), 1.5f32.to_bits());
    }

    #[test]
    fn test_as_index_integers() {
        assert_eq!(5i32.as_index(), Some(5));
        assert_eq!((-1i32).as_index(), None);
        assert_eq!(u64::from(u16::MAX).as_index(), Some(65_535));
    }

    #[test]
    fn test_as_index_floats() {
        assert_eq!(3.0f64.as_index(), Some(3));
        assert_eq!(0.0f32.as_index(), Some(0));
        assert_eq!(2.5f64.as_index(), None);
        assert_eq!((-2.0f64).as_index(), None);
        assert_eq!((-0.0f64).as_index(), None);
        assert_eq!(f64::NAN.as_index(), None);
        assert_eq!(f32::INFINITY.as_index(), None);
    }

    #[test]
    fn test_real_kernels() {
        assert_eq!(Real::cbrt(27.0f64), 3.0);
        assert_eq!(Real::round(2.5f32), 3.0);
        assert!((Real::ln(core::f64::consts::E) - 1.0).abs() < 1e-15);
        assert!(Real::powf(-8.0f64, 0.5).is_nan());
    }
}
