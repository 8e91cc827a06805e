//! Error types for exponentiation entry points that accept signed exponents.

use thiserror::Error;

/// Result alias for fallible exponentiation.
pub type PowResult<T> = Result<T, PowError>;

/// Unsupported-domain input to an integer-exponent routine.
///
/// Mathematically undefined results (negative base with a fractional
/// exponent) are not errors: they are reported as NaN values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PowError {
    /// Integer-exponent algorithms do not compute reciprocals.
    ///
    /// # Recovery
    ///
    /// Use [`pow_reference`](crate::pow::pow_reference) for negative
    /// exponents over a real type.
    #[error("negative exponent {exponent} is not supported by integer exponentiation")]
    NegativeExponent {
        /// The rejected exponent
        exponent: i64,
    },

    /// Exponent does not fit the `u32` exponent domain.
    #[error("exponent {exponent} exceeds the supported maximum {max}")]
    ExponentOutOfRange {
        /// The rejected exponent
        exponent: i64,
        /// Largest accepted exponent
        max: u32,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = PowError::NegativeExponent { exponent: -3 };
        assert_eq!(
            err.to_string(),
            "negative exponent -3 is not supported by integer exponentiation"
        );

        let err = PowError::ExponentOutOfRange {
            exponent: 1 << 40,
            max: u32::MAX,
        };
        assert!(err.to_string().contains("4294967295"));
    }
}
