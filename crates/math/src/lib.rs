#![doc = include_str!("../README.md")]
#![warn(missing_docs)]
#![warn(clippy::all)]

//! powkit-math: interchangeable exponentiation strategies
//!
//! This library computes `base^exponent` for fixed-width integer and
//! floating-point types using several algorithms with different speed and
//! accuracy trade-offs, plus memoizing wrappers backed by five different
//! cache data structures.
//!
//! # Features
//!
//! - **Reference power**: `libm` power with binary numeric promotion
//! - **Integer exponents**: square-and-multiply, divide-and-conquer, and an
//!   unrolled variant with small-exponent fast paths, all bit-identical on
//!   integer operands
//! - **Fractional exponent 2/3**: cube root of square, exp/log composition,
//!   and a truncated binomial series
//! - **Memoization**: ordered map, nested hash map, composite-key hash map,
//!   dense growable array, fixed static array
//! - **Error metrics**: absolute/relative error and aggregated statistics
//!
//! # Quick Start
//!
//! ```rust
//! use powkit_math::memo::{DenseArrayCache, PowCache};
//! use powkit_math::pow::{pow_2_3_series, pow_fast_int, pow_reference};
//! use powkit_math::error_metric::compute_error;
//!
//! assert_eq!(pow_fast_int(2i32, 10), 1024);
//!
//! let cache = DenseArrayCache::<u64>::new();
//! assert_eq!(cache.pow(5, 8), 390_625);
//!
//! let approx = pow_2_3_series(21i32);
//! let metric = compute_error(pow_reference(21i32, 2.0f64 / 3.0), approx);
//! assert!(metric.relative < 1e-6);
//! ```

// Numeric capability traits
pub mod traits;

// Error types
pub mod error;

// Exponentiation algorithms
pub mod pow;

// Memoization layer
pub mod memo;

// Accuracy grading
pub mod error_metric;

// Benchmark and report operands
pub mod datasets;

// Public re-exports for convenience
pub use error::{PowError, PowResult};
pub use error_metric::{compute_error, ErrorMetric, ErrorStats};
pub use memo::{CacheKind, PowCache};
pub use traits::{Arithmetic, Real, RealPromote};
