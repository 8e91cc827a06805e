//! Exponentiation strategies
//!
//! Every function here is pure and stateless, so all of them are safe to
//! call concurrently without synchronization.
//!
//! # Modules
//!
//! - `reference`: the trusted `libm` power, used as ground truth
//! - `integer`: square-and-multiply, divide-and-conquer and unrolled
//!   strategies for non-negative integer exponents
//! - `fractional`: three approximations of `x^(2/3)`
//!
//! # Example
//!
//! ```rust
//! use powkit_math::pow::{pow_fast_int, pow_hierarchical, pow_reference, pow_ultra_fast};
//!
//! assert_eq!(pow_fast_int(2i32, 10), 1024);
//! assert_eq!(pow_hierarchical(3i64, 5), 243);
//! assert_eq!(pow_ultra_fast(5u32, 8), 390_625);
//! assert_eq!(pow_reference(2i32, 10i32), 1024.0);
//! ```

pub mod fractional;
pub mod integer;
pub mod reference;

pub use self::fractional::{
    pow_2_3_cbrt, pow_2_3_cbrt_f32, pow_2_3_exp_log, pow_2_3_exp_log_f32, pow_2_3_series,
    pow_2_3_series_f32,
};
pub use self::integer::{pow_fast_int, pow_hierarchical, pow_ultra_fast, try_pow_int};
pub use self::reference::pow_reference;
