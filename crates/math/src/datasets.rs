//! Fixed operand sets shared by the benchmarks, the accuracy tests and the
//! CLI reporter.

/// Integer bases for the integer-exponent benchmarks
pub const INT_BASES: [i64; 5] = [2, 3, 5, 7, 11];

/// Non-negative integer exponents for the integer-exponent benchmarks
pub const INT_EXPONENTS: [u32; 7] = [0, 1, 2, 3, 5, 10, 15];

/// Floating-point bases
pub const FLOAT_BASES: [f64; 5] = [0.1, 0.5, 1.3, 2.7, 5.9];

/// Floating-point exponents for the reference power
pub const FLOAT_EXPONENTS: [f64; 7] = [0.0, 0.5, 1.0, 2.3, 5.7, 10.0, 15.0];

/// Single-precision counterpart of [`FLOAT_BASES`]
pub const FLOAT32_BASES: [f32; 5] = [0.1, 0.5, 1.3, 2.7, 5.9];

/// Integer bases for the 2/3-exponent approximations
pub const FRACTIONAL_INT_BASES: [i32; 10] = [1, 2, 3, 5, 8, 13, 21, 34, 55, 89];

/// Floating-point bases for the 2/3-exponent approximations
pub const FRACTIONAL_FLOAT_BASES: [f64; 10] = [0.1, 0.5, 1.0, 2.0, 3.0, 5.0, 8.0, 13.0, 21.0, 34.0];

/// Bases of the reference error-analysis grid
pub const ERROR_GRID_BASES: [f64; 6] = [0.1, 0.5, 1.0, 2.0, 5.0, 10.0];

/// Exponents of the reference error-analysis grid
pub const ERROR_GRID_EXPONENTS: [f64; 4] = [0.5, 1.0, 2.0, 2.5];

/// The fractional exponent approximated by `pow_2_3_*`
pub const TWO_THIRDS: f64 = 2.0 / 3.0;
