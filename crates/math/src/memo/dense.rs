//! Dense dynamic-array cache

use parking_lot::Mutex;
use tracing::{debug, trace};

use super::PowCache;
use crate::pow::pow_hierarchical;
use crate::traits::Arithmetic;

/// Growth bounds for [`DenseArrayCache`]
///
/// Keys at or past either bound bypass the cache, so a single huge base
/// cannot force a huge allocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DenseCacheConfig {
    /// Exclusive upper bound on cached bases (row count)
    pub max_base: usize,
    /// Exclusive upper bound on cached exponents (column count)
    pub max_exponent: usize,
}

impl DenseCacheConfig {
    /// Default row bound
    pub const DEFAULT_MAX_BASE: usize = 4096;
    /// Default column bound
    pub const DEFAULT_MAX_EXPONENT: usize = 64;
}

impl Default for DenseCacheConfig {
    fn default() -> Self {
        Self {
            max_base: Self::DEFAULT_MAX_BASE,
            max_exponent: Self::DEFAULT_MAX_EXPONENT,
        }
    }
}

/// Memoization in a growable two-dimensional array indexed `[base][exponent]`
///
/// Only bases with an [`Arithmetic::as_index`] (non-negative, finite,
/// integral) inside the configured bounds are cached; every other key is
/// computed directly. Rows and columns grow on demand to the largest index
/// seen. Slots are `Option<T>`, so an unpopulated slot is never mistaken for
/// a result.
#[derive(Debug)]
pub struct DenseArrayCache<T: Arithmetic> {
    config: DenseCacheConfig,
    rows: Mutex<Vec<Vec<Option<T>>>>,
}

impl<T: Arithmetic> DenseArrayCache<T> {
    /// Creates an empty cache with the default bounds
    pub fn new() -> Self {
        Self::with_config(DenseCacheConfig::default())
    }

    /// Creates an empty cache with explicit bounds
    pub fn with_config(config: DenseCacheConfig) -> Self {
        Self {
            config,
            rows: Mutex::new(Vec::new()),
        }
    }

    /// Growth bounds of this cache
    pub fn config(&self) -> DenseCacheConfig {
        self.config
    }

    /// Current `(rows, widest row)` allocation
    pub fn dimensions(&self) -> (usize, usize) {
        let rows = self.rows.lock();
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        (rows.len(), width)
    }

    fn slot_of(&self, base: T, exponent: u32) -> Option<(usize, usize)> {
        let row = base.as_index().filter(|&row| row < self.config.max_base)?;
        let column = usize::try_from(exponent)
            .ok()
            .filter(|&column| column < self.config.max_exponent)?;
        Some((row, column))
    }
}

impl<T: Arithmetic> Default for DenseArrayCache<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Arithmetic> PowCache<T> for DenseArrayCache<T> {
    fn pow(&self, base: T, exponent: u32) -> T {
        let Some((row, column)) = self.slot_of(base, exponent) else {
            trace!(?base, exponent, "dense cache bypass");
            return pow_hierarchical(base, exponent);
        };

        let mut rows = self.rows.lock();
        if row >= rows.len() {
            debug!(rows = row + 1, "dense cache growing rows");
            rows.resize_with(row + 1, Vec::new);
        }
        let slots = &mut rows[row];
        if column >= slots.len() {
            slots.resize(column + 1, None);
        }
        *slots[column].get_or_insert_with(|| {
            trace!(?base, exponent, "dense cache miss");
            pow_hierarchical(base, exponent)
        })
    }

    fn len(&self) -> usize {
        self.rows
            .lock()
            .iter()
            .flatten()
            .filter(|slot| slot.is_some())
            .count()
    }

    fn name(&self) -> &'static str {
        "dense_array"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grows_to_largest_index() {
        let cache = DenseArrayCache::<u32>::new();
        assert_eq!(cache.dimensions(), (0, 0));
        assert_eq!(cache.pow(5, 3), 125);
        assert_eq!(cache.dimensions(), (6, 4));
        assert_eq!(cache.pow(2, 10), 1024);
        assert_eq!(cache.dimensions(), (6, 11));
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_negative_base_bypasses() {
        let cache = DenseArrayCache::<i64>::new();
        assert_eq!(cache.pow(-3, 3), -27);
        assert!(cache.is_empty());
        assert_eq!(cache.dimensions(), (0, 0));
    }

    #[test]
    fn test_fractional_and_signed_zero_float_bases_bypass() {
        let cache = DenseArrayCache::<f64>::new();
        assert_eq!(cache.pow(1.5, 2), 2.25);
        assert!(cache.pow(-0.0, 3).is_sign_negative());
        assert!(cache.is_empty());

        assert_eq!(cache.pow(3.0, 2), 9.0);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_bounds_bypass() {
        let cache = DenseArrayCache::<u64>::with_config(DenseCacheConfig {
            max_base: 8,
            max_exponent: 4,
        });
        assert_eq!(cache.pow(8, 2), 64);
        assert_eq!(cache.pow(2, 4), 16);
        assert!(cache.is_empty());

        assert_eq!(cache.pow(7, 3), 343);
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.config().max_base, 8);
    }
}
