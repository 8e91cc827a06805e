//! Fixed-size static-array cache

use parking_lot::Mutex;
use tracing::trace;

use super::PowCache;
use crate::pow::pow_hierarchical;
use crate::traits::Arithmetic;

/// Default table dimension of [`StaticArrayCache`]
pub const DEFAULT_STATIC_DIM: usize = 16;

#[derive(Debug)]
struct Table<T, const N: usize> {
    values: [[T; N]; N],
    populated: [[bool; N]; N],
}

/// Memoization in a fixed `N x N` array with a parallel populated mask
///
/// Never allocates on the heap and never grows. Any base without an
/// [`Arithmetic::as_index`] below `N`, or any exponent `>= N`, is computed
/// directly without touching the table.
///
/// # Example
///
/// ```rust
/// use powkit_math::memo::{PowCache, StaticArrayCache};
///
/// let cache = StaticArrayCache::<i32, 4>::new();
/// assert_eq!(cache.pow(3, 3), 27); // cached
/// assert_eq!(cache.pow(4, 3), 64); // base out of range, computed directly
/// assert_eq!(cache.len(), 1);
/// ```
#[derive(Debug)]
pub struct StaticArrayCache<T: Arithmetic, const N: usize = 16> {
    table: Mutex<Table<T, N>>,
}

impl<T: Arithmetic, const N: usize> StaticArrayCache<T, N> {
    /// Creates an empty table
    pub fn new() -> Self {
        Self {
            table: Mutex::new(Table {
                values: [[T::ZERO; N]; N],
                populated: [[false; N]; N],
            }),
        }
    }

    /// Table dimension `N`
    pub const fn dimension(&self) -> usize {
        N
    }

    fn slot_of(base: T, exponent: u32) -> Option<(usize, usize)> {
        let row = base.as_index().filter(|&row| row < N)?;
        let column = usize::try_from(exponent).ok().filter(|&column| column < N)?;
        Some((row, column))
    }
}

impl<T: Arithmetic, const N: usize> Default for StaticArrayCache<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Arithmetic, const N: usize> PowCache<T> for StaticArrayCache<T, N> {
    fn pow(&self, base: T, exponent: u32) -> T {
        let Some((row, column)) = Self::slot_of(base, exponent) else {
            trace!(?base, exponent, "static cache bypass");
            return pow_hierarchical(base, exponent);
        };

        let mut table = self.table.lock();
        if !table.populated[row][column] {
            trace!(?base, exponent, "static cache miss");
            table.values[row][column] = pow_hierarchical(base, exponent);
            table.populated[row][column] = true;
        }
        table.values[row][column]
    }

    fn len(&self) -> usize {
        self.table
            .lock()
            .populated
            .iter()
            .flatten()
            .filter(|&&populated| populated)
            .count()
    }

    fn name(&self) -> &'static str {
        "static_array"
    }
}
