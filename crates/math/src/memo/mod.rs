//! Memoized exponentiation
//!
//! Five cache strategies wrap [`pow_hierarchical`] and persist every result
//! keyed by `(base, exponent)`:
//!
//! | Strategy | Container | Lookup | Domain |
//! |----------|-----------|--------|--------|
//! | [`OrderedMapCache`] | `BTreeMap` | O(log n) | all keys |
//! | [`NestedMapCache`] | `HashMap` of `HashMap` | O(1) amortized | all keys |
//! | [`CompositeKeyCache`] | `HashMap`, combined hash | O(1) amortized | all keys |
//! | [`DenseArrayCache`] | `Vec<Vec<Option<T>>>` | O(1) | non-negative integral bases, bounded |
//! | [`StaticArrayCache`] | `[[T; N]; N]` + populated mask | O(1) | base and exponent `< N` |
//!
//! Caches are explicit objects owned by the caller. They start empty, grow
//! monotonically, and are never evicted or invalidated. The first value
//! computed for a key is returned verbatim by every later lookup.
//!
//! Keys outside a dense cache's domain are computed directly and never
//! stored; exceeding a cache's capacity is not an error.
//!
//! # Exponent domain
//!
//! Caches take a `u32` exponent, so negative exponents are never memoized and
//! no reciprocal is stored. For a real base, `base^-e` is
//! `1 / cache.pow(base, e)`, or [`pow_reference`] with a negative exponent.
//!
//! # Concurrency
//!
//! Each cache guards its container with one `parking_lot::Mutex`. The
//! lookup, the computation on a miss and the insert all happen under a single
//! lock acquisition, so a key is computed at most once and no caller ever
//! observes a partially written slot. Every cache is `Send + Sync`.
//!
//! # Example
//!
//! ```rust
//! use powkit_math::memo::{OrderedMapCache, PowCache, StaticArrayCache};
//!
//! let cache = OrderedMapCache::<i64>::new();
//! assert_eq!(cache.pow(3, 5), 243);
//! assert_eq!(cache.pow(3, 5), 243); // served from the cache
//! assert_eq!(cache.len(), 1);
//!
//! let table: StaticArrayCache<u32> = StaticArrayCache::new();
//! assert_eq!(table.pow(2, 20), 1 << 20); // exponent past the 16x16 bound
//! assert!(table.is_empty());
//! ```
//!
//! [`pow_hierarchical`]: crate::pow::pow_hierarchical
//! [`pow_reference`]: crate::pow::pow_reference

mod composite;
mod dense;
mod fixed;
mod nested;
mod ordered;

pub use self::composite::{combine_hashes, CompositeKey, CompositeKeyCache, GOLDEN_RATIO_64};
pub use self::dense::{DenseArrayCache, DenseCacheConfig};
pub use self::fixed::{StaticArrayCache, DEFAULT_STATIC_DIM};
pub use self::nested::NestedMapCache;
pub use self::ordered::OrderedMapCache;

use crate::traits::Arithmetic;

/// Memoized `base^exponent`
///
/// Implementors return exactly what an unmemoized
/// [`pow_hierarchical`](crate::pow::pow_hierarchical) call would return.
pub trait PowCache<T: Arithmetic>: Send + Sync {
    /// Computes `base^exponent`, serving repeated keys from the cache
    fn pow(&self, base: T, exponent: u32) -> T;

    /// Number of cached entries
    fn len(&self) -> usize;

    /// Returns true if no entry has been cached yet
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Short strategy name for reports
    fn name(&self) -> &'static str;
}

/// The available cache strategies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CacheKind {
    /// [`OrderedMapCache`]
    OrderedMap,
    /// [`NestedMapCache`]
    NestedMap,
    /// [`CompositeKeyCache`]
    CompositeKey,
    /// [`DenseArrayCache`] with the default bounds
    DenseArray,
    /// [`StaticArrayCache`] with the default 16x16 table
    StaticArray,
}

impl CacheKind {
    /// Every strategy, in declaration order
    pub const ALL: [CacheKind; 5] = [
        CacheKind::OrderedMap,
        CacheKind::NestedMap,
        CacheKind::CompositeKey,
        CacheKind::DenseArray,
        CacheKind::StaticArray,
    ];

    /// Short strategy name, matching [`PowCache::name`]
    pub fn name(self) -> &'static str {
        match self {
            CacheKind::OrderedMap => "ordered_map",
            CacheKind::NestedMap => "nested_map",
            CacheKind::CompositeKey => "composite_key",
            CacheKind::DenseArray => "dense_array",
            CacheKind::StaticArray => "static_array",
        }
    }

    /// Creates an empty cache of this kind
    pub fn build<T: Arithmetic>(self) -> Box<dyn PowCache<T>> {
        match self {
            CacheKind::OrderedMap => Box::new(OrderedMapCache::<T>::new()),
            CacheKind::NestedMap => Box::new(NestedMapCache::<T>::new()),
            CacheKind::CompositeKey => Box::new(CompositeKeyCache::<T>::new()),
            CacheKind::DenseArray => Box::new(DenseArrayCache::<T>::new()),
            CacheKind::StaticArray => Box::new(StaticArrayCache::<T, DEFAULT_STATIC_DIM>::new()),
        }
    }
}
