//! Composite-key hash-map cache

use std::collections::hash_map::DefaultHasher;
use std::collections::HashMap;
use std::hash::{Hash, Hasher};

use parking_lot::Mutex;
use tracing::trace;

use super::PowCache;
use crate::pow::pow_hierarchical;
use crate::traits::Arithmetic;

/// 2^64 / φ, the usual hash-combine mixing constant
pub const GOLDEN_RATIO_64: u64 = 0x9e37_79b9_7f4a_7c15;

/// Mixes two 64-bit hashes into one
///
/// `h1 ^ (h2 + GOLDEN_RATIO_64 + (h1 << 6) + (h1 >> 2))` with wrapping
/// addition.
///
/// # Example
///
/// ```rust
/// use powkit_math::memo::{combine_hashes, GOLDEN_RATIO_64};
///
/// assert_eq!(combine_hashes(0, 0), GOLDEN_RATIO_64);
/// assert_ne!(combine_hashes(1, 2), combine_hashes(2, 1));
/// ```
#[inline]
pub const fn combine_hashes(h1: u64, h2: u64) -> u64 {
    h1 ^ h2
        .wrapping_add(GOLDEN_RATIO_64)
        .wrapping_add(h1 << 6)
        .wrapping_add(h1 >> 2)
}

fn hash_one<V: Hash>(value: &V) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

/// `(base, exponent)` key hashed as a single combined value
///
/// Equality still compares both fields exactly; only the hash is combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompositeKey<B> {
    /// Exact base representation
    pub base: B,
    /// Exponent
    pub exponent: u32,
}

impl<B: Hash> CompositeKey<B> {
    /// The combined hash written into the map's hasher
    pub fn combined_hash(&self) -> u64 {
        combine_hashes(hash_one(&self.base), hash_one(&self.exponent))
    }
}

impl<B: Hash> Hash for CompositeKey<B> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.combined_hash());
    }
}

/// Memoization in a single-level hash map with a combined-hash key
#[derive(Debug)]
pub struct CompositeKeyCache<T: Arithmetic> {
    entries: Mutex<HashMap<CompositeKey<T::Bits>, T>>,
}

impl<T: Arithmetic> CompositeKeyCache<T> {
    /// Creates an empty cache
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
        }
    }
}

impl<T: Arithmetic> Default for CompositeKeyCache<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Arithmetic> PowCache<T> for CompositeKeyCache<T> {
    fn pow(&self, base: T, exponent: u32) -> T {
        let key = CompositeKey {
            base: base.key_bits(),
            exponent,
        };
        let mut entries = self.entries.lock();
        *entries.entry(key).or_insert_with(|| {
            trace!(?base, exponent, "composite key cache miss");
            pow_hierarchical(base, exponent)
        })
    }

    fn len(&self) -> usize {
        self.entries.lock().len()
    }

    fn name(&self) -> &'static str {
        "composite_key"
    }
}
