//! Ordered-map cache

use std::collections::BTreeMap;

use parking_lot::Mutex;
use tracing::trace;

use super::PowCache;
use crate::pow::pow_hierarchical;
use crate::traits::Arithmetic;

/// Memoization in a `BTreeMap` keyed by `(base bits, exponent)`
///
/// O(log n) lookup and insert with a total order on the key tuple.
#[derive(Debug)]
pub struct OrderedMapCache<T: Arithmetic> {
    entries: Mutex<BTreeMap<(T::Bits, u32), T>>,
}

impl<T: Arithmetic> OrderedMapCache<T> {
    /// Creates an empty cache
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(BTreeMap::new()),
        }
    }
}

impl<T: Arithmetic> Default for OrderedMapCache<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Arithmetic> PowCache<T> for OrderedMapCache<T> {
    fn pow(&self, base: T, exponent: u32) -> T {
        let mut entries = self.entries.lock();
        *entries
            .entry((base.key_bits(), exponent))
            .or_insert_with(|| {
                trace!(?base, exponent, "ordered map cache miss");
                pow_hierarchical(base, exponent)
            })
    }

    fn len(&self) -> usize {
        self.entries.lock().len()
    }

    fn name(&self) -> &'static str {
        "ordered_map"
    }
}
