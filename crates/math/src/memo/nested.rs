//! Nested hash-map cache

use std::collections::HashMap;

use parking_lot::Mutex;
use tracing::trace;

use super::PowCache;
use crate::pow::pow_hierarchical;
use crate::traits::Arithmetic;

/// Memoization in a two-level hash map: base bits, then exponent
///
/// O(1) amortized lookup at the cost of one inner map allocation per
/// distinct base.
#[derive(Debug)]
pub struct NestedMapCache<T: Arithmetic> {
    bases: Mutex<HashMap<T::Bits, HashMap<u32, T>>>,
}

impl<T: Arithmetic> NestedMapCache<T> {
    /// Creates an empty cache
    pub fn new() -> Self {
        Self {
            bases: Mutex::new(HashMap::new()),
        }
    }

    /// Number of distinct bases seen so far
    pub fn base_count(&self) -> usize {
        self.bases.lock().len()
    }
}

impl<T: Arithmetic> Default for NestedMapCache<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Arithmetic> PowCache<T> for NestedMapCache<T> {
    fn pow(&self, base: T, exponent: u32) -> T {
        let mut bases = self.bases.lock();
        *bases
            .entry(base.key_bits())
            .or_default()
            .entry(exponent)
            .or_insert_with(|| {
                trace!(?base, exponent, "nested map cache miss");
                pow_hierarchical(base, exponent)
            })
    }

    fn len(&self) -> usize {
        self.bases.lock().values().map(HashMap::len).sum()
    }

    fn name(&self) -> &'static str {
        "nested_map"
    }
}
