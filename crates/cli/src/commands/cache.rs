//! Cache-consistency report.
//!
//! Drives each cache strategy over the integer-exponent datasets from one or
//! more threads and counts results that differ from the unmemoized value.

use std::fmt;
use std::thread;

use anyhow::{anyhow, bail, Result};
use clap::{Args, ValueEnum};
use powkit_math::datasets::{FLOAT_BASES, INT_BASES, INT_EXPONENTS};
use powkit_math::pow::pow_hierarchical;
use powkit_math::{Arithmetic, CacheKind, PowCache};
use serde::Serialize;
use tracing::{debug, info};

use super::{emit, OutputFormat};

/// Cache strategy selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Strategy {
    /// Ordered map keyed by (base, exponent)
    OrderedMap,
    /// Hash map of hash maps
    NestedMap,
    /// Single hash map with a combined-hash key
    CompositeKey,
    /// Growable two-dimensional array
    DenseArray,
    /// Fixed 16x16 array
    StaticArray,
}

impl From<Strategy> for CacheKind {
    fn from(strategy: Strategy) -> Self {
        match strategy {
            Strategy::OrderedMap => CacheKind::OrderedMap,
            Strategy::NestedMap => CacheKind::NestedMap,
            Strategy::CompositeKey => CacheKind::CompositeKey,
            Strategy::DenseArray => CacheKind::DenseArray,
            Strategy::StaticArray => CacheKind::StaticArray,
        }
    }
}

/// Arguments for `powkit cache`.
#[derive(Args, Debug)]
pub struct CacheArgs {
    /// Only check this strategy (default: all)
    #[arg(short, long, value_enum)]
    strategy: Option<Strategy>,

    /// Passes over the dataset per thread
    #[arg(short, long, default_value_t = 3)]
    rounds: usize,

    /// Threads sharing each cache
    #[arg(short, long, default_value_t = 1)]
    threads: usize,
}

/// One cache strategy on one operand type.
#[derive(Debug, Clone, Serialize)]
pub struct CacheRow {
    /// Strategy name
    pub strategy: &'static str,
    /// Operand type
    pub operand: &'static str,
    /// Total `pow` calls
    pub lookups: usize,
    /// Entries held after the run
    pub entries: usize,
    /// Calls whose result differed from the unmemoized value
    pub mismatches: usize,
}

/// Results of a cache-consistency run.
#[derive(Debug, Clone, Serialize)]
pub struct CacheReport {
    /// Threads per cache
    pub threads: usize,
    /// Passes per thread
    pub rounds: usize,
    /// One row per strategy and operand type
    pub rows: Vec<CacheRow>,
}

impl CacheReport {
    /// Total mismatches over every row.
    pub fn mismatches(&self) -> usize {
        self.rows.iter().map(|row| row.mismatches).sum()
    }
}

impl fmt::Display for CacheReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let title = format!(
            "Cache consistency ({} thread(s), {} round(s))",
            self.threads, self.rounds
        );
        writeln!(f, "{}", title)?;
        writeln!(f, "{}", "─".repeat(title.chars().count()))?;
        writeln!(
            f,
            "{:<14} {:<8} {:>8} {:>8} {:>10}",
            "strategy", "operand", "lookups", "entries", "mismatches"
        )?;
        for row in &self.rows {
            writeln!(
                f,
                "{:<14} {:<8} {:>8} {:>8} {:>10}",
                row.strategy, row.operand, row.lookups, row.entries, row.mismatches
            )?;
        }
        Ok(())
    }
}

/// Execute the cache-consistency report.
pub fn execute(args: &CacheArgs, format: OutputFormat) -> Result<()> {
    if args.threads == 0 {
        bail!("--threads must be at least 1");
    }

    let kinds: Vec<CacheKind> = match args.strategy {
        Some(strategy) => vec![strategy.into()],
        None => CacheKind::ALL.to_vec(),
    };

    let report = run(&kinds, args.threads, args.rounds)?;
    emit(&report, format)?;

    let mismatches = report.mismatches();
    if mismatches > 0 {
        bail!("{} cached result(s) differed from the unmemoized value", mismatches);
    }
    Ok(())
}

/// Runs every kind in `kinds` over the i64 and f64 datasets.
pub fn run(kinds: &[CacheKind], threads: usize, rounds: usize) -> Result<CacheReport> {
    let mut rows = Vec::with_capacity(kinds.len() * 2);
    for &kind in kinds {
        rows.push(check(kind, "i64", &INT_BASES, threads, rounds)?);
        rows.push(check(kind, "f64", &FLOAT_BASES, threads, rounds)?);
    }
    Ok(CacheReport {
        threads,
        rounds,
        rows,
    })
}

fn check<T: Arithmetic>(
    kind: CacheKind,
    operand: &'static str,
    bases: &[T],
    threads: usize,
    rounds: usize,
) -> Result<CacheRow> {
    let cache = kind.build::<T>();
    let cache: &dyn PowCache<T> = cache.as_ref();

    let per_thread = thread::scope(|scope| {
        let handles: Vec<_> = (0..threads)
            .map(|worker| {
                scope.spawn(move || {
                    let mut lookups = 0usize;
                    let mut mismatches = 0usize;
                    for _ in 0..rounds {
                        for &base in bases {
                            for &exponent in &INT_EXPONENTS {
                                lookups += 1;
                                let cached = cache.pow(base, exponent);
                                let direct = pow_hierarchical(base, exponent);
                                if cached.key_bits() != direct.key_bits() {
                                    debug!(worker, ?base, exponent, ?cached, ?direct, "mismatch");
                                    mismatches += 1;
                                }
                            }
                        }
                    }
                    (lookups, mismatches)
                })
            })
            .collect();

        handles
            .into_iter()
            .map(|handle| handle.join().map_err(|_| anyhow!("cache worker panicked")))
            .collect::<Result<Vec<_>>>()
    })?;

    let (lookups, mismatches) = per_thread
        .iter()
        .fold((0, 0), |(lookups, mismatches), &(l, m)| (lookups + l, mismatches + m));

    info!(
        strategy = kind.name(),
        operand,
        lookups,
        entries = cache.len(),
        mismatches,
        "cache checked"
    );

    Ok(CacheRow {
        strategy: kind.name(),
        operand,
        lookups,
        entries: cache.len(),
        mismatches,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strategy_maps_to_kind() {
        assert_eq!(CacheKind::from(Strategy::DenseArray), CacheKind::DenseArray);
        assert_eq!(CacheKind::from(Strategy::StaticArray).name(), "static_array");
    }

    #[test]
    fn test_every_strategy_is_consistent() {
        let report = run(&CacheKind::ALL, 1, 2).expect("run succeeds");
        assert_eq!(report.rows.len(), 10);
        assert_eq!(report.mismatches(), 0);
        for row in &report.rows {
            assert_eq!(row.lookups, 2 * 5 * INT_EXPONENTS.len(), "{}", row.strategy);
        }
    }

    #[test]
    fn test_threads_share_one_cache() {
        let report = run(&[CacheKind::CompositeKey], 4, 1).expect("run succeeds");
        let ints = &report.rows[0];
        assert_eq!(ints.lookups, 4 * INT_BASES.len() * INT_EXPONENTS.len());
        assert_eq!(ints.entries, INT_BASES.len() * INT_EXPONENTS.len());
        assert_eq!(ints.mismatches, 0);
    }

    #[test]
    fn test_static_array_skips_out_of_range_floats() {
        let report = run(&[CacheKind::StaticArray], 1, 1).expect("run succeeds");
        let floats = report.rows.iter().find(|row| row.operand == "f64").expect("f64 row");
        // none of the float bases is a non-negative integer
        assert_eq!(floats.entries, 0);
        assert_eq!(floats.mismatches, 0);
    }
}
