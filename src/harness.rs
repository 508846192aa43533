// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Benchmark harness comparing cached and uncached computations
//!
//! [`run_range_benchmark`] replays one generated workload against an
//! [`UncachedRangeSum`] and a [`CachedRangeSum`] built over identical arrays, and
//! fails if the two ever disagree. [`run_fibonacci_benchmark`] times the
//! splay-memoized Fibonacci against the hash-map baseline.
//!
//! Both produce serializable reports; the binary prints them as JSON.

use std::collections::HashMap;
use std::time::Instant;

use num_bigint::BigUint;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::CacheConfig;
use crate::errors::{AdaptiveCacheError, MemoError, RangeError};
use crate::interval::{CacheStats, IntervalLruCache};
use crate::memo::{fibonacci, fibonacci_hashed};
use crate::range_sum::{CachedRangeSum, Query, RangeAggregator, UncachedRangeSum};
use crate::spans;
use crate::splay::SplayCache;
use crate::workload::{generate_queries, random_array, seeded_rng};

/// Outcome of replaying a workload against both range-sum aggregators
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RangeBenchmarkReport {
    /// Length of the backing array
    pub array_size: usize,
    /// Total queries replayed
    pub num_queries: usize,
    /// How many of those were range queries
    pub range_queries: usize,
    /// How many were point updates
    pub updates: usize,
    /// Wall time for the uncached aggregator, in seconds
    pub uncached_secs: f64,
    /// Wall time for the cached aggregator, in seconds
    pub cached_secs: f64,
    /// `uncached_secs / cached_secs`, or 0 when the cached run took no measurable time
    pub speedup: f64,
    /// Interval cache statistics at the end of the cached run
    pub cache: CacheStats,
}

/// Timing of one Fibonacci argument under both memoization strategies
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FibonacciTiming {
    /// Argument passed to the Fibonacci function
    pub n: u64,
    /// Average seconds per call with a hash-map memo
    pub hashed_secs: f64,
    /// Average seconds per call with a splay-tree memo
    pub splay_secs: f64,
    /// Rotations the splay cache performed across all repeats
    pub rotations: u64,
}

/// Both benchmark reports together
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkReport {
    /// Interval cache capacity used for the range benchmark
    pub capacity: usize,
    /// Range-sum benchmark
    pub range: RangeBenchmarkReport,
    /// Fibonacci benchmark, one entry per argument
    pub fibonacci: Vec<FibonacciTiming>,
}

/// Runs both benchmarks described by `config`
pub fn run_all(config: &CacheConfig) -> Result<BenchmarkReport, AdaptiveCacheError> {
    config.validate()?;

    let range = run_range_benchmark(config)?;
    let timings =
        run_fibonacci_benchmark(&config.fibonacci.arguments(), config.fibonacci.repeats)?;

    Ok(BenchmarkReport {
        capacity: config.capacity.as_usize(),
        range,
        fibonacci: timings,
    })
}

/// Replays a generated workload against cached and uncached range sums
///
/// Every answer from the cached aggregator is checked against the uncached one;
/// a mismatch is reported as an error rather than a timing.
///
/// # Examples
///
/// ```
/// use adaptive_cache::{run_range_benchmark, CacheConfig};
///
/// let report = run_range_benchmark(&CacheConfig::minimal())?;
/// assert_eq!(report.range_queries + report.updates, report.num_queries);
/// assert_eq!(report.cache.lookups(), report.range_queries as u64);
/// # Ok::<(), adaptive_cache::AdaptiveCacheError>(())
/// ```
pub fn run_range_benchmark(
    config: &CacheConfig,
) -> Result<RangeBenchmarkReport, AdaptiveCacheError> {
    let workload = &config.workload;
    let span = spans::run_range_benchmark(
        config.capacity.as_usize(),
        workload.array_size,
        workload.num_queries,
    );
    let _guard = span.enter();

    let mut rng = seeded_rng(workload.seed);
    let values = random_array(workload.array_size, &mut rng);
    let queries = generate_queries(workload, &mut rng)?;

    let mut uncached = UncachedRangeSum::new(values.clone());
    let (uncached_secs, expected) = replay(&mut uncached, &queries)?;

    let mut cached = CachedRangeSum::with_cache(values, IntervalLruCache::from_config(config));
    let (cached_secs, answers) = replay(&mut cached, &queries)?;

    if let Some(position) = expected.iter().zip(&answers).position(|(a, b)| a != b) {
        return Err(RangeError::mismatch(position, expected[position], answers[position]).into());
    }

    let range_queries = queries
        .iter()
        .filter(|q| matches!(q, Query::Range { .. }))
        .count();
    let speedup = if cached_secs > 0.0 {
        uncached_secs / cached_secs
    } else {
        0.0
    };
    let cache = cached.cache_stats();

    info!(
        uncached_secs,
        cached_secs,
        speedup,
        hit_rate = cache.hit_rate(),
        "Range-sum benchmark complete"
    );

    Ok(RangeBenchmarkReport {
        array_size: workload.array_size,
        num_queries: queries.len(),
        range_queries,
        updates: queries.len() - range_queries,
        uncached_secs,
        cached_secs,
        speedup,
        cache,
    })
}

/// Applies every query in order, returning elapsed seconds and the range answers
fn replay<A: RangeAggregator>(
    aggregator: &mut A,
    queries: &[Query],
) -> Result<(f64, Vec<i64>), RangeError> {
    let mut answers = Vec::with_capacity(queries.len());
    let start = Instant::now();
    for query in queries {
        if let Some(sum) = aggregator.apply(query)? {
            answers.push(sum);
        }
    }
    let elapsed = start.elapsed().as_secs_f64();

    debug!(aggregator = aggregator.name(), elapsed, "Replayed workload");
    Ok((elapsed, answers))
}

/// Times Fibonacci for each argument with a hash-map memo and a splay memo
///
/// Each argument gets fresh memos that are reused across its `repeats`, so only
/// the first repeat computes anything. Values are exact [`BigUint`]s, and the
/// run fails with [`MemoError::Mismatch`] if the two strategies ever disagree.
///
/// # Examples
///
/// ```
/// use adaptive_cache::run_fibonacci_benchmark;
///
/// let timings = run_fibonacci_benchmark(&[10, 950], 2)?;
/// assert_eq!(timings.len(), 2);
/// assert_eq!(timings[1].n, 950);
/// # Ok::<(), adaptive_cache::AdaptiveCacheError>(())
/// ```
pub fn run_fibonacci_benchmark(
    arguments: &[u64],
    repeats: u32,
) -> Result<Vec<FibonacciTiming>, AdaptiveCacheError> {
    let span = spans::run_fibonacci_benchmark(arguments.len(), repeats);
    let _guard = span.enter();

    let repeats = repeats.max(1);
    let mut timings = Vec::with_capacity(arguments.len());

    for &n in arguments {
        let mut memo: HashMap<u64, BigUint> = HashMap::new();
        let start = Instant::now();
        let mut hashed = BigUint::default();
        for _ in 0..repeats {
            hashed = fibonacci_hashed(n, &mut memo)?;
        }
        let hashed_secs = start.elapsed().as_secs_f64() / f64::from(repeats);

        let mut cache: SplayCache<u64, BigUint> = SplayCache::new();
        let start = Instant::now();
        let mut splayed = BigUint::default();
        for _ in 0..repeats {
            splayed = fibonacci(n, &mut cache)?;
        }
        let splay_secs = start.elapsed().as_secs_f64() / f64::from(repeats);

        check_agreement(n, &hashed, &splayed)?;
        debug!(n, hashed_secs, splay_secs, "Timed Fibonacci argument");

        timings.push(FibonacciTiming {
            n,
            hashed_secs,
            splay_secs,
            rotations: cache.stats().rotations,
        });
    }

    info!(arguments = timings.len(), "Fibonacci benchmark complete");
    Ok(timings)
}

fn check_agreement<V: PartialEq>(n: u64, hashed: &V, splayed: &V) -> Result<(), MemoError> {
    if hashed == splayed {
        Ok(())
    } else {
        Err(MemoError::mismatch(n))
    }
}
