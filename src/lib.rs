// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! # adaptive-cache
//!
//! Two self-adjusting caches and the workloads that show them off.
//!
//! - [`SplayCache`]: an ordered key-value store backed by a splay tree. Every
//!   lookup and insert moves the touched key to the root, so recently used keys
//!   are cheap to reach again. [`fibonacci`] uses it as a memo.
//! - [`IntervalLruCache`]: a bounded map from inclusive index intervals to
//!   values, evicting the least recently used entry when full and dropping every
//!   interval that covers an updated index. [`CachedRangeSum`] uses it to
//!   memoize range sums over a mutable array.
//!
//! The [`workload`] and [`harness`] modules generate hot-spot query streams and
//! time the cached structures against their uncached baselines.
//!
//! ## Quick start
//!
//! ```rust
//! use adaptive_cache::{CachedRangeSum, IntervalKey, IntervalLruCache, RangeAggregator};
//!
//! let mut cache = IntervalLruCache::new(2);
//! cache.put(IntervalKey::new(0, 4), 10);
//! cache.put(IntervalKey::new(5, 9), 20);
//! assert_eq!(cache.get(&IntervalKey::new(0, 4)), Some(&10));
//!
//! // Index 7 lies in [5, 9] only
//! assert_eq!(cache.invalidate(7), 1);
//! assert!(!cache.contains_key(&IntervalKey::new(5, 9)));
//!
//! let mut sums = CachedRangeSum::new((1..=10).collect(), 16);
//! assert_eq!(sums.range_sum(0, 9)?, 55);
//! # Ok::<(), adaptive_cache::RangeError>(())
//! ```
//!
//! ## Configuration
//!
//! The benchmark binary reads [`CacheConfig::from_env`]; libraries can build a
//! configuration with [`CacheConfigBuilder`].

pub mod config;
pub mod errors;
pub mod harness;
pub mod interval;
pub mod memo;
pub mod range_sum;
pub mod splay;
mod spans;
pub mod types;
pub mod workload;

pub use config::{CacheConfig, CacheConfigBuilder, FibonacciConfig, WorkloadConfig};
pub use errors::{AdaptiveCacheError, ConfigError, IntervalError, MemoError, RangeError};
pub use harness::{
    run_all, run_fibonacci_benchmark, run_range_benchmark, BenchmarkReport, FibonacciTiming,
    RangeBenchmarkReport,
};
pub use interval::{CacheStats, IntervalKey, IntervalLruCache};
pub use memo::{fibonacci, fibonacci_hashed, fibonacci_naive, FibonacciValue};
pub use range_sum::{naive_range_sum, CachedRangeSum, Query, RangeAggregator, UncachedRangeSum};
pub use splay::{SplayCache, SplayNode, SplayStats};
pub use types::cache::AccessSequence;
pub use types::config::CacheCapacity;
pub use workload::{generate_queries, random_array, seeded_rng};
