// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Interval-keyed LRU caching for aggregates over mutable arrays
//!
//! This module provides:
//!
//! - [`IntervalKey`]: an inclusive `[l, r]` interval used as a cache key
//! - [`IntervalLruCache`]: a fixed-capacity cache evicting in strict
//!   least-recently-used order, with point invalidation
//! - [`CacheStats`]: hit, miss, eviction and invalidation counters
//!
//! # Examples
//!
//! ```rust
//! use adaptive_cache::{IntervalKey, IntervalLruCache};
//!
//! let mut cache = IntervalLruCache::new(500);
//! cache.put(IntervalKey::new(0, 5), 21);
//! cache.put(IntervalKey::new(10, 15), 75);
//!
//! // A write to index 3 makes the cached sum over [0, 5] stale
//! cache.invalidate(3);
//!
//! assert!(cache.get(&IntervalKey::new(0, 5)).is_none());
//! assert_eq!(cache.get(&IntervalKey::new(10, 15)), Some(&75));
//! println!("{}", cache.stats());
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

mod key;
mod lru;

pub use key::IntervalKey;
pub use lru::IntervalLruCache;

/// Statistics about interval cache performance
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheStats {
    /// Number of cache hits (successful retrievals)
    pub hits: u64,
    /// Number of cache misses (key not found)
    pub misses: u64,
    /// Number of entries evicted due to the capacity limit
    pub evictions: u64,
    /// Number of entries removed by point or range invalidation
    pub invalidations: u64,
    /// Current number of entries in the cache
    pub entries: usize,
}

impl CacheStats {
    /// Calculates the cache hit rate as a percentage (0.0 to 100.0)
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            (self.hits as f64 / total as f64) * 100.0
        }
    }

    /// Total number of `get` calls observed
    pub fn lookups(&self) -> u64 {
        self.hits + self.misses
    }
}

impl fmt::Display for CacheStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hits={}, misses={}, evictions={}, invalidations={}, entries={}, hit_rate={:.1}%",
            self.hits,
            self.misses,
            self.evictions,
            self.invalidations,
            self.entries,
            self.hit_rate()
        )
    }
}
