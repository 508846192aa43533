// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Range-sum queries over a mutable array, with and without interval caching
//!
//! [`CachedRangeSum`] follows the memoization protocol for an
//! [`IntervalLruCache`]:
//!
//! - on a range query, `get` the interval; on a miss, sum the array over
//!   `[l, r]` and `put` the result
//! - on a point update, write the array first, then `invalidate` the index so
//!   no stale sum covering it can be returned afterwards
//!
//! [`UncachedRangeSum`] answers the same queries by summing every time and is
//! the baseline for the benchmark harness. Both implement [`RangeAggregator`].
//!
//! # Examples
//!
//! ```rust
//! use adaptive_cache::{CachedRangeSum, Query, RangeAggregator};
//!
//! let mut sums = CachedRangeSum::new(vec![1, 2, 3, 4, 5], 8);
//!
//! assert_eq!(sums.range_sum(1, 3)?, 9);
//! assert_eq!(sums.range_sum(1, 3)?, 9); // served from cache
//! assert_eq!(sums.cache_stats().hits, 1);
//!
//! sums.apply(&Query::Update { index: 2, value: 30 })?;
//! assert_eq!(sums.range_sum(1, 3)?, 36);
//! # Ok::<(), adaptive_cache::RangeError>(())
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::RangeError;
use crate::interval::{CacheStats, IntervalKey, IntervalLruCache};
use crate::spans;

/// A tagged operation against the backing array
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Query {
    /// Sum of the array over `[l, r]`, inclusive
    Range {
        /// Left bound (inclusive)
        l: usize,
        /// Right bound (inclusive)
        r: usize,
    },
    /// Overwrite the element at `index`
    Update {
        /// Position to overwrite
        index: usize,
        /// New element value
        value: i64,
    },
}

/// Answers range-sum queries and applies point updates over an owned array
pub trait RangeAggregator {
    /// Sum of the array over `[l, r]`, inclusive
    fn range_sum(&mut self, l: usize, r: usize) -> Result<i64, RangeError>;

    /// Overwrites the element at `index`
    fn update(&mut self, index: usize, value: i64) -> Result<(), RangeError>;

    /// Current contents of the backing array
    fn values(&self) -> &[i64];

    /// Returns a human-readable name for this aggregator
    ///
    /// Used for logging and reports.
    fn name(&self) -> &'static str;

    /// Dispatches a tagged query
    ///
    /// Returns the sum for range queries and `None` for updates.
    fn apply(&mut self, query: &Query) -> Result<Option<i64>, RangeError> {
        match *query {
            Query::Range { l, r } => self.range_sum(l, r).map(Some),
            Query::Update { index, value } => self.update(index, value).map(|()| None),
        }
    }
}

/// Sums `values` over `[l, r]` without caching
///
/// # Examples
///
/// ```rust
/// use adaptive_cache::naive_range_sum;
///
/// assert_eq!(naive_range_sum(&[5, 6, 7], 0, 2).unwrap(), 18);
/// assert!(naive_range_sum(&[5, 6, 7], 2, 1).is_err());
/// assert!(naive_range_sum(&[5, 6, 7], 0, 3).is_err());
/// ```
pub fn naive_range_sum(values: &[i64], l: usize, r: usize) -> Result<i64, RangeError> {
    check_range(values.len(), l, r)?;
    Ok(values[l..=r].iter().sum())
}

/// Validates `[l, r]` against an array of length `len`
fn check_range(len: usize, l: usize, r: usize) -> Result<IntervalKey, RangeError> {
    let key = IntervalKey::try_new(l, r)?;
    if r >= len {
        return Err(RangeError::out_of_bounds(r, len));
    }
    Ok(key)
}

fn check_index(len: usize, index: usize) -> Result<(), RangeError> {
    if index >= len {
        return Err(RangeError::out_of_bounds(index, len));
    }
    Ok(())
}

/// Range sums memoized in an [`IntervalLruCache`]
#[derive(Debug)]
pub struct CachedRangeSum {
    values: Vec<i64>,
    cache: IntervalLruCache<i64>,
}

impl CachedRangeSum {
    /// Creates an aggregator over `values` with a cache of `capacity` entries
    pub fn new(values: Vec<i64>, capacity: usize) -> Self {
        Self::with_cache(values, IntervalLruCache::new(capacity))
    }

    /// Creates an aggregator over `values` using an existing cache
    ///
    /// The cache should be empty or hold sums that are valid for `values`.
    pub fn with_cache(values: Vec<i64>, cache: IntervalLruCache<i64>) -> Self {
        Self { values, cache }
    }

    /// The underlying interval cache
    pub fn cache(&self) -> &IntervalLruCache<i64> {
        &self.cache
    }

    /// Current interval cache statistics
    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    /// Gives back the backing array
    pub fn into_values(self) -> Vec<i64> {
        self.values
    }
}

impl RangeAggregator for CachedRangeSum {
    fn range_sum(&mut self, l: usize, r: usize) -> Result<i64, RangeError> {
        let span = spans::range_query(l, r);
        let _guard = span.enter();

        let key = check_range(self.values.len(), l, r)?;
        if let Some(sum) = self.cache.get(&key) {
            return Ok(*sum);
        }

        let sum = self.values[l..=r].iter().sum();
        self.cache.put(key, sum);
        Ok(sum)
    }

    fn update(&mut self, index: usize, value: i64) -> Result<(), RangeError> {
        let span = spans::point_update(index);
        let _guard = span.enter();

        check_index(self.values.len(), index)?;
        // Write before invalidating so no later get can observe a stale sum
        self.values[index] = value;
        self.cache.invalidate(index);
        Ok(())
    }

    fn values(&self) -> &[i64] {
        &self.values
    }

    fn name(&self) -> &'static str {
        "CachedRangeSum"
    }
}

/// Range sums recomputed on every query
#[derive(Debug, Clone)]
pub struct UncachedRangeSum {
    values: Vec<i64>,
}

impl UncachedRangeSum {
    /// Creates an aggregator over `values`
    pub fn new(values: Vec<i64>) -> Self {
        Self { values }
    }
}

impl RangeAggregator for UncachedRangeSum {
    fn range_sum(&mut self, l: usize, r: usize) -> Result<i64, RangeError> {
        naive_range_sum(&self.values, l, r)
    }

    fn update(&mut self, index: usize, value: i64) -> Result<(), RangeError> {
        check_index(self.values.len(), index)?;
        self.values[index] = value;
        Ok(())
    }

    fn values(&self) -> &[i64] {
        &self.values
    }

    fn name(&self) -> &'static str {
        "UncachedRangeSum"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_miss_then_hit() {
        let mut sums = CachedRangeSum::new(vec![1, 2, 3, 4], 4);

        assert_eq!(sums.range_sum(0, 3).unwrap(), 10);
        assert_eq!(sums.range_sum(0, 3).unwrap(), 10);

        let stats = sums.cache_stats();
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.entries, 1);
    }

    #[test]
    fn test_update_invalidates_overlapping_sums() {
        let mut sums = CachedRangeSum::new(vec![1; 20], 8);
        sums.range_sum(0, 5).unwrap();
        sums.range_sum(10, 15).unwrap();

        sums.update(3, 100).unwrap();

        assert!(!sums.cache().contains_key(&IntervalKey::new(0, 5)));
        assert!(sums.cache().contains_key(&IntervalKey::new(10, 15)));
        assert_eq!(sums.range_sum(0, 5).unwrap(), 105);
        assert_eq!(sums.range_sum(10, 15).unwrap(), 6);
    }

    #[test]
    fn test_invalid_range_is_rejected_before_cache() {
        let mut sums = CachedRangeSum::new(vec![1, 2, 3], 4);

        assert_eq!(sums.range_sum(2, 1), Err(RangeError::invalid_range(2, 1)));
        assert_eq!(sums.range_sum(0, 3), Err(RangeError::out_of_bounds(3, 3)));
        assert_eq!(sums.update(5, 1), Err(RangeError::out_of_bounds(5, 3)));

        let stats = sums.cache_stats();
        assert_eq!(stats.hits + stats.misses, 0);
    }

    #[test]
    fn test_apply_dispatches() {
        let mut sums = UncachedRangeSum::new(vec![2, 4, 6]);

        assert_eq!(sums.apply(&Query::Range { l: 0, r: 2 }).unwrap(), Some(12));
        assert_eq!(
            sums.apply(&Query::Update { index: 0, value: 10 }).unwrap(),
            None
        );
        assert_eq!(sums.values(), &[10, 4, 6]);
        assert_eq!(sums.apply(&Query::Range { l: 0, r: 0 }).unwrap(), Some(10));
    }

    #[test]
    fn test_cached_matches_uncached() {
        let values: Vec<i64> = (1..=50).collect();
        let mut cached = CachedRangeSum::new(values.clone(), 3);
        let mut uncached = UncachedRangeSum::new(values);

        let queries = [
            Query::Range { l: 0, r: 49 },
            Query::Range { l: 10, r: 20 },
            Query::Update { index: 15, value: -7 },
            Query::Range { l: 10, r: 20 },
            Query::Range { l: 0, r: 49 },
            Query::Range { l: 30, r: 31 },
            Query::Range { l: 40, r: 45 },
            Query::Update { index: 49, value: 0 },
            Query::Range { l: 0, r: 49 },
            Query::Range { l: 30, r: 31 },
        ];

        for query in &queries {
            assert_eq!(cached.apply(query).unwrap(), uncached.apply(query).unwrap());
        }
        assert_eq!(cached.values(), uncached.values());
        assert_eq!(cached.name(), "CachedRangeSum");
        assert_eq!(uncached.name(), "UncachedRangeSum");
    }

    #[test]
    fn test_query_serialization() {
        let query = Query::Update { index: 3, value: 9 };
        let json = serde_json::to_string(&query).unwrap();
        let back: Query = serde_json::from_str(&json).unwrap();
        assert_eq!(back, query);
    }
}
