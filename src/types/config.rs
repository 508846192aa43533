// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Strong types for configuration values
//!
//! These types keep cache sizing values from being confused with array
//! indices, interval bounds or aggregate values.

use serde::{Deserialize, Serialize};

/// Maximum number of entries an [`IntervalLruCache`](crate::IntervalLruCache) holds
///
/// Once the cache holds this many entries, every `put` of a new key evicts
/// the least recently used entry.
///
/// # Examples
///
/// ```
/// use adaptive_cache::CacheCapacity;
///
/// let default = CacheCapacity::DEFAULT;
/// assert_eq!(default.as_usize(), 500);
///
/// let small = CacheCapacity::new(16);
/// assert_eq!(small.as_usize(), 16);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CacheCapacity(usize);

impl CacheCapacity {
    /// Default capacity used by the range-sum workload
    pub const DEFAULT: Self = Self(500);

    /// Small cache, mostly useful in tests
    pub const SMALL: Self = Self(64);

    /// Large cache for wide query mixes
    pub const LARGE: Self = Self(5000);

    /// Create a new capacity
    pub const fn new(entries: usize) -> Self {
        Self(entries)
    }

    /// Get the inner usize value
    pub const fn as_usize(&self) -> usize {
        self.0
    }

    /// Whether a cache of this size can hold anything at all
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Default for CacheCapacity {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl From<usize> for CacheCapacity {
    fn from(value: usize) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for CacheCapacity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} entries", self.0)
    }
}
