// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for cached range-sum queries.
//!
//! This module provides error types for operations in the `range_sum` module,
//! which validates queries against the backing array before touching the cache.

use super::IntervalError;

/// Errors that can occur while answering range queries or applying updates.
///
/// # Examples
///
/// ```rust
/// use adaptive_cache::{CachedRangeSum, RangeAggregator, RangeError};
///
/// let mut sums = CachedRangeSum::new(vec![1, 2, 3], 8);
///
/// match sums.range_sum(0, 7) {
///     Ok(total) => println!("Sum: {}", total),
///     Err(RangeError::OutOfBounds { index, len }) => {
///         eprintln!("Index {} is outside an array of length {}", index, len);
///     }
///     Err(e) => eprintln!("Other error: {}", e),
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RangeError {
    /// The query's left bound is greater than its right bound.
    #[error("Invalid range [{l}, {r}]: left bound exceeds right bound")]
    InvalidRange {
        /// Left (inclusive) bound
        l: usize,
        /// Right (inclusive) bound
        r: usize,
    },

    /// An index falls outside the backing array.
    #[error("Index {index} out of bounds for array of length {len}")]
    OutOfBounds {
        /// The offending index
        index: usize,
        /// Length of the backing array
        len: usize,
    },

    /// A cached answer disagreed with the uncached answer to the same query.
    #[error("Answer {position} mismatched: expected {expected}, got {actual}")]
    Mismatch {
        /// Position of the answer among all range queries
        position: usize,
        /// Sum computed without the cache
        expected: i64,
        /// Sum returned through the cache
        actual: i64,
    },
}

impl RangeError {
    /// Create an `InvalidRange` error for the given bounds.
    pub fn invalid_range(l: usize, r: usize) -> Self {
        RangeError::InvalidRange { l, r }
    }

    /// Create an `OutOfBounds` error.
    pub fn out_of_bounds(index: usize, len: usize) -> Self {
        RangeError::OutOfBounds { index, len }
    }

    /// Create a `Mismatch` error.
    pub fn mismatch(position: usize, expected: i64, actual: i64) -> Self {
        RangeError::Mismatch {
            position,
            expected,
            actual,
        }
    }
}

impl From<IntervalError> for RangeError {
    fn from(err: IntervalError) -> Self {
        match err {
            IntervalError::InvalidRange { l, r } => RangeError::InvalidRange { l, r },
        }
    }
}
