// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for the adaptive-cache library.
//!
//! The two caches are total: lookups signal absence with `Option`, inserts
//! always succeed. Errors only arise at the edges, where callers build keys,
//! run range queries against a backing array, compute memoized values or load
//! configuration. This module follows a hybrid approach:
//!
//! - **Module-specific errors** for fine-grained handling (`RangeError`,
//!   `MemoError`, etc.)
//! - **Unified error type** (`AdaptiveCacheError`) for callers that do not need
//!   to distinguish between error sources
//!
//! # Examples
//!
//! ```rust
//! use adaptive_cache::{fibonacci, AdaptiveCacheError, CachedRangeSum, RangeAggregator, SplayCache};
//!
//! fn run() -> Result<u128, AdaptiveCacheError> {
//!     let mut sums = CachedRangeSum::new(vec![4, 5, 7], 16);
//!     let total = sums.range_sum(0, 2)?;
//!
//!     let mut memo = SplayCache::new();
//!     let fib = fibonacci(total as u64, &mut memo)?;
//!     Ok(fib)
//! }
//!
//! assert_eq!(run().unwrap(), 987);
//! ```

mod config;
mod interval;
mod memo;
mod range;

pub use config::ConfigError;
pub use interval::IntervalError;
pub use memo::MemoError;
pub use range::RangeError;

/// Unified error type for all adaptive-cache operations.
///
/// All module-specific error types convert into `AdaptiveCacheError` via `From`
/// implementations, so `?` propagates them naturally.
#[derive(Debug, thiserror::Error)]
pub enum AdaptiveCacheError {
    /// Error from building an interval key.
    #[error("Interval error: {0}")]
    Interval(#[from] IntervalError),

    /// Error from a range query or point update.
    #[error("Range query error: {0}")]
    Range(#[from] RangeError),

    /// Error from a memoized computation.
    #[error("Memoization error: {0}")]
    Memo(#[from] MemoError),

    /// Error from configuration loading or validation.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}
