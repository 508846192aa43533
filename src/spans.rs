// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Tracing span creation helpers for adaptive-cache operations.
//!
//! Telemetry concerns are kept apart from the cache logic. Instead of using
//! `#[instrument]` attributes directly on functions, each instrumented operation
//! has a corresponding span helper function in this module.
//!
//! Usage pattern:
//! ```rust,ignore
//! pub fn my_operation(&mut self, param: Type) -> Result<T> {
//!     let span = spans::my_operation(param_value);
//!     let _guard = span.enter();
//!     // Business logic here
//! }
//! ```

use tracing::{Level, Span};

/// Create span for a cached range-sum query.
///
/// Parent: run_range_benchmark span (when driven by the harness)
/// Children: None
#[inline]
pub(crate) fn range_query(l: usize, r: usize) -> Span {
    tracing::trace_span!("adaptive_cache.range_query", l = l, r = r)
}

/// Create span for a point update followed by interval invalidation.
///
/// Parent: run_range_benchmark span (when driven by the harness)
/// Children: None
#[inline]
pub(crate) fn point_update(index: usize) -> Span {
    tracing::trace_span!("adaptive_cache.point_update", index = index)
}

/// Create span for a memoized Fibonacci computation.
///
/// Parent: run_fibonacci_benchmark span (when driven by the harness)
/// Children: None
#[inline]
pub(crate) fn fibonacci(n: u64) -> Span {
    tracing::debug_span!("adaptive_cache.fibonacci", n = n)
}

/// Create span for the range-sum benchmark.
///
/// This is a harness entry point.
///
/// Parent: None (root span for this operation)
/// Children: range_query and point_update spans
#[inline]
pub(crate) fn run_range_benchmark(capacity: usize, array_size: usize, num_queries: usize) -> Span {
    tracing::span!(
        Level::INFO,
        "adaptive_cache.run_range_benchmark",
        capacity = capacity,
        array_size = array_size,
        num_queries = num_queries,
    )
}

/// Create span for the Fibonacci benchmark.
///
/// This is a harness entry point.
///
/// Parent: None (root span for this operation)
/// Children: fibonacci spans
#[inline]
pub(crate) fn run_fibonacci_benchmark(arguments: usize, repeats: u32) -> Span {
    tracing::span!(
        Level::INFO,
        "adaptive_cache.run_fibonacci_benchmark",
        arguments = arguments,
        repeats = repeats,
    )
}
