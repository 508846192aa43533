// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Default values and limits
//!
//! This module centralizes the magic numbers of the range-sum workload and the
//! Fibonacci benchmark.

/// Workload defaults for the cached range-sum benchmark
pub mod workload {
    /// Length of the backing array
    pub const ARRAY_SIZE: usize = 10_000;

    /// Number of generated queries
    pub const NUM_QUERIES: usize = 5_000;

    /// Smallest array that still fits a maximal hot spot
    pub const MIN_ARRAY_SIZE: usize = 1_000;

    /// Number of hot-spot ranges most queries cluster around
    pub const HOT_SPOT_COUNT: usize = 5;

    /// Share of queries that are range queries (the rest are updates)
    pub const RANGE_QUERY_RATIO: f64 = 0.8;

    /// Share of range queries that target a hot spot
    pub const HOT_SPOT_RATIO: f64 = 0.8;

    /// Maximum shift applied to both bounds of a hot-spot query
    pub const HOT_SPOT_JITTER: i64 = 5;

    /// Inclusive bounds for the width added to a hot spot's left bound
    pub const HOT_SPOT_SPAN: (usize, usize) = (100, 999);

    /// Inclusive bounds for the width added to a random query's left bound
    pub const RANDOM_SPAN: (usize, usize) = (20, 100);

    /// Inclusive bounds for array values and update values
    pub const VALUE_RANGE: (i64, i64) = (1, 1_000);
}

/// Defaults for the Fibonacci memoization benchmark
pub mod fibonacci {
    /// Largest `n` accepted; the memo recurses once per argument below it
    pub const MAX_N: u64 = 5_000;

    /// Largest `n` benchmarked by default
    pub const DEFAULT_MAX_N: u64 = 950;

    /// Distance between benchmarked values of `n`
    pub const DEFAULT_STEP: u64 = 50;

    /// Timed repetitions averaged per `n`
    pub const DEFAULT_REPEATS: u32 = 5;
}
