// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Memoized Fibonacci over a [`SplayCache`]
//!
//! The recursion asks the cache before computing, and records every value it
//! computes. Base cases (`n < 2`) never touch the cache.
//!
//! The value type is chosen by the caller through [`FibonacciValue`].
//! Fixed-width integers use checked addition, so arguments whose value does not
//! fit fail with [`MemoError::Overflow`] instead of wrapping. [`BigUint`] never
//! overflows and is what the benchmark harness uses.

use std::collections::HashMap;

use num_bigint::BigUint;

use crate::errors::MemoError;
use crate::spans;
use crate::splay::SplayCache;

/// A value type the memoized Fibonacci can be computed in
pub trait FibonacciValue: Clone {
    /// Converts a base case (`0` or `1`)
    fn base(n: u64) -> Self;

    /// Sum of two values, or `None` if it does not fit
    fn checked_sum(&self, other: &Self) -> Option<Self>;
}

impl FibonacciValue for u64 {
    fn base(n: u64) -> Self {
        n
    }

    fn checked_sum(&self, other: &Self) -> Option<Self> {
        self.checked_add(*other)
    }
}

impl FibonacciValue for u128 {
    fn base(n: u64) -> Self {
        u128::from(n)
    }

    fn checked_sum(&self, other: &Self) -> Option<Self> {
        self.checked_add(*other)
    }
}

impl FibonacciValue for BigUint {
    fn base(n: u64) -> Self {
        BigUint::from(n)
    }

    fn checked_sum(&self, other: &Self) -> Option<Self> {
        Some(self + other)
    }
}

/// Computes the `n`-th Fibonacci number, memoizing through `cache`
///
/// # Examples
///
/// ```
/// use adaptive_cache::{fibonacci, SplayCache};
/// use num_bigint::BigUint;
///
/// let mut cache = SplayCache::<u64, u128>::new();
/// assert_eq!(fibonacci(10, &mut cache).unwrap(), 55);
/// // Every n in 2..=10 is now cached
/// assert_eq!(cache.len(), 9);
/// assert!(fibonacci(187, &mut cache).is_err());
///
/// let mut big = SplayCache::<u64, BigUint>::new();
/// assert_eq!(fibonacci(200, &mut big).unwrap().to_string().len(), 42);
/// ```
pub fn fibonacci<V: FibonacciValue>(
    n: u64,
    cache: &mut SplayCache<u64, V>,
) -> Result<V, MemoError> {
    let span = spans::fibonacci(n);
    let _guard = span.enter();

    fibonacci_splay(n, cache)
}

fn fibonacci_splay<V: FibonacciValue>(
    n: u64,
    cache: &mut SplayCache<u64, V>,
) -> Result<V, MemoError> {
    if n < 2 {
        return Ok(V::base(n));
    }
    if let Some(value) = cache.find(&n) {
        return Ok(value.clone());
    }

    let a = fibonacci_splay(n - 1, cache)?;
    let b = fibonacci_splay(n - 2, cache)?;
    let value = a.checked_sum(&b).ok_or_else(|| MemoError::overflow(n))?;

    cache.insert(n, value.clone());
    Ok(value)
}

/// Computes the `n`-th Fibonacci number with an unbounded hash-map memo
///
/// Baseline the benchmark harness compares the splay cache against.
pub fn fibonacci_hashed<V: FibonacciValue>(
    n: u64,
    memo: &mut HashMap<u64, V>,
) -> Result<V, MemoError> {
    if n < 2 {
        return Ok(V::base(n));
    }
    if let Some(value) = memo.get(&n) {
        return Ok(value.clone());
    }

    let a = fibonacci_hashed(n - 1, memo)?;
    let b = fibonacci_hashed(n - 2, memo)?;
    let value = a.checked_sum(&b).ok_or_else(|| MemoError::overflow(n))?;

    memo.insert(n, value.clone());
    Ok(value)
}

/// Unmemoized Fibonacci, exponential in `n`
///
/// Only usable as an oracle for small arguments.
pub fn fibonacci_naive(n: u64) -> u128 {
    if n < 2 {
        u128::from(n)
    } else {
        fibonacci_naive(n - 1) + fibonacci_naive(n - 2)
    }
}
