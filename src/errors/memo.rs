// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for memoized recursive computations.

/// Errors that can occur while computing memoized values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MemoError {
    /// The value for `n` does not fit the result type.
    ///
    /// Fibonacci numbers overflow `u128` starting at `n = 187` and `u64` at `n = 94`.
    #[error("Value for n = {n} overflows the value type")]
    Overflow {
        /// Argument whose value overflowed
        n: u64,
    },

    /// Two memoization strategies produced different values for `n`.
    #[error("Memoized values for n = {n} disagree")]
    Mismatch {
        /// Argument whose values disagreed
        n: u64,
    },
}

impl MemoError {
    /// Create an `Overflow` error for argument `n`.
    pub fn overflow(n: u64) -> Self {
        MemoError::Overflow { n }
    }

    /// Create a `Mismatch` error for argument `n`.
    pub fn mismatch(n: u64) -> Self {
        MemoError::Mismatch { n }
    }
}
