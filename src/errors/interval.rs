// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for interval keys.
//!
//! The interval cache itself never fails. The only error in this module is
//! raised when a caller asks for a checked [`IntervalKey`](crate::IntervalKey)
//! with its bounds reversed.

/// Errors that can occur when building interval keys.
///
/// # Examples
///
/// ```rust
/// use adaptive_cache::{IntervalError, IntervalKey};
///
/// match IntervalKey::try_new(10, 2) {
///     Ok(key) => println!("Key: {}", key),
///     Err(IntervalError::InvalidRange { l, r }) => {
///         eprintln!("Reversed interval [{}, {}]", l, r);
///     }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IntervalError {
    /// The left bound is greater than the right bound.
    #[error("Invalid interval [{l}, {r}]: left bound exceeds right bound")]
    InvalidRange {
        /// Left (inclusive) bound
        l: usize,
        /// Right (inclusive) bound
        r: usize,
    },
}

impl IntervalError {
    /// Create an `InvalidRange` error for the given bounds.
    pub fn invalid_range(l: usize, r: usize) -> Self {
        IntervalError::InvalidRange { l, r }
    }
}
