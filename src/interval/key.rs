// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::IntervalError;

/// Inclusive integer interval `[l, r]` used as an interval cache key
///
/// [`IntervalKey::new`] trusts the caller to pass `l <= r`;
/// [`IntervalKey::try_new`] checks it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct IntervalKey {
    /// Left bound (inclusive)
    pub l: usize,
    /// Right bound (inclusive)
    pub r: usize,
}

impl IntervalKey {
    /// Create an interval key without validating the bounds
    pub const fn new(l: usize, r: usize) -> Self {
        Self { l, r }
    }

    /// Create an interval key, rejecting `l > r`
    ///
    /// # Examples
    ///
    /// ```
    /// use adaptive_cache::IntervalKey;
    ///
    /// assert!(IntervalKey::try_new(3, 9).is_ok());
    /// assert!(IntervalKey::try_new(9, 3).is_err());
    /// ```
    pub fn try_new(l: usize, r: usize) -> Result<Self, IntervalError> {
        if l > r {
            return Err(IntervalError::invalid_range(l, r));
        }
        Ok(Self { l, r })
    }

    /// Check if this interval contains `point`
    pub const fn contains(&self, point: usize) -> bool {
        self.l <= point && point <= self.r
    }

    /// Check if this interval shares at least one point with `[l, r]`
    pub const fn overlaps(&self, l: usize, r: usize) -> bool {
        !(self.r < l || self.l > r)
    }

    /// Number of points covered (inclusive)
    pub const fn len(&self) -> usize {
        if self.r >= self.l {
            self.r - self.l + 1
        } else {
            0
        }
    }

    /// Check if the bounds are reversed
    pub const fn is_empty(&self) -> bool {
        self.r < self.l
    }
}

impl From<(usize, usize)> for IntervalKey {
    fn from((l, r): (usize, usize)) -> Self {
        Self { l, r }
    }
}

impl From<IntervalKey> for (usize, usize) {
    fn from(key: IntervalKey) -> Self {
        (key.l, key.r)
    }
}

impl fmt::Display for IntervalKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.l, self.r)
    }
}
