// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Strong types for cache recency metadata
//!
//! - [`AccessSequence`]: Monotonic logical clock for deterministic LRU ordering

use serde::{Deserialize, Serialize};

/// Monotonic sequence number for deterministic LRU ordering
///
/// Every `get` hit or `put` on an interval cache stamps the touched entry with
/// the next sequence number. Lower sequence numbers are older, so the entry
/// holding the smallest sequence is the least recently used one.
///
/// Recency is logical, not wall-clock: two touches in the same instant still
/// receive distinct, ordered sequence numbers.
///
/// # Examples
///
/// ```
/// use adaptive_cache::AccessSequence;
///
/// let seq1 = AccessSequence::default();
/// let seq2 = seq1.next();
/// assert!(seq1 < seq2);
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct AccessSequence(u64);

impl AccessSequence {
    /// Returns the next sequence number
    ///
    /// Saturates at `u64::MAX` instead of wrapping around.
    pub fn next(&self) -> Self {
        Self(self.0.saturating_add(1))
    }

    /// Creates a sequence number from a raw value
    ///
    /// This is primarily used for testing counter saturation.
    #[cfg(test)]
    pub(crate) const fn from_u64(seq: u64) -> Self {
        Self(seq)
    }

    /// Get the inner u64 value
    pub const fn as_u64(&self) -> u64 {
        self.0
    }

    /// Whether the counter can no longer advance
    pub const fn is_saturated(&self) -> bool {
        self.0 == u64::MAX
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn access_sequence_ordering() {
        let seq1 = AccessSequence(100);
        let seq2 = AccessSequence(200);
        assert!(seq1 < seq2);
        assert!(seq2 > seq1);
        assert_eq!(seq1, seq1);
    }

    #[test]
    fn access_sequence_next() {
        let seq = AccessSequence(5);
        let next = seq.next();
        assert_eq!(next.as_u64(), 6);
    }

    #[test]
    fn access_sequence_next_saturating() {
        let seq = AccessSequence(u64::MAX);
        let next = seq.next();
        assert_eq!(next.as_u64(), u64::MAX); // Should saturate, not overflow
    }

    #[test]
    fn access_sequence_default() {
        let seq = AccessSequence::default();
        assert_eq!(seq.as_u64(), 0);
    }

    #[test]
    fn access_sequence_serialization() {
        let seq = AccessSequence(42);
        let json = serde_json::to_string(&seq).unwrap();
        assert_eq!(json, "42");

        let deserialized: AccessSequence = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, seq);
    }
}
