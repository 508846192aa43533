// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Test helpers for adaptive-cache integration tests
//!
//! Provides a straightforward reference LRU to check the interval cache
//! against, plus small assertions shared by several test files.

#![allow(dead_code)]

use adaptive_cache::{IntervalKey, IntervalLruCache, SplayCache};

/// Reference interval LRU kept as a vector, least recently used first
///
/// Every operation is linear, which keeps the model obviously correct.
///
/// # Example
///
/// ```rust,ignore
/// let mut model = ModelLru::new(2);
/// model.put(IntervalKey::new(0, 1), 5);
/// assert_eq!(model.get(&IntervalKey::new(0, 1)), Some(5));
/// ```
#[derive(Debug, Clone)]
pub struct ModelLru {
    capacity: usize,
    entries: Vec<(IntervalKey, i64)>,
}

impl ModelLru {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            entries: Vec::new(),
        }
    }

    pub fn get(&mut self, key: &IntervalKey) -> Option<i64> {
        let position = self.entries.iter().position(|(k, _)| k == key)?;
        let entry = self.entries.remove(position);
        self.entries.push(entry);
        Some(entry.1)
    }

    pub fn put(&mut self, key: IntervalKey, value: i64) -> Option<(IntervalKey, i64)> {
        if let Some(position) = self.entries.iter().position(|(k, _)| *k == key) {
            self.entries.remove(position);
        }
        self.entries.push((key, value));
        if self.entries.len() > self.capacity {
            Some(self.entries.remove(0))
        } else {
            None
        }
    }

    pub fn invalidate(&mut self, point: usize) -> usize {
        let before = self.entries.len();
        self.entries.retain(|(k, _)| !(k.l <= point && point <= k.r));
        before - self.entries.len()
    }

    pub fn keys(&self) -> Vec<IntervalKey> {
        self.entries.iter().map(|(k, _)| *k).collect()
    }
}

/// Asserts the cache holds exactly the model's keys in the model's recency order
pub fn assert_matches_model(cache: &IntervalLruCache<i64>, model: &ModelLru) {
    let actual: Vec<IntervalKey> = cache.keys_by_recency().copied().collect();
    assert_eq!(actual, model.keys(), "recency order diverged from model");
    for (key, value) in &model.entries {
        assert_eq!(cache.peek(key), Some(value), "value diverged for {key}");
    }
}

/// Returns `true` if the in-order key sequence is strictly increasing
pub fn is_strictly_increasing<K: Ord, V>(cache: &SplayCache<K, V>) -> bool {
    let keys: Vec<&K> = cache.keys().collect();
    keys.windows(2).all(|pair| pair[0] < pair[1])
}

/// Shorthand for building interval keys in tests
pub fn key(l: usize, r: usize) -> IntervalKey {
    IntervalKey::new(l, r)
}
