// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Self-adjusting splay-tree memo cache
//!
//! [`SplayCache`] stores values in a binary search tree that restructures
//! itself on every access: the accessed key (or its nearest neighbor on the
//! search path, when absent) is rotated up to the root. Repeatedly or recently
//! used keys therefore stay close to the root, and any sequence of operations
//! costs amortized `O(log n)` per operation even though a single operation can
//! take `O(n)`.
//!
//! The tree is the only store. [`SplayCache::find`] splays and then reads the
//! root, so the rotation machinery is exercised on the read path as well as on
//! inserts. Entries are never evicted; the cache grows until it is cleared or
//! dropped.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

mod node;

pub use node::SplayNode;
use node::{splay, Link};

/// Statistics about splay cache activity
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplayStats {
    /// Number of `find` calls that located their key
    pub hits: u64,
    /// Number of `find` calls that did not
    pub misses: u64,
    /// Total rotations performed by splaying
    pub rotations: u64,
    /// Current number of entries in the tree
    pub entries: usize,
}

impl SplayStats {
    /// Calculates the hit rate as a percentage (0.0 to 100.0)
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            (self.hits as f64 / total as f64) * 100.0
        }
    }
}

impl fmt::Display for SplayStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hits={}, misses={}, rotations={}, entries={}, hit_rate={:.1}%",
            self.hits,
            self.misses,
            self.rotations,
            self.entries,
            self.hit_rate()
        )
    }
}

/// Splay-tree cache keyed by a totally ordered scalar
///
/// # Examples
///
/// ```
/// use adaptive_cache::SplayCache;
///
/// let mut cache = SplayCache::new();
/// cache.insert(10u64, "ten");
/// cache.insert(20, "twenty");
/// cache.insert(5, "five");
///
/// assert_eq!(cache.find(&20), Some(&"twenty"));
/// // The accessed key is now the root
/// assert_eq!(cache.root_key(), Some(&20));
/// assert_eq!(cache.find(&7), None);
///
/// let keys: Vec<_> = cache.keys().copied().collect();
/// assert_eq!(keys, vec![5, 10, 20]);
/// ```
///
/// # Performance
///
/// - Insert / find: amortized `O(log n)`, worst case `O(n)` for a single call
/// - Peek: `O(height)` without restructuring
/// - Memory: one heap node per entry
pub struct SplayCache<K, V> {
    root: Link<K, V>,
    stats: SplayStats,
}

impl<K: Ord, V> SplayCache<K, V> {
    /// Creates an empty cache
    pub fn new() -> Self {
        Self {
            root: None,
            stats: SplayStats::default(),
        }
    }

    /// Records `value` under `key`
    ///
    /// Splays toward `key` first. If the root then holds `key`, its value is
    /// replaced and the tree shape is left as the splay produced it. Otherwise a
    /// new root node is spliced in: the old root becomes its right child when
    /// `key` is smaller (taking the old root's left subtree along to the new
    /// node) and its left child in the mirror case.
    pub fn insert(&mut self, key: K, value: V) {
        let Some(root) = self.root.take() else {
            self.root = Some(SplayNode::leaf(key, value));
            self.stats.entries = 1;
            return;
        };

        let mut root = splay(root, &key, &mut self.stats.rotations);

        let new_root = match key.cmp(&root.key) {
            Ordering::Equal => {
                root.value = value;
                root
            }
            Ordering::Less => {
                let mut node = SplayNode::leaf(key, value);
                node.left = root.left.take();
                node.right = Some(root);
                self.stats.entries += 1;
                debug!(entries = self.stats.entries, "Inserted new splay cache entry");
                node
            }
            Ordering::Greater => {
                let mut node = SplayNode::leaf(key, value);
                node.right = root.right.take();
                node.left = Some(root);
                self.stats.entries += 1;
                debug!(entries = self.stats.entries, "Inserted new splay cache entry");
                node
            }
        };

        self.root = Some(new_root);
    }

    /// Looks up `key`, splaying it (or its nearest neighbor) to the root
    ///
    /// Returns `None` when the key was never inserted. Only the tree shape
    /// changes; no stored value is modified.
    pub fn find(&mut self, key: &K) -> Option<&V> {
        if let Some(root) = self.root.take() {
            self.root = Some(splay(root, key, &mut self.stats.rotations));
        }

        match self.root.as_deref() {
            Some(node) if node.key == *key => {
                self.stats.hits += 1;
                trace!("Splay cache hit");
                Some(&node.value)
            }
            _ => {
                self.stats.misses += 1;
                trace!("Splay cache miss");
                None
            }
        }
    }

    /// Looks up `key` without restructuring the tree or touching statistics
    pub fn peek(&self, key: &K) -> Option<&V> {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            current = match key.cmp(&node.key) {
                Ordering::Equal => return Some(&node.value),
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
            };
        }
        None
    }

    /// Returns `true` if `key` is stored, without restructuring
    pub fn contains_key(&self, key: &K) -> bool {
        self.peek(key).is_some()
    }
}

impl<K, V> SplayCache<K, V> {
    /// Number of stored entries
    pub fn len(&self) -> usize {
        self.stats.entries
    }

    /// Check if the cache contains no entries
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Key currently held by the root, if any
    pub fn root_key(&self) -> Option<&K> {
        self.root.as_deref().map(SplayNode::key)
    }

    /// Current statistics snapshot
    pub fn stats(&self) -> SplayStats {
        self.stats.clone()
    }

    /// Number of nodes on the longest root-to-leaf path
    pub fn height(&self) -> usize {
        let mut max_depth = 0;
        let mut stack: Vec<(&SplayNode<K, V>, usize)> = Vec::new();
        if let Some(root) = self.root.as_deref() {
            stack.push((root, 1));
        }
        while let Some((node, depth)) = stack.pop() {
            max_depth = max_depth.max(depth);
            if let Some(left) = node.left.as_deref() {
                stack.push((left, depth + 1));
            }
            if let Some(right) = node.right.as_deref() {
                stack.push((right, depth + 1));
            }
        }
        max_depth
    }

    /// In-order iterator over the stored keys (strictly increasing)
    pub fn keys(&self) -> Keys<'_, K, V> {
        let mut keys = Keys { stack: Vec::new() };
        keys.push_left_spine(self.root.as_deref());
        keys
    }

    /// Removes every entry and resets statistics
    pub fn clear(&mut self) {
        debug!(entries = self.stats.entries, "Clearing splay cache");
        drop_tree(self.root.take());
        self.stats = SplayStats::default();
    }
}

impl<K: Ord, V> Default for SplayCache<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> fmt::Debug for SplayCache<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SplayCache")
            .field("stats", &self.stats)
            .finish_non_exhaustive()
    }
}

impl<K, V> Drop for SplayCache<K, V> {
    fn drop(&mut self) {
        drop_tree(self.root.take());
    }
}

/// Tears a tree down without recursion
///
/// Sequential inserts build long spines; the default recursive `Box` drop
/// would use one stack frame per node.
fn drop_tree<K, V>(root: Link<K, V>) {
    let mut stack: Vec<Box<SplayNode<K, V>>> = root.into_iter().collect();
    while let Some(mut node) = stack.pop() {
        stack.extend(node.left.take());
        stack.extend(node.right.take());
    }
}

/// In-order key iterator created by [`SplayCache::keys`]
pub struct Keys<'a, K, V> {
    stack: Vec<&'a SplayNode<K, V>>,
}

impl<'a, K, V> Keys<'a, K, V> {
    fn push_left_spine(&mut self, mut node: Option<&'a SplayNode<K, V>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left.as_deref();
        }
    }
}

impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        Some(&node.key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_strictly_increasing(keys: &[u64]) -> bool {
        keys.windows(2).all(|w| w[0] < w[1])
    }

    #[test]
    fn test_empty_cache() {
        let mut cache: SplayCache<u64, u64> = SplayCache::new();
        assert!(cache.is_empty());
        assert_eq!(cache.len(), 0);
        assert_eq!(cache.root_key(), None);
        assert_eq!(cache.height(), 0);
        assert_eq!(cache.find(&1), None);
        assert_eq!(cache.keys().count(), 0);
    }

    #[test]
    fn test_insert_makes_key_root() {
        let mut cache = SplayCache::new();
        for key in [50u64, 30, 70, 20, 40] {
            cache.insert(key, key * 10);
            assert_eq!(cache.root_key(), Some(&key));
        }
        assert_eq!(cache.len(), 5);
    }

    #[test]
    fn test_insert_existing_key_overwrites_value() {
        let mut cache = SplayCache::new();
        cache.insert(1u64, "a");
        cache.insert(2, "b");
        cache.insert(1, "c");

        assert_eq!(cache.len(), 2);
        assert_eq!(cache.root_key(), Some(&1));
        assert_eq!(cache.find(&1), Some(&"c"));
        assert_eq!(cache.find(&2), Some(&"b"));
    }

    #[test]
    fn test_find_splays_key_to_root() {
        let mut cache = SplayCache::new();
        for key in 1..=10u64 {
            cache.insert(key, key);
        }
        // Ascending inserts leave 1 at the bottom of a left spine
        assert_eq!(cache.height(), 10);

        assert_eq!(cache.find(&1), Some(&1));
        assert_eq!(cache.root_key(), Some(&1));
        // Splaying the deepest node roughly halves the spine
        assert!(cache.height() < 10);
    }

    #[test]
    fn test_find_missing_key_keeps_values() {
        let mut cache = SplayCache::new();
        for key in [10u64, 20, 30] {
            cache.insert(key, key + 1);
        }

        assert_eq!(cache.find(&25), None);
        let root = *cache.root_key().unwrap();
        assert!(root == 20 || root == 30, "nearest neighbor should be root");

        for key in [10u64, 20, 30] {
            assert_eq!(cache.peek(&key), Some(&(key + 1)));
        }
    }

    #[test]
    fn test_peek_does_not_restructure() {
        let mut cache = SplayCache::new();
        for key in 1..=5u64 {
            cache.insert(key, key);
        }
        let before = cache.stats();

        assert_eq!(cache.peek(&1), Some(&1));
        assert!(cache.contains_key(&3));
        assert!(!cache.contains_key(&9));

        assert_eq!(cache.root_key(), Some(&5));
        assert_eq!(cache.stats(), before);
    }

    #[test]
    fn test_keys_in_order() {
        let mut cache = SplayCache::new();
        for key in [8u64, 3, 10, 1, 6, 14, 4, 7, 13] {
            cache.insert(key, ());
        }
        cache.find(&6);
        cache.find(&13);

        let keys: Vec<u64> = cache.keys().copied().collect();
        assert_eq!(keys, vec![1, 3, 4, 6, 7, 8, 10, 13, 14]);
        assert!(is_strictly_increasing(&keys));
    }

    #[test]
    fn test_stats_tracking() {
        let mut cache = SplayCache::new();
        cache.insert(1u64, 1u64);
        cache.insert(2, 2);

        cache.find(&1);
        cache.find(&2);
        cache.find(&3);

        let stats = cache.stats();
        assert_eq!(stats.hits, 2);
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.entries, 2);
        assert!(stats.rotations > 0);
    }

    #[test]
    fn test_clear_resets() {
        let mut cache = SplayCache::new();
        for key in 0..100u64 {
            cache.insert(key, key);
        }
        cache.clear();

        assert!(cache.is_empty());
        assert_eq!(cache.len(), 0);
        assert_eq!(cache.stats(), SplayStats::default());
        assert_eq!(cache.find(&5), None);
    }

    #[test]
    fn test_find_deepest_key_of_long_spine() {
        let mut cache = SplayCache::new();
        for key in 0..200_000u64 {
            cache.insert(key, key * 2);
        }
        assert_eq!(cache.height(), 200_000);

        assert_eq!(cache.find(&0), Some(&0));
        assert_eq!(cache.root_key(), Some(&0));
        assert!(cache.height() < 200_000);
        assert_eq!(cache.keys().count(), 200_000);
        assert!(cache.keys().zip(cache.keys().skip(1)).all(|(a, b)| a < b));

        assert_eq!(cache.find(&199_999), Some(&399_998));
        assert_eq!(cache.stats().hits, 2);
    }

    #[test]
    fn test_drop_deep_spine() {
        let mut cache = SplayCache::new();
        for key in 0..200_000u64 {
            cache.insert(key, key);
        }
        assert_eq!(cache.len(), 200_000);
        drop(cache);
    }

    #[test]
    fn test_stats_display() {
        let stats = SplayStats {
            hits: 3,
            misses: 1,
            rotations: 7,
            entries: 2,
        };
        assert_eq!(
            stats.to_string(),
            "hits=3, misses=1, rotations=7, entries=2, hit_rate=75.0%"
        );
    }
}
