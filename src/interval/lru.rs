// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Capacity-bounded LRU cache keyed by inclusive intervals

use std::collections::hash_map::Entry;
use std::collections::{BTreeMap, HashMap};
use std::fmt;

use tracing::{debug, trace};

use super::{CacheStats, IntervalKey};
use crate::config::CacheConfig;
use crate::types::cache::AccessSequence;

/// Entry in the interval cache with recency metadata
#[derive(Debug, Clone)]
struct CacheEntry<V> {
    /// The cached aggregate
    value: V,
    /// Sequence number of the most recent `get` hit or `put`
    access_seq: AccessSequence,
}

/// LRU cache of aggregates over inclusive intervals `[l, r]`
///
/// Every `get` hit and every `put` stamps the touched entry with a fresh
/// [`AccessSequence`]. A `BTreeMap` from sequence to key keeps entries in
/// recency order, so the least recently used entry is always the first one in
/// that map. When a `put` pushes the size above capacity, exactly that entry is
/// evicted.
///
/// [`invalidate`](Self::invalidate) drops every interval containing a mutated
/// point. It scans all entries, since there is no interval index.
///
/// # Examples
///
/// ```
/// use adaptive_cache::{IntervalKey, IntervalLruCache};
///
/// let mut cache = IntervalLruCache::new(2);
/// cache.put(IntervalKey::new(0, 5), 10);
/// cache.put(IntervalKey::new(1, 6), 20);
/// assert_eq!(cache.get(&IntervalKey::new(0, 5)), Some(&10));
///
/// // (1, 6) is now the least recently used entry
/// let evicted = cache.put(IntervalKey::new(2, 7), 30);
/// assert_eq!(evicted, Some((IntervalKey::new(1, 6), 20)));
///
/// // A point update at 3 invalidates both remaining ranges
/// assert_eq!(cache.invalidate(3), 2);
/// assert!(cache.is_empty());
/// ```
///
/// # Performance
///
/// - Get / put: `O(log n)` (hash lookup plus recency index update)
/// - Eviction: `O(log n)`
/// - Invalidate: `O(n)`
pub struct IntervalLruCache<V> {
    capacity: usize,
    entries: HashMap<IntervalKey, CacheEntry<V>>,
    /// Recency order, least recently used first
    recency: BTreeMap<AccessSequence, IntervalKey>,
    next_seq: AccessSequence,
    stats: CacheStats,
}

impl<V> IntervalLruCache<V> {
    /// Creates an empty cache holding at most `capacity` entries
    ///
    /// A capacity of zero is allowed: every `put` then evicts the entry it
    /// just wrote.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            entries: HashMap::new(),
            recency: BTreeMap::new(),
            next_seq: AccessSequence::default(),
            stats: CacheStats::default(),
        }
    }

    /// Creates an empty cache sized by `config`
    pub fn from_config(config: &CacheConfig) -> Self {
        Self::new(config.capacity.as_usize())
    }

    /// Looks up `key`, marking it most recently used on a hit
    ///
    /// A miss only increments the miss counter.
    pub fn get(&mut self, key: &IntervalKey) -> Option<&V> {
        if !self.entries.contains_key(key) {
            self.stats.misses += 1;
            trace!(key = %key, "Cache miss (interval)");
            return None;
        }

        let seq = self.next_access();
        let entry = self.entries.get_mut(key)?;
        self.recency.remove(&entry.access_seq);
        entry.access_seq = seq;
        self.recency.insert(seq, *key);

        self.stats.hits += 1;
        trace!(key = %key, "Cache hit (interval)");
        Some(&entry.value)
    }

    /// Looks up `key` without touching recency or statistics
    pub fn peek(&self, key: &IntervalKey) -> Option<&V> {
        self.entries.get(key).map(|entry| &entry.value)
    }

    /// Returns `true` if `key` is cached, without touching recency or statistics
    pub fn contains_key(&self, key: &IntervalKey) -> bool {
        self.entries.contains_key(key)
    }

    /// Inserts or overwrites the value for `key` and marks it most recently used
    ///
    /// Returns the evicted entry when the insert pushed the cache over
    /// capacity. At most one entry is evicted per call.
    pub fn put(&mut self, key: IntervalKey, value: V) -> Option<(IntervalKey, V)> {
        let seq = self.next_access();

        match self.entries.entry(key) {
            Entry::Occupied(mut occupied) => {
                let entry = occupied.get_mut();
                self.recency.remove(&entry.access_seq);
                entry.access_seq = seq;
                entry.value = value;
            }
            Entry::Vacant(vacant) => {
                vacant.insert(CacheEntry {
                    value,
                    access_seq: seq,
                });
            }
        }
        self.recency.insert(seq, key);

        let evicted = if self.entries.len() > self.capacity {
            self.evict_lru()
        } else {
            None
        };

        self.stats.entries = self.entries.len();
        evicted
    }

    /// Removes every entry whose interval contains `point`
    ///
    /// Returns the number of entries removed.
    pub fn invalidate(&mut self, point: usize) -> usize {
        let removed = self.remove_where(|key| key.contains(point));
        if removed > 0 {
            debug!(point, removed, "Invalidated cached intervals");
        }
        removed
    }

    /// Removes every entry whose interval overlaps `[l, r]`
    ///
    /// Returns the number of entries removed.
    pub fn invalidate_range(&mut self, l: usize, r: usize) -> usize {
        let removed = self.remove_where(|key| key.overlaps(l, r));
        if removed > 0 {
            debug!(l, r, removed, "Invalidated cached intervals overlapping range");
        }
        removed
    }

    /// Keeps only the entries for which `predicate` returns `true`
    ///
    /// Removed entries do not count as invalidations.
    pub fn retain<F>(&mut self, mut predicate: F)
    where
        F: FnMut(&IntervalKey, &V) -> bool,
    {
        let recency = &mut self.recency;
        self.entries.retain(|key, entry| {
            let keep = predicate(key, &entry.value);
            if !keep {
                recency.remove(&entry.access_seq);
            }
            keep
        });
        self.stats.entries = self.entries.len();
    }

    /// Removes all entries; hit and miss counters are kept
    pub fn clear(&mut self) {
        debug!(entries = self.entries.len(), "Clearing interval cache");
        self.entries.clear();
        self.recency.clear();
        self.stats.entries = 0;
    }

    /// Keys in recency order, least recently used first
    pub fn keys_by_recency(&self) -> impl Iterator<Item = &IntervalKey> + '_ {
        self.recency.values()
    }

    /// Maximum number of entries
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Get the total number of cached entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the cache contains no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of `get` calls that found their key
    pub fn hits(&self) -> u64 {
        self.stats.hits
    }

    /// Number of `get` calls that did not
    pub fn misses(&self) -> u64 {
        self.stats.misses
    }

    /// Current statistics snapshot
    pub fn stats(&self) -> CacheStats {
        self.stats.clone()
    }

    /// Evicts the least recently used entry
    fn evict_lru(&mut self) -> Option<(IntervalKey, V)> {
        let (_, key) = self.recency.pop_first()?;
        let entry = self.entries.remove(&key)?;
        self.stats.evictions += 1;
        debug!(key = %key, "Evicting LRU cache entry");
        Some((key, entry.value))
    }

    fn remove_where<F>(&mut self, mut matches: F) -> usize
    where
        F: FnMut(&IntervalKey) -> bool,
    {
        let before = self.entries.len();
        let recency = &mut self.recency;
        self.entries.retain(|key, entry| {
            if matches(key) {
                recency.remove(&entry.access_seq);
                false
            } else {
                true
            }
        });

        let removed = before - self.entries.len();
        self.stats.invalidations += removed as u64;
        self.stats.entries = self.entries.len();
        removed
    }

    /// Hands out the next sequence number, compacting when the counter saturates
    fn next_access(&mut self) -> AccessSequence {
        if self.next_seq.is_saturated() {
            self.renumber();
        }
        let seq = self.next_seq;
        self.next_seq = self.next_seq.next();
        seq
    }

    /// Reassigns sequence numbers `0..len` in the current recency order
    fn renumber(&mut self) {
        let order: Vec<IntervalKey> = std::mem::take(&mut self.recency).into_values().collect();
        let mut seq = AccessSequence::default();
        for key in order {
            if let Some(entry) = self.entries.get_mut(&key) {
                entry.access_seq = seq;
            }
            self.recency.insert(seq, key);
            seq = seq.next();
        }
        debug!(entries = self.recency.len(), "Renumbered interval cache recency");
        self.next_seq = seq;
    }
}

impl<V> fmt::Debug for IntervalLruCache<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntervalLruCache")
            .field("capacity", &self.capacity)
            .field("len", &self.entries.len())
            .field("stats", &self.stats)
            .finish_non_exhaustive()
    }
}
