// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Integration tests for the splay-tree cache and the Fibonacci memo built on it

mod helpers;

use adaptive_cache::{fibonacci, fibonacci_naive, MemoError, SplayCache};
use helpers::is_strictly_increasing;
use num_bigint::BigUint;

#[test]
fn test_find_moves_key_to_root() {
    let mut cache = SplayCache::new();
    for k in [50, 30, 70, 20, 40, 60, 80] {
        cache.insert(k, k * 10);
    }

    assert_eq!(cache.find(&20), Some(&200));
    assert_eq!(cache.root_key(), Some(&20));
    assert_eq!(cache.find(&60), Some(&600));
    assert_eq!(cache.root_key(), Some(&60));
    assert!(is_strictly_increasing(&cache));
}

#[test]
fn test_insert_leaves_new_key_at_root() {
    let mut cache = SplayCache::new();
    for k in [5, 1, 9, 3, 7] {
        cache.insert(k, ());
        assert_eq!(cache.root_key(), Some(&k));
    }
    assert_eq!(cache.keys().copied().collect::<Vec<_>>(), vec![1, 3, 5, 7, 9]);
}

#[test]
fn test_insert_existing_key_overwrites() {
    let mut cache = SplayCache::new();
    cache.insert("b", 1);
    cache.insert("a", 2);
    cache.insert("b", 3);

    assert_eq!(cache.len(), 2);
    assert_eq!(cache.find(&"b"), Some(&3));
    assert_eq!(cache.find(&"a"), Some(&2));
}

#[test]
fn test_missing_key_reports_miss() {
    let mut cache: SplayCache<i32, i32> = SplayCache::new();
    assert_eq!(cache.find(&1), None);

    cache.insert(10, 1);
    cache.insert(20, 2);
    assert_eq!(cache.find(&15), None);

    let stats = cache.stats();
    assert_eq!(stats.misses, 2);
    assert_eq!(stats.hits, 0);
    // The miss still restructures, but never adds a key
    assert_eq!(cache.len(), 2);
    assert!(is_strictly_increasing(&cache));
}

#[test]
fn test_find_does_not_change_values() {
    let mut cache = SplayCache::new();
    for k in 0..64u32 {
        cache.insert(k, u64::from(k) * 3);
    }
    for k in (0..64u32).rev().step_by(5) {
        cache.find(&k);
    }
    for k in 0..64u32 {
        assert_eq!(cache.peek(&k), Some(&(u64::from(k) * 3)));
    }
}

#[test]
fn test_repeated_access_keeps_tree_shallow() {
    let mut cache = SplayCache::new();
    for k in 0..1_000u32 {
        cache.insert(k, k);
    }
    // Ascending inserts leave a spine
    assert_eq!(cache.height(), 1_000);

    cache.find(&0);
    assert!(cache.height() < 1_000);
    assert!(is_strictly_increasing(&cache));
}

#[test]
fn test_clear_resets() {
    let mut cache = SplayCache::new();
    cache.insert(1, 1);
    cache.find(&1);
    cache.clear();

    assert!(cache.is_empty());
    assert_eq!(cache.len(), 0);
    assert_eq!(cache.stats().hits, 0);
    assert_eq!(cache.root_key(), None);
}

#[test]
fn test_fibonacci_known_values() {
    let known = [0u128, 1, 1, 2, 3, 5, 8, 13, 21, 34, 55];
    let mut cache = SplayCache::<u64, u128>::new();
    for (n, expected) in known.iter().enumerate() {
        assert_eq!(fibonacci(n as u64, &mut cache).unwrap(), *expected);
    }
    assert_eq!(fibonacci(90, &mut cache).unwrap(), 2_880_067_194_370_816_120);
}

#[test]
fn test_fibonacci_matches_naive_for_small_n() {
    for n in 0..=20 {
        let mut cache = SplayCache::<u64, u128>::new();
        assert_eq!(fibonacci(n, &mut cache).unwrap(), fibonacci_naive(n));
    }
}

#[test]
fn test_fixed_width_fibonacci_overflow() {
    let mut cache = SplayCache::<u64, u128>::new();
    assert_eq!(fibonacci(300, &mut cache), Err(MemoError::Overflow { n: 187 }));
}

#[test]
fn test_big_fibonacci_runs_past_u128() {
    let mut cache = SplayCache::<u64, BigUint>::new();
    let value = fibonacci(200, &mut cache).unwrap();
    assert_eq!(value.to_string(), "280571172992510140037611932413038677189525");

    // Memo keys land in ascending order, yet the tree stays searchable
    assert_eq!(cache.len(), 199);
    assert!(is_strictly_increasing(&cache));
    assert_eq!(fibonacci(2, &mut cache).unwrap(), BigUint::from(1u32));
}

#[test]
fn test_find_deepest_key_of_ascending_chain() {
    let mut cache = SplayCache::new();
    for k in 0..200_000u32 {
        cache.insert(k, k);
    }
    assert_eq!(cache.height(), 200_000);

    assert_eq!(cache.find(&0), Some(&0));

    assert_eq!(cache.root_key(), Some(&0));
    assert!(cache.height() < 200_000);
    assert!(is_strictly_increasing(&cache));
    assert_eq!(cache.len(), 200_000);
}
