// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Query workloads that reward interval caching
//!
//! Most range queries cluster around a handful of hot-spot intervals, with a
//! small random shift applied to both bounds, so the same intervals recur often
//! enough for an LRU cache to pay off. The remaining range queries are short
//! random intervals. Point updates are scattered uniformly and invalidate any
//! cached interval that covers them.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::config::constants::workload::{
    HOT_SPOT_JITTER, HOT_SPOT_SPAN, MIN_ARRAY_SIZE, RANDOM_SPAN, VALUE_RANGE,
};
use crate::config::WorkloadConfig;
use crate::errors::ConfigError;
use crate::interval::IntervalKey;
use crate::range_sum::Query;

/// Creates the workload RNG, seeded when `seed` is set
pub fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Fills an array of `size` elements with values in `1..=1000`
pub fn random_array<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Vec<i64> {
    let (low, high) = VALUE_RANGE;
    (0..size).map(|_| rng.gen_range(low..=high)).collect()
}

/// Generates the query stream described by `config`
///
/// # Examples
///
/// ```
/// use adaptive_cache::{generate_queries, seeded_rng, Query, WorkloadConfig};
///
/// let config = WorkloadConfig { num_queries: 100, seed: Some(1), ..WorkloadConfig::default() };
/// let mut rng = seeded_rng(config.seed);
/// let queries = generate_queries(&config, &mut rng)?;
///
/// assert_eq!(queries.len(), 100);
/// assert!(queries.iter().all(|q| match *q {
///     Query::Range { l, r } => l <= r && r < config.array_size,
///     Query::Update { index, .. } => index < config.array_size,
/// }));
/// # Ok::<(), adaptive_cache::ConfigError>(())
/// ```
pub fn generate_queries<R: Rng + ?Sized>(
    config: &WorkloadConfig,
    rng: &mut R,
) -> Result<Vec<Query>, ConfigError> {
    config.validate()?;

    let spots = hot_spots(config, rng);
    let mut queries = Vec::with_capacity(config.num_queries);

    for _ in 0..config.num_queries {
        let query = if rng.gen_bool(config.range_query_ratio) {
            let hot = if rng.gen_bool(config.hot_spot_ratio) {
                spots.choose(rng).copied()
            } else {
                None
            };
            let key = match hot {
                Some(spot) => jittered(spot, config.array_size, rng),
                None => random_interval(config.array_size, rng),
            };
            Query::Range { l: key.l, r: key.r }
        } else {
            let (low, high) = VALUE_RANGE;
            Query::Update {
                index: rng.gen_range(0..config.array_size),
                value: rng.gen_range(low..=high),
            }
        };
        queries.push(query);
    }

    Ok(queries)
}

/// Picks `config.hot_spots` intervals of width 101 to 1000
fn hot_spots<R: Rng + ?Sized>(config: &WorkloadConfig, rng: &mut R) -> Vec<IntervalKey> {
    let (min_span, max_span) = HOT_SPOT_SPAN;
    (0..config.hot_spots)
        .map(|_| {
            let l = rng.gen_range(0..=config.array_size - MIN_ARRAY_SIZE);
            let r = l + rng.gen_range(min_span..=max_span);
            IntervalKey::new(l, r)
        })
        .collect()
}

/// Shifts both bounds of `spot` by the same random amount, clamped to the array
fn jittered<R: Rng + ?Sized>(spot: IntervalKey, array_size: usize, rng: &mut R) -> IntervalKey {
    let shift = rng.gen_range(-HOT_SPOT_JITTER..=HOT_SPOT_JITTER);
    let last = array_size as i64 - 1;
    let l = (spot.l as i64 + shift).clamp(0, last) as usize;
    let r = (spot.r as i64 + shift).clamp(0, last) as usize;
    IntervalKey::new(l, r)
}

fn random_interval<R: Rng + ?Sized>(array_size: usize, rng: &mut R) -> IntervalKey {
    let (min_span, max_span) = RANDOM_SPAN;
    let l = rng.gen_range(0..array_size - max_span);
    let r = l + rng.gen_range(min_span..=max_span);
    IntervalKey::new(l, r)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(num_queries: usize) -> WorkloadConfig {
        WorkloadConfig {
            array_size: 2_000,
            num_queries,
            seed: Some(42),
            ..WorkloadConfig::default()
        }
    }

    #[test]
    fn test_random_array_values_in_range() {
        let mut rng = seeded_rng(Some(3));
        let values = random_array(500, &mut rng);
        assert_eq!(values.len(), 500);
        assert!(values.iter().all(|v| (1..=1_000).contains(v)));
    }

    #[test]
    fn test_same_seed_same_queries() {
        let config = config(300);
        let a = generate_queries(&config, &mut seeded_rng(config.seed)).unwrap();
        let b = generate_queries(&config, &mut seeded_rng(config.seed)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_queries_stay_in_bounds() {
        let config = config(2_000);
        let queries = generate_queries(&config, &mut seeded_rng(config.seed)).unwrap();

        for query in queries {
            match query {
                Query::Range { l, r } => {
                    assert!(l <= r);
                    assert!(r < config.array_size);
                }
                Query::Update { index, value } => {
                    assert!(index < config.array_size);
                    assert!((1..=1_000).contains(&value));
                }
            }
        }
    }

    #[test]
    fn test_hot_spots_repeat() {
        let config = WorkloadConfig {
            range_query_ratio: 1.0,
            hot_spot_ratio: 1.0,
            hot_spots: 1,
            ..config(200)
        };
        let queries = generate_queries(&config, &mut seeded_rng(config.seed)).unwrap();

        let mut distinct = std::collections::HashSet::new();
        for query in &queries {
            if let Query::Range { l, r } = *query {
                distinct.insert((l, r));
            }
        }
        // One hot spot with a shift in -5..=5 yields at most 11 intervals
        assert!(distinct.len() <= 11);
    }

    #[test]
    fn test_update_only_workload() {
        let config = WorkloadConfig {
            range_query_ratio: 0.0,
            ..config(50)
        };
        let queries = generate_queries(&config, &mut seeded_rng(config.seed)).unwrap();
        assert!(queries
            .iter()
            .all(|q| matches!(q, Query::Update { .. })));
    }

    #[test]
    fn test_small_array_rejected() {
        let config = WorkloadConfig {
            array_size: 100,
            ..config(10)
        };
        assert!(generate_queries(&config, &mut seeded_rng(Some(0))).is_err());
    }

    #[test]
    fn test_jitter_clamps_to_array() {
        let mut rng = seeded_rng(Some(9));
        for _ in 0..100 {
            let key = jittered(IntervalKey::new(0, 999), 1_000, &mut rng);
            assert!(key.l <= key.r);
            assert!(key.r <= 999);
        }
    }
}
