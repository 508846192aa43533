// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Configuration for cache sizing and the benchmark harness
//!
//! The caches themselves only need a capacity. Everything else here drives
//! the harness: the shape of the generated range-sum workload and which
//! Fibonacci arguments to time.
//!
//! # Example: Using defaults
//!
//! ```rust
//! use adaptive_cache::CacheConfig;
//!
//! // 500-entry cache, 10k-element array, 5k queries
//! let config = CacheConfig::default();
//! assert!(config.validate().is_ok());
//! ```
//!
//! # Example: Custom configuration
//!
//! ```rust
//! use adaptive_cache::CacheConfigBuilder;
//!
//! let config = CacheConfigBuilder::with_defaults()
//!     .capacity(64)
//!     .num_queries(1_000)
//!     .seed(7)
//!     .build();
//!
//! assert_eq!(config.capacity.as_usize(), 64);
//! assert_eq!(config.workload.seed, Some(7));
//! ```
//!
//! # Example: From the environment
//!
//! ```rust,no_run
//! use adaptive_cache::CacheConfig;
//!
//! // Reads CACHE_CAPACITY, ARRAY_SIZE, NUM_QUERIES, WORKLOAD_SEED, FIB_MAX_N, ...
//! let config = CacheConfig::from_env()?;
//! # Ok::<(), adaptive_cache::ConfigError>(())
//! ```

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;
use crate::types::config::CacheCapacity;

pub mod constants;

/// Shape of the generated range-sum workload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkloadConfig {
    /// Length of the backing array
    /// Default: 10 000
    pub array_size: usize,

    /// Number of queries to generate
    /// Default: 5 000
    pub num_queries: usize,

    /// Number of hot-spot ranges
    /// Default: 5
    pub hot_spots: usize,

    /// Share of range queries among all queries
    /// Default: 0.8
    pub range_query_ratio: f64,

    /// Share of range queries that target a hot spot
    /// Default: 0.8
    pub hot_spot_ratio: f64,

    /// RNG seed; `None` seeds from the operating system
    pub seed: Option<u64>,
}

impl Default for WorkloadConfig {
    fn default() -> Self {
        use constants::workload::*;

        Self {
            array_size: ARRAY_SIZE,
            num_queries: NUM_QUERIES,
            hot_spots: HOT_SPOT_COUNT,
            range_query_ratio: RANGE_QUERY_RATIO,
            hot_spot_ratio: HOT_SPOT_RATIO,
            seed: None,
        }
    }
}

impl WorkloadConfig {
    /// Check the workload shape before generating queries
    pub fn validate(&self) -> Result<(), ConfigError> {
        use constants::workload::MIN_ARRAY_SIZE;

        if self.array_size < MIN_ARRAY_SIZE {
            return Err(ConfigError::invalid_value(
                "array_size",
                format!(
                    "{} is below the minimum of {}",
                    self.array_size, MIN_ARRAY_SIZE
                ),
            ));
        }
        if self.hot_spots == 0 {
            return Err(ConfigError::invalid_value(
                "hot_spots",
                "at least one hot spot is required",
            ));
        }
        for (name, ratio) in [
            ("range_query_ratio", self.range_query_ratio),
            ("hot_spot_ratio", self.hot_spot_ratio),
        ] {
            if !(0.0..=1.0).contains(&ratio) {
                return Err(ConfigError::invalid_value(
                    name,
                    format!("{ratio} is not within [0, 1]"),
                ));
            }
        }
        Ok(())
    }
}

/// Which Fibonacci arguments the benchmark times
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FibonacciConfig {
    /// Largest argument, inclusive
    /// Default: 950
    pub max_n: u64,

    /// Distance between arguments, starting at zero
    /// Default: 50
    pub step: u64,

    /// Timed repetitions averaged per argument
    /// Default: 5
    pub repeats: u32,
}

impl Default for FibonacciConfig {
    fn default() -> Self {
        use constants::fibonacci::*;

        Self {
            max_n: DEFAULT_MAX_N,
            step: DEFAULT_STEP,
            repeats: DEFAULT_REPEATS,
        }
    }
}

impl FibonacciConfig {
    /// Arguments to benchmark: `0, step, 2 * step, ..` up to `max_n`
    ///
    /// # Example
    ///
    /// ```rust
    /// use adaptive_cache::FibonacciConfig;
    ///
    /// let config = FibonacciConfig { max_n: 100, step: 50, repeats: 1 };
    /// assert_eq!(config.arguments(), vec![0, 50, 100]);
    /// ```
    pub fn arguments(&self) -> Vec<u64> {
        if self.step == 0 {
            return vec![0];
        }
        (0..=self.max_n).step_by(self.step as usize).collect()
    }
}

/// Configuration for adaptive-cache operations
///
/// Use [`CacheConfigBuilder`] for a fluent API to construct instances.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Interval cache capacity
    /// Default: 500 entries
    pub capacity: CacheCapacity,

    /// Range-sum workload shape
    pub workload: WorkloadConfig,

    /// Fibonacci benchmark arguments
    pub fibonacci: FibonacciConfig,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            capacity: CacheCapacity::DEFAULT,
            workload: WorkloadConfig::default(),
            fibonacci: FibonacciConfig::default(),
        }
    }
}

impl CacheConfig {
    /// Create a small configuration suitable for tests
    ///
    /// # Example
    ///
    /// ```rust
    /// use adaptive_cache::CacheConfig;
    ///
    /// let config = CacheConfig::minimal();
    /// assert_eq!(config.workload.array_size, 1_000);
    /// assert_eq!(config.workload.seed, Some(0));
    /// assert!(config.validate().is_ok());
    /// ```
    pub fn minimal() -> Self {
        Self {
            capacity: CacheCapacity::SMALL,
            workload: WorkloadConfig {
                array_size: constants::workload::MIN_ARRAY_SIZE,
                num_queries: 200,
                seed: Some(0),
                ..WorkloadConfig::default()
            },
            fibonacci: FibonacciConfig {
                max_n: 60,
                step: 20,
                repeats: 1,
            },
        }
    }

    /// Load configuration from environment variables
    ///
    /// Unset variables keep their defaults. Call `dotenvy::dotenv()` first to
    /// pick up a `.env` file.
    ///
    /// | Variable | Field |
    /// |---|---|
    /// | `CACHE_CAPACITY` | `capacity` |
    /// | `ARRAY_SIZE` | `workload.array_size` |
    /// | `NUM_QUERIES` | `workload.num_queries` |
    /// | `HOT_SPOTS` | `workload.hot_spots` |
    /// | `WORKLOAD_SEED` | `workload.seed` |
    /// | `FIB_MAX_N` | `fibonacci.max_n` |
    /// | `FIB_STEP` | `fibonacci.step` |
    /// | `FIB_REPEATS` | `fibonacci.repeats` |
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut builder = CacheConfigBuilder::with_defaults();

        if let Some(capacity) = env_var::<usize>("CACHE_CAPACITY")? {
            builder = builder.capacity(capacity);
        }
        if let Some(array_size) = env_var("ARRAY_SIZE")? {
            builder = builder.array_size(array_size);
        }
        if let Some(num_queries) = env_var("NUM_QUERIES")? {
            builder = builder.num_queries(num_queries);
        }
        if let Some(hot_spots) = env_var("HOT_SPOTS")? {
            builder = builder.hot_spots(hot_spots);
        }
        if let Some(seed) = env_var("WORKLOAD_SEED")? {
            builder = builder.seed(seed);
        }
        if let Some(max_n) = env_var("FIB_MAX_N")? {
            builder = builder.fibonacci_max_n(max_n);
        }
        if let Some(step) = env_var("FIB_STEP")? {
            builder = builder.fibonacci_step(step);
        }
        if let Some(repeats) = env_var("FIB_REPEATS")? {
            builder = builder.fibonacci_repeats(repeats);
        }

        let config = builder.build();
        config.validate()?;
        Ok(config)
    }

    /// Check every value against its allowed domain
    pub fn validate(&self) -> Result<(), ConfigError> {
        use constants::fibonacci;

        if self.capacity.is_zero() {
            return Err(ConfigError::invalid_value(
                "capacity",
                "cache must hold at least one entry",
            ));
        }
        self.workload.validate()?;
        if self.fibonacci.max_n > fibonacci::MAX_N {
            return Err(ConfigError::invalid_value(
                "fib_max_n",
                format!(
                    "{} exceeds the memo recursion limit of {}",
                    self.fibonacci.max_n,
                    fibonacci::MAX_N
                ),
            ));
        }
        if self.fibonacci.step == 0 {
            return Err(ConfigError::invalid_value("fib_step", "step must be positive"));
        }
        if self.fibonacci.repeats == 0 {
            return Err(ConfigError::invalid_value(
                "fib_repeats",
                "at least one repetition is required",
            ));
        }
        Ok(())
    }
}

/// Reads and parses an optional environment variable
fn env_var<T>(name: &str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match dotenvy::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|e| ConfigError::parse(name, raw, e)),
        Err(dotenvy::Error::EnvVar(std::env::VarError::NotPresent)) => Ok(None),
        Err(e) => Err(ConfigError::parse(name, String::new(), e)),
    }
}

/// Builder for [`CacheConfig`]
///
/// # Example
///
/// ```rust
/// use adaptive_cache::CacheConfigBuilder;
///
/// let config = CacheConfigBuilder::new()
///     .capacity(128)
///     .array_size(20_000)
///     .fibonacci_max_n(150)
///     .build();
/// ```
pub struct CacheConfigBuilder {
    config: CacheConfig,
}

impl Default for CacheConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CacheConfigBuilder {
    /// Create a new builder starting from [`CacheConfig::minimal`]
    pub fn new() -> Self {
        Self {
            config: CacheConfig::minimal(),
        }
    }

    /// Start from [`CacheConfig::default`]
    pub fn with_defaults() -> Self {
        Self {
            config: CacheConfig::default(),
        }
    }

    /// Set the interval cache capacity
    pub fn capacity(mut self, entries: usize) -> Self {
        self.config.capacity = CacheCapacity::new(entries);
        self
    }

    /// Set the backing array length
    pub fn array_size(mut self, size: usize) -> Self {
        self.config.workload.array_size = size;
        self
    }

    /// Set the number of generated queries
    pub fn num_queries(mut self, count: usize) -> Self {
        self.config.workload.num_queries = count;
        self
    }

    /// Set the number of hot spots
    pub fn hot_spots(mut self, count: usize) -> Self {
        self.config.workload.hot_spots = count;
        self
    }

    /// Set the share of range queries among all queries
    pub fn range_query_ratio(mut self, ratio: f64) -> Self {
        self.config.workload.range_query_ratio = ratio;
        self
    }

    /// Set the share of range queries that target a hot spot
    pub fn hot_spot_ratio(mut self, ratio: f64) -> Self {
        self.config.workload.hot_spot_ratio = ratio;
        self
    }

    /// Seed the workload RNG for reproducible runs
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.workload.seed = Some(seed);
        self
    }

    /// Set the largest benchmarked Fibonacci argument
    pub fn fibonacci_max_n(mut self, max_n: u64) -> Self {
        self.config.fibonacci.max_n = max_n;
        self
    }

    /// Set the distance between benchmarked Fibonacci arguments
    pub fn fibonacci_step(mut self, step: u64) -> Self {
        self.config.fibonacci.step = step;
        self
    }

    /// Set the number of timed repetitions per Fibonacci argument
    pub fn fibonacci_repeats(mut self, repeats: u32) -> Self {
        self.config.fibonacci.repeats = repeats;
        self
    }

    /// Build the configuration
    pub fn build(self) -> CacheConfig {
        self.config
    }
}
