// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for configuration loading and validation.

/// Errors that can occur while building or validating a [`CacheConfig`](crate::CacheConfig).
///
/// # Examples
///
/// ```rust
/// use adaptive_cache::{CacheConfigBuilder, ConfigError};
///
/// let result = CacheConfigBuilder::new().array_size(10).build().validate();
/// assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
/// ```
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A configuration value is outside its allowed domain.
    #[error("Invalid value for {name}: {reason}")]
    InvalidValue {
        /// Name of the configuration setting
        name: String,
        /// Why the value was rejected
        reason: String,
    },

    /// An environment variable could not be parsed.
    #[error("Failed to parse {name}={value:?}")]
    Parse {
        /// Name of the environment variable
        name: String,
        /// Raw value that failed to parse
        value: String,
        /// The underlying parse error
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl ConfigError {
    /// Create an `InvalidValue` error.
    pub fn invalid_value(name: impl Into<String>, reason: impl Into<String>) -> Self {
        ConfigError::InvalidValue {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Create a `Parse` error from any parse error.
    pub fn parse(
        name: impl Into<String>,
        value: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        ConfigError::Parse {
            name: name.into(),
            value: value.into(),
            source: Box::new(source),
        }
    }
}
