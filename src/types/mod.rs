// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Strong types for type safety across adaptive-cache.
//!
//! This module provides newtype wrappers for:
//! - Cache recency metadata (access sequences)
//! - Configuration values (cache capacity)

pub mod cache;
pub mod config;

// Note: Public types are re-exported from lib.rs, not here
