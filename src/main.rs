// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

use std::process::ExitCode;

use adaptive_cache::{run_all, CacheConfig};
use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = CacheConfig::from_env().context("invalid benchmark configuration")?;
    info!(
        capacity = %config.capacity,
        array_size = config.workload.array_size,
        num_queries = config.workload.num_queries,
        "Starting benchmarks"
    );

    let report = run_all(&config)?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        tracing::error!("Benchmark error: {e:#}");
        return ExitCode::from(1);
    }
    ExitCode::SUCCESS
}
