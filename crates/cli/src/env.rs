// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for the CLI.

use tracing_subscriber::EnvFilter;

/// Version with the git hash recorded at build time
pub const LONG_VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), "+", env!("BUILD_GIT_HASH"));

/// Log filter variable, e.g. `JD_LOG=debug` or `JD_LOG=jd_config=debug`
pub const LOG_ENV: &str = "JD_LOG";

/// Filter used when `JD_LOG` is unset or invalid
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Log filter from `JD_LOG`, falling back to warnings only.
pub fn log_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Install the stderr log subscriber.
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(log_filter())
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
