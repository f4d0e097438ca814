// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Log filter setup
//!
//! `RUST_LOG` directives are kept as given; `warn` applies only when it
//! sets nothing. `-v` directives are layered on top.

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Build the filter from a `RUST_LOG` value plus extra directives
pub fn env_filter(rust_log: Option<&str>, extra: &[&str]) -> EnvFilter {
    let mut filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .parse_lossy(rust_log.unwrap_or_default());

    for directive in extra {
        if let Ok(parsed) = directive.parse() {
            filter = filter.add_directive(parsed);
        }
    }
    filter
}

/// Build the filter from the process environment
pub fn env_filter_from_env(extra: &[&str]) -> EnvFilter {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    env_filter(rust_log.as_deref(), extra)
}
