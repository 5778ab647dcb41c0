// SPDX-License-Identifier: GPL-3.0-only
use tracing_subscriber::{fmt, EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global subscriber for the cafe daemon.
///
/// The configured level also drives `tower_http`, so the per-request spans from
/// the router's `TraceLayer` appear at the same verbosity as the daemon's own
/// events. A `RUST_LOG` value replaces both; a level neither source can parse
/// degrades to `info` rather than failing startup.
pub fn setup_logging(log_level: &str) -> anyhow::Result<()> {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = build_filter(rust_log.as_deref(), log_level);

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_ansi(true)
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
        )
        .try_init()?;

    Ok(())
}

fn build_filter(rust_log: Option<&str>, log_level: &str) -> EnvFilter {
    rust_log
        .filter(|directives| !directives.trim().is_empty())
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .or_else(|| EnvFilter::try_new(request_directives(log_level)).ok())
        .unwrap_or_else(|| EnvFilter::new("info"))
}

fn request_directives(log_level: &str) -> String {
    format!("{log_level},tower_http={log_level}")
}
