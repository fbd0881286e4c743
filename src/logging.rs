//! Structured logging setup
//!
//! The crate emits `tracing` events and spans from the algorithm engines but
//! never installs a subscriber on its own. Hosts that want output without
//! wiring up `tracing-subscriber` themselves can call [`init_tracing`].

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize structured logging for hosts that do not install their own
/// subscriber.
///
/// The filter is resolved in order: `RUST_LOG`, then `PATHGRAPH_LOG`, then
/// the `level` argument (e.g. `"debug"` or `"pathgraph=trace"`). Output goes
/// to stderr, compact by default or JSON when `log_json` is set.
pub fn init_tracing(level: &str, log_json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_from_env("PATHGRAPH_LOG"))
        .unwrap_or_else(|_| {
            EnvFilter::new(if level.contains('=') {
                level.to_string()
            } else {
                format!("pathgraph={}", level)
            })
        });

    let registry = tracing_subscriber::registry().with(filter);

    if log_json {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_ansi(false),
            )
            .try_init()?;
    } else {
        registry
            .with(
                fmt::layer()
                    .compact()
                    .with_target(false)
                    .with_writer(std::io::stderr)
                    .with_ansi(false),
            )
            .try_init()?;
    }

    Ok(())
}
