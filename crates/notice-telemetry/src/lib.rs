//! Logging setup for the notice CLI
//!
//! Installs a `tracing-subscriber` fmt layer, in plain or JSON form

use notice_config::{LogFormat, TelemetryConfig};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Pick the filter directives: config first, then `RUST_LOG`, then `default_filter`
fn filter_directives(config: Option<&TelemetryConfig>, default_filter: &str) -> String {
    config
        .and_then(|c| c.filter.clone())
        .or_else(|| std::env::var(EnvFilter::DEFAULT_ENV).ok())
        .unwrap_or_else(|| default_filter.to_owned())
}

/// Initialize the global `tracing` subscriber
///
/// Logs go to stderr so command output on stdout stays machine-readable.
///
/// # Errors
///
/// Returns an error if the filter directives are invalid or a global
/// subscriber is already installed
pub fn init(config: Option<&TelemetryConfig>, default_filter: &str) -> anyhow::Result<()> {
    let directives = filter_directives(config, default_filter);
    let filter =
        EnvFilter::try_new(&directives).map_err(|e| anyhow::anyhow!("invalid log filter '{directives}': {e}"))?;

    let format = config.map(|c| c.format).unwrap_or_default();
    let registry = tracing_subscriber::registry().with(filter);

    let result = match format {
        LogFormat::Pretty => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_file(false)
                    .with_line_number(false),
            )
            .try_init(),
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_target(true),
            )
            .try_init(),
    };

    result.map_err(|e| anyhow::anyhow!("failed to install tracing subscriber: {e}"))
}
