#![allow(clippy::must_use_candidate)]

pub mod api;
mod env;
mod loader;
pub mod telemetry;

use serde::Deserialize;

pub use api::*;
pub use telemetry::*;

/// Top-level configuration
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// API endpoint and credentials
    pub api: ApiConfig,
    /// Logging configuration
    #[serde(default)]
    pub telemetry: Option<TelemetryConfig>,
}
