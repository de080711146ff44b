// src/telemetry.rs
use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

/// Logs go to stderr; stdout is reserved for the probe's diagnostics and output.
pub fn init() -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("node_probes=warn"))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow!("Failed to install tracing subscriber: {}", e))
}
