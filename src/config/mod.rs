// src/config/mod.rs
mod models;

pub use models::*;

/// JSON-RPC endpoint of the local node.
pub const RPC_HOST: &str = "localhost";
pub const RPC_PORT: u16 = 9933;

/// Prometheus exporter of the local node.
pub const METRICS_HOST: &str = "localhost";
pub const METRICS_PORT: u16 = 9615;
pub const METRICS_PATH: &str = "/metrics";

pub fn default_rpc_url() -> String {
    format!("http://{}:{}", RPC_HOST, RPC_PORT)
}

pub fn default_metrics_url() -> String {
    format!("http://{}:{}{}", METRICS_HOST, METRICS_PORT, METRICS_PATH)
}
