// src/error.rs
use crate::rpc::RpcError;
use reqwest::StatusCode;

pub type Result<T> = std::result::Result<T, ProbeError>;

/// Every way a probe can fail. The binaries print the `Display` line and exit 1.
#[derive(Debug, thiserror::Error)]
pub enum ProbeError {
    #[error("Invalid endpoint {url}: {reason}")]
    InvalidEndpoint { url: String, reason: String },

    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("RPC call {method} failed: {source}")]
    Transport {
        method: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("RPC call {method} returned HTTP {status}")]
    RpcStatus { method: String, status: StatusCode },

    #[error("RPC call {method} returned an error: {error}")]
    Rpc { method: String, error: RpcError },

    #[error("Failed to decode {method} response: {source}")]
    Decode {
        method: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("RPC call {method} returned neither a result nor an error")]
    EmptyResponse { method: String },

    #[error("Node is syncing")]
    Syncing,

    #[error("Metrics endpoint unreachable: {0}")]
    MetricsUnreachable(#[source] reqwest::Error),

    #[error("Failed to read metrics response: {0}")]
    MetricsBody(#[source] reqwest::Error),

    #[error("Metrics endpoint returned HTTP {0}")]
    MetricsStatus(StatusCode),
}
