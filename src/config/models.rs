// src/config/models.rs
use super::{default_metrics_url, default_rpc_url};
use crate::error::{ProbeError, Result};
use url::Url;

/// Where the probes send their requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeConfig {
    pub rpc_url: Url,
    pub metrics_url: Url,
}

impl ProbeConfig {
    pub fn new(rpc_url: &str, metrics_url: &str) -> Result<Self> {
        let config = Self {
            rpc_url: parse_endpoint(rpc_url)?,
            metrics_url: parse_endpoint(metrics_url)?,
        };

        config.validate()?;
        Ok(config)
    }

    /// The fixed endpoints of a node running on this host.
    pub fn local() -> Result<Self> {
        Self::new(&default_rpc_url(), &default_metrics_url())
    }

    pub fn validate(&self) -> Result<()> {
        for url in [&self.rpc_url, &self.metrics_url] {
            if !matches!(url.scheme(), "http" | "https") {
                return Err(ProbeError::InvalidEndpoint {
                    url: url.to_string(),
                    reason: format!("unsupported scheme '{}'", url.scheme()),
                });
            }
        }
        Ok(())
    }
}

fn parse_endpoint(raw: &str) -> Result<Url> {
    Url::parse(raw).map_err(|e| ProbeError::InvalidEndpoint {
        url: raw.to_string(),
        reason: e.to_string(),
    })
}
