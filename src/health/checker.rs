// src/health/checker.rs
use super::status::{CheckMode, SystemHealth};
use crate::config::ProbeConfig;
use crate::error::{ProbeError, Result};
use crate::rpc::RpcClient;
use reqwest::{redirect, Client};
use tracing::{debug, warn};
use url::Url;

pub const SYSTEM_HEALTH_METHOD: &str = "system_health";

pub struct HealthChecker {
    rpc: RpcClient,
    client: Client,
    metrics_url: Url,
}

impl HealthChecker {
    pub fn new(config: ProbeConfig) -> Result<Self> {
        // No timeout: the orchestrator running the probe bounds it.
        let client = Client::builder()
            .redirect(redirect::Policy::none())
            .build()
            .map_err(ProbeError::Client)?;

        Ok(Self {
            rpc: RpcClient::new(client.clone(), config.rpc_url),
            client,
            metrics_url: config.metrics_url,
        })
    }

    /// Runs the RPC check then the metrics check, stopping at the first failure.
    pub async fn check(&self, mode: CheckMode) -> Result<()> {
        let health = self.check_node(mode).await?;
        debug!(
            "Node health: syncing={}, peers={}, should_have_peers={}",
            health.is_syncing, health.peers, health.should_have_peers
        );

        self.check_metrics().await
    }

    /// Fetches `system_health`; readiness additionally rejects a syncing node.
    /// Peer counts are reported but never gate the result.
    pub async fn check_node(&self, mode: CheckMode) -> Result<SystemHealth> {
        let health: SystemHealth = self.rpc.call(SYSTEM_HEALTH_METHOD, Vec::new()).await?;

        if mode.requires_synced() && health.is_syncing {
            warn!("{} check failed: node is syncing", mode);
            return Err(ProbeError::Syncing);
        }

        Ok(health)
    }

    pub async fn check_metrics(&self) -> Result<()> {
        let response = self
            .client
            .get(self.metrics_url.as_str())
            .send()
            .await
            .map_err(|e| {
                warn!("Metrics endpoint {} unreachable: {}", self.metrics_url, e);
                ProbeError::MetricsUnreachable(e)
            })?;

        let status = response.status();

        // Consumes the response, releasing the connection whatever the outcome.
        let body = response.bytes().await.map_err(|e| {
            warn!("Failed to read metrics body: {}", e);
            ProbeError::MetricsBody(e)
        })?;
        debug!("Metrics endpoint returned {} ({} bytes)", status, body.len());

        if status.as_u16() >= 300 {
            warn!("Metrics endpoint returned HTTP {}", status);
            return Err(ProbeError::MetricsStatus(status));
        }

        Ok(())
    }
}
