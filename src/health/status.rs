// src/health/status.rs
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Result of the node's `system_health` RPC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemHealth {
    pub is_syncing: bool,
    pub peers: u64,
    pub should_have_peers: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckMode {
    /// Node answers RPC and serves metrics.
    Liveness,
    /// Liveness, and the node is not syncing.
    Readiness,
}

impl CheckMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckMode::Liveness => "liveness",
            CheckMode::Readiness => "readiness",
        }
    }

    pub fn requires_synced(&self) -> bool {
        matches!(self, CheckMode::Readiness)
    }
}

impl fmt::Display for CheckMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CheckMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "liveness" => Ok(CheckMode::Liveness),
            "readiness" => Ok(CheckMode::Readiness),
            other => Err(format!("unknown check mode '{}'", other)),
        }
    }
}
