// src/rotate.rs
use crate::config::ProbeConfig;
use crate::error::{ProbeError, Result};
use crate::rpc::RpcClient;
use reqwest::Client;
use std::io::{self, Write};
use tracing::info;

pub const ROTATE_KEYS_METHOD: &str = "author_rotateKeys";

/// Asks the node to generate new session keys and returns them as the node
/// encoded them (SCALE-encoded hex). The value is passed through untouched.
pub async fn rotate_keys(config: &ProbeConfig) -> Result<String> {
    let client = Client::builder().build().map_err(ProbeError::Client)?;
    let rpc = RpcClient::new(client, config.rpc_url.clone());

    let keys: String = rpc.call(ROTATE_KEYS_METHOD, Vec::new()).await?;
    info!("Rotated session keys via {}", rpc.url());

    Ok(keys)
}

/// Writes the rotation outcome as `rotate-keys` prints it and returns the
/// process exit status: the keys on success, one diagnostic line on failure.
pub fn report<W: Write>(result: &Result<String>, out: &mut W) -> io::Result<u8> {
    match result {
        Ok(keys) => {
            writeln!(out, "{}", keys)?;
            Ok(0)
        }
        Err(e) => {
            writeln!(out, "Key rotation failed: {}", e)?;
            Ok(1)
        }
    }
}
