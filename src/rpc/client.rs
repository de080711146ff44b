// src/rpc/client.rs
use super::types::{RpcRequest, RpcResponse};
use crate::error::{ProbeError, Result};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{debug, warn};
use url::Url;

/// Minimal JSON-RPC 2.0 client over HTTP POST.
pub struct RpcClient {
    client: Client,
    url: Url,
    next_id: AtomicU64,
}

impl RpcClient {
    pub fn new(client: Client, url: Url) -> Self {
        Self {
            client,
            url,
            next_id: AtomicU64::new(1),
        }
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub async fn call<T: DeserializeOwned>(&self, method: &str, params: Vec<Value>) -> Result<T> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let request = RpcRequest::new(id, method, params);

        debug!("Sending RPC {} (id {}) to {}", method, id, self.url);

        let response = self
            .client
            .post(self.url.as_str())
            .json(&request)
            .send()
            .await
            .map_err(|source| transport(method, source))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|source| transport(method, source))?;

        let envelope: RpcResponse = match serde_json::from_slice(&body) {
            Ok(envelope) => envelope,
            // Servers answer some failures with a bare HTTP error page
            Err(_) if !status.is_success() => {
                warn!("RPC {} answered HTTP {} without a JSON body", method, status);
                return Err(ProbeError::RpcStatus {
                    method: method.to_string(),
                    status,
                });
            }
            Err(source) => return Err(decode(method, source)),
        };

        if let Some(error) = envelope.error {
            warn!("RPC {} returned error: {}", method, error);
            return Err(ProbeError::Rpc {
                method: method.to_string(),
                error,
            });
        }

        // An error status fails the call even when the body carries a result
        if !status.is_success() {
            warn!("RPC {} answered HTTP {}", method, status);
            return Err(ProbeError::RpcStatus {
                method: method.to_string(),
                status,
            });
        }

        let result = envelope.result.ok_or_else(|| ProbeError::EmptyResponse {
            method: method.to_string(),
        })?;

        serde_json::from_value(result).map_err(|source| decode(method, source))
    }
}

fn transport(method: &str, source: reqwest::Error) -> ProbeError {
    warn!("RPC {} transport failure: {}", method, source);
    ProbeError::Transport {
        method: method.to_string(),
        source,
    }
}

fn decode(method: &str, source: serde_json::Error) -> ProbeError {
    ProbeError::Decode {
        method: method.to_string(),
        source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;
    use serde_json::json;

    fn client_for(server: &mockito::Server) -> RpcClient {
        RpcClient::new(Client::new(), Url::parse(&server.url()).unwrap())
    }

    #[tokio::test]
    async fn sends_jsonrpc_envelope_and_decodes_result() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/")
            .match_header("content-type", "application/json")
            .match_body(Matcher::PartialJson(json!({
                "jsonrpc": "2.0",
                "method": "chain_getHeader",
                "params": []
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"jsonrpc":"2.0","id":1,"result":"0x1234"}"#)
            .create_async()
            .await;

        let rpc = client_for(&server);
        let result: String = rpc.call("chain_getHeader", Vec::new()).await.unwrap();

        assert_eq!(result, "0x1234");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn request_ids_increase() {
        let mut server = mockito::Server::new_async().await;
        let first = server
            .mock("POST", "/")
            .match_body(Matcher::PartialJson(json!({"id": 1})))
            .with_body(r#"{"jsonrpc":"2.0","id":1,"result":1}"#)
            .create_async()
            .await;
        let second = server
            .mock("POST", "/")
            .match_body(Matcher::PartialJson(json!({"id": 2})))
            .with_body(r#"{"jsonrpc":"2.0","id":2,"result":2}"#)
            .create_async()
            .await;

        let rpc = client_for(&server);
        let a: u64 = rpc.call("a", Vec::new()).await.unwrap();
        let b: u64 = rpc.call("b", Vec::new()).await.unwrap();

        assert_eq!((a, b), (1, 2));
        first.assert_async().await;
        second.assert_async().await;
    }

    #[tokio::test]
    async fn error_object_becomes_rpc_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/")
            .with_body(
                r#"{"jsonrpc":"2.0","id":1,"error":{"code":-32601,"message":"Method not found"}}"#,
            )
            .create_async()
            .await;

        let err = client_for(&server)
            .call::<String>("missing_method", Vec::new())
            .await
            .unwrap_err();

        match err {
            ProbeError::Rpc { method, error } => {
                assert_eq!(method, "missing_method");
                assert_eq!(error.code, -32601);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn non_json_error_page_becomes_status_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/")
            .with_status(502)
            .with_body("Bad Gateway")
            .create_async()
            .await;

        let err = client_for(&server)
            .call::<String>("system_health", Vec::new())
            .await
            .unwrap_err();

        assert!(matches!(err, ProbeError::RpcStatus { status, .. } if status.as_u16() == 502));
    }

    #[tokio::test]
    async fn error_status_with_result_envelope_is_status_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/")
            .with_status(500)
            .with_body(
                r#"{"jsonrpc":"2.0","id":1,"result":{"isSyncing":false,"peers":3,"shouldHavePeers":true}}"#,
            )
            .create_async()
            .await;

        let err = client_for(&server)
            .call::<Value>("system_health", Vec::new())
            .await
            .unwrap_err();

        assert!(matches!(err, ProbeError::RpcStatus { status, .. } if status.as_u16() == 500));
    }

    #[tokio::test]
    async fn error_status_with_error_envelope_keeps_rpc_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/")
            .with_status(500)
            .with_body(r#"{"jsonrpc":"2.0","id":1,"error":{"code":-32603,"message":"Internal error"}}"#)
            .create_async()
            .await;

        let err = client_for(&server)
            .call::<Value>("system_health", Vec::new())
            .await
            .unwrap_err();

        assert!(matches!(err, ProbeError::Rpc { ref error, .. } if error.code == -32603));
    }

    #[tokio::test]
    async fn wrong_result_shape_is_decode_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/")
            .with_body(r#"{"jsonrpc":"2.0","id":1,"result":{"unexpected":true}}"#)
            .create_async()
            .await;

        let err = client_for(&server)
            .call::<String>("author_rotateKeys", Vec::new())
            .await
            .unwrap_err();

        assert!(matches!(err, ProbeError::Decode { .. }));
    }

    #[tokio::test]
    async fn missing_result_and_error_is_empty_response() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/")
            .with_body(r#"{"jsonrpc":"2.0","id":1}"#)
            .create_async()
            .await;

        let err = client_for(&server)
            .call::<String>("author_rotateKeys", Vec::new())
            .await
            .unwrap_err();

        assert!(matches!(err, ProbeError::EmptyResponse { .. }));
    }

    #[tokio::test]
    async fn unreachable_endpoint_is_transport_error() {
        let rpc = RpcClient::new(Client::new(), Url::parse("http://127.0.0.1:1").unwrap());

        let err = rpc.call::<String>("system_health", Vec::new()).await.unwrap_err();

        assert!(matches!(err, ProbeError::Transport { .. }));
    }
}
