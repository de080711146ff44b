//! demos/fake_node.rs
//! Stand-in node for exercising the probes by hand.
//! Run: cargo run --example fake_node
//!
//! Env: NODE_SYNCING=1, NODE_PEERS=<n>, METRICS_STATUS=<http status>

use hyper::{
    service::{make_service_fn, service_fn},
    Body, Method, Request, Response, Server, StatusCode,
};
use node_probes::config::{METRICS_PATH, METRICS_PORT, RPC_PORT};
use node_probes::rpc::{RpcError, JSONRPC_VERSION};
use prometheus::{Encoder, IntCounterVec, IntGauge, Opts, Registry, TextEncoder};
use rand::Rng;
use serde_json::{json, Value};
use std::{convert::Infallible, net::SocketAddr, sync::Arc};

struct NodeState {
    is_syncing: bool,
    peers: u64,
    metrics_status: StatusCode,
    registry: Registry,
    rpc_calls: IntCounterVec,
    peers_gauge: IntGauge,
}

impl NodeState {
    fn from_env() -> anyhow::Result<Self> {
        let is_syncing = std::env::var("NODE_SYNCING").map(|v| v == "1").unwrap_or(false);
        let peers = std::env::var("NODE_PEERS").ok().and_then(|v| v.parse().ok()).unwrap_or(3);
        let metrics_status = std::env::var("METRICS_STATUS")
            .ok()
            .and_then(|v| v.parse::<u16>().ok())
            .map(StatusCode::from_u16)
            .transpose()?
            .unwrap_or(StatusCode::OK);

        let registry = Registry::new();
        let rpc_calls = IntCounterVec::new(
            Opts::new("fake_node_rpc_calls_total", "JSON-RPC calls served"),
            &["method"],
        )?;
        let peers_gauge = IntGauge::new("fake_node_peers", "Connected peers")?;
        registry.register(Box::new(rpc_calls.clone()))?;
        registry.register(Box::new(peers_gauge.clone()))?;
        peers_gauge.set(peers as i64);

        Ok(Self {
            is_syncing,
            peers,
            metrics_status,
            registry,
            rpc_calls,
            peers_gauge,
        })
    }

    fn dispatch(&self, method: &str) -> Result<Value, RpcError> {
        self.rpc_calls.with_label_values(&[method]).inc();

        match method {
            "system_health" => Ok(json!({
                "isSyncing": self.is_syncing,
                "peers": self.peers,
                "shouldHavePeers": true,
            })),
            "author_rotateKeys" => Ok(Value::String(random_session_keys())),
            other => Err(RpcError {
                code: -32601,
                message: format!("Method not found: {}", other),
                data: None,
            }),
        }
    }
}

fn random_session_keys() -> String {
    let bytes: [u8; 32] = rand::thread_rng().gen();
    let hex: String = bytes.iter().map(|b| format!("{:02x}", b)).collect();
    format!("0x{}", hex)
}

async fn handle_rpc(req: Request<Body>, state: Arc<NodeState>) -> Result<Response<Body>, Infallible> {
    if req.method() != Method::POST {
        return Ok(status_only(StatusCode::METHOD_NOT_ALLOWED));
    }

    let body = match hyper::body::to_bytes(req.into_body()).await {
        Ok(body) => body,
        Err(_) => return Ok(status_only(StatusCode::BAD_REQUEST)),
    };
    let request: Value = match serde_json::from_slice(&body) {
        Ok(request) => request,
        Err(_) => return Ok(status_only(StatusCode::BAD_REQUEST)),
    };

    let id = request.get("id").cloned().unwrap_or(Value::Null);
    let method = request.get("method").and_then(Value::as_str).unwrap_or_default();

    let reply = match state.dispatch(method) {
        Ok(result) => json!({"jsonrpc": JSONRPC_VERSION, "id": id, "result": result}),
        Err(error) => json!({"jsonrpc": JSONRPC_VERSION, "id": id, "error": error}),
    };
    println!("[rpc] {} -> {}", method, reply);

    Ok(Response::builder()
        .header("Content-Type", "application/json")
        .body(Body::from(reply.to_string()))
        .unwrap())
}

async fn handle_metrics(req: Request<Body>, state: Arc<NodeState>) -> Result<Response<Body>, Infallible> {
    if req.uri().path() != METRICS_PATH {
        return Ok(status_only(StatusCode::NOT_FOUND));
    }

    state.peers_gauge.set(state.peers as i64);
    let mut buffer = Vec::new();
    if TextEncoder::new().encode(&state.registry.gather(), &mut buffer).is_err() {
        return Ok(status_only(StatusCode::INTERNAL_SERVER_ERROR));
    }

    Ok(Response::builder()
        .status(state.metrics_status)
        .header("Content-Type", "text/plain; version=0.0.4")
        .body(Body::from(buffer))
        .unwrap())
}

fn status_only(status: StatusCode) -> Response<Body> {
    Response::builder().status(status).body(Body::empty()).unwrap()
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let state = Arc::new(NodeState::from_env()?);

    let rpc_addr = SocketAddr::from(([127, 0, 0, 1], RPC_PORT));
    let rpc_state = state.clone();
    let rpc_svc = make_service_fn(move |_conn| {
        let st = rpc_state.clone();
        async move { Ok::<_, Infallible>(service_fn(move |req| handle_rpc(req, st.clone()))) }
    });

    let metrics_addr = SocketAddr::from(([127, 0, 0, 1], METRICS_PORT));
    let metrics_state = state.clone();
    let metrics_svc = make_service_fn(move |_conn| {
        let st = metrics_state.clone();
        async move { Ok::<_, Infallible>(service_fn(move |req| handle_metrics(req, st.clone()))) }
    });

    println!(
        "Fake node: rpc on http://{}  metrics on http://{}{}  [syncing={} peers={} metrics_status={}]",
        rpc_addr, metrics_addr, METRICS_PATH, state.is_syncing, state.peers, state.metrics_status
    );

    tokio::try_join!(
        Server::bind(&rpc_addr).serve(rpc_svc),
        Server::bind(&metrics_addr).serve(metrics_svc),
    )?;
    Ok(())
}
