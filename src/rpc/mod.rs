// src/rpc/mod.rs
mod client;
mod types;

pub use client::RpcClient;
pub use types::{RpcError, RpcRequest, RpcResponse, JSONRPC_VERSION};
