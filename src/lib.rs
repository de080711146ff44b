// src/lib.rs
pub mod cli;
pub mod config;
pub mod error;
pub mod health;
pub mod rotate;
pub mod rpc;
pub mod telemetry;

pub use error::{ProbeError, Result};
