// src/health/mod.rs
mod checker;
mod status;

pub use checker::{HealthChecker, SYSTEM_HEALTH_METHOD};
pub use status::{CheckMode, SystemHealth};
