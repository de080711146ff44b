// src/bin/rotate_keys.rs
use node_probes::{config::ProbeConfig, rotate, telemetry};
use std::io;
use std::process::ExitCode;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Initialize tracing
    if let Err(e) = telemetry::init() {
        eprintln!("{}", e);
    }

    // Ask the node for new session keys
    let result = match ProbeConfig::local() {
        Ok(config) => rotate::rotate_keys(&config).await,
        Err(e) => Err(e),
    };

    // Print keys or diagnostic on stdout
    let code = rotate::report(&result, &mut io::stdout().lock()).unwrap_or(1);
    ExitCode::from(code)
}
