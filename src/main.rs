// src/main.rs
use node_probes::{
    cli::{self, Command, USAGE},
    config::ProbeConfig,
    health::HealthChecker,
    telemetry,
};
use std::process::ExitCode;
use tracing::debug;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Initialize tracing
    if let Err(e) = telemetry::init() {
        eprintln!("{}", e);
    }

    // Parse command
    let command = match cli::parse_command(std::env::args().skip(1)) {
        Some(command) => command,
        None => {
            println!("{}", USAGE);
            return ExitCode::FAILURE;
        }
    };

    let mode = match command {
        Command::Help => {
            println!("{}", USAGE);
            return ExitCode::SUCCESS;
        }
        Command::Check(mode) => mode,
    };

    // Run the RPC check, then the metrics check
    let result = match ProbeConfig::local().and_then(HealthChecker::new) {
        Ok(checker) => checker.check(mode).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(()) => {
            debug!("{} check passed", mode);
            ExitCode::SUCCESS
        }
        Err(e) => {
            println!("{} check failed: {}", mode, e);
            ExitCode::FAILURE
        }
    }
}
