// src/cli.rs
use crate::health::CheckMode;

pub const USAGE: &str = "\
Usage: node-health <command>

Commands:
  help       Show this message
  liveness   Check that the node answers RPC and serves metrics
  readiness  Same as liveness, and fail while the node is syncing";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Help,
    Check(CheckMode),
}

/// Parses the arguments after the program name. Anything other than exactly
/// one known command yields `None`.
pub fn parse_command<I>(args: I) -> Option<Command>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut args = args.into_iter();
    let first = args.next()?;
    if args.next().is_some() {
        return None;
    }

    match first.as_ref() {
        "help" => Some(Command::Help),
        other => other.parse().ok().map(Command::Check),
    }
}
