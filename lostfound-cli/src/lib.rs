//! Command-line interface for the lost-and-found matching engine.
//!
//! The `match` subcommand reads a JSON snapshot of both report collections,
//! keeps the eligible found items, ranks every pair and prints the admitted
//! candidates as JSON.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod error;
mod io;
mod logging;
mod matches;

pub use error::CliError;

use matches::{MatchArgs, run_match};

const ARG_SNAPSHOT: &str = "snapshot";
const ARG_MIN_SCORE: &str = "min-score";
const ARG_LIMIT: &str = "limit";
const ARG_FOUND_SCOPE: &str = "found-scope";
const ARG_OUTPUT: &str = "output";
const ENV_SNAPSHOT: &str = "LOSTFOUND_CMDS_MATCH_SNAPSHOT";

/// Run the CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError`] when arguments, configuration, the snapshot or the
/// report destination are unusable.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    logging::init();
    match cli.command {
        Command::Match(args) => run_match(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "lostfound",
    about = "Admin tooling for the campus lost-and-found portal",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Propose matches between lost and found items.
    Match(MatchArgs),
}

#[cfg(test)]
mod tests;
