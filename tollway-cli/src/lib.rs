//! Command-line interface for pricing and ranking toll routes.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod error;
mod optimize;

pub use error::CliError;
use optimize::{OptimizeArgs, run_optimize};

const ARG_REQUEST: &str = "request";
const ARG_BUDGET: &str = "budget";
const ARG_HAS_TOLL_TAG: &str = "has-toll-tag";
const ARG_DYNAMIC_PRICING: &str = "dynamic-pricing";
const ARG_REGION: &str = "region";
const ARG_DEPARTURE_TIME: &str = "departure-time";
const ENV_REQUEST: &str = "TOLLWAY_CMDS_OPTIMIZE_REQUEST_PATH";

/// Run the Tollway CLI with the current process arguments and environment.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Optimize(args) => run_optimize(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "tollway",
    about = "Estimate tolls and pick routes under a toll budget",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Price candidate routes and rank them against a budget.
    Optimize(OptimizeArgs),
}

#[cfg(test)]
mod tests;
