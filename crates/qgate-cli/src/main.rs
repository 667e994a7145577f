//! # qgate
//!
//! Evaluate quality gates over a static-analysis report and exit non-zero
//! when a critical gate fails.
//!
//! ```bash
//! qgate                      # same as `qgate check`
//! qgate check --format json --output gates.json
//! qgate aggregates
//! qgate init
//! ```

mod commands;

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use qgate_core::errors::QgateErrorCode;

use commands::{aggregates, check, gates, init};

#[derive(Parser, Debug)]
#[command(name = "qgate")]
#[command(about = "Quality gate evaluator for static-analysis score reports")]
#[command(version)]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    check: check::CheckArgs,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Evaluate all gates and exit 1 when the run is blocked (default)
    Check(check::CheckArgs),
    /// Print per-dimension and overall aggregates
    Aggregates(aggregates::AggregatesArgs),
    /// List the resolved gate configuration
    Gates(gates::GatesArgs),
    /// Write a default qgate.toml
    Init(init::InitArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let command = cli.command.unwrap_or(Commands::Check(cli.check));
    qgate_core::tracing::init_tracing(verbosity(&command));

    let result = match command {
        Commands::Check(args) => check::run(args),
        Commands::Aggregates(args) => aggregates::run(args),
        Commands::Gates(args) => gates::run(args),
        Commands::Init(args) => init::run(args),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!(code = e.error_code(), "{e}");
            eprintln!("error: {}", e.coded_string());
            ExitCode::FAILURE
        }
    }
}

fn verbosity(command: &Commands) -> u8 {
    match command {
        Commands::Check(a) => a.common.verbose,
        Commands::Aggregates(a) => a.common.verbose,
        Commands::Gates(a) => a.common.verbose,
        Commands::Init(a) => a.verbose,
    }
}
