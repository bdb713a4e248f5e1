//! teamsim CLI - Main entry point.
//!
//! Exit codes:
//! - 0: Success
//! - 1: General error
//! - 2: Invalid arguments
//! - 3: Engine error
//! - 4: Scenario error

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;
mod results;

use commands::{Cli, Commands};

/// CI-friendly exit codes
pub struct ExitCodes;

impl ExitCodes {
    pub const SUCCESS: u8 = 0;
    pub const GENERAL_ERROR: u8 = 1;
    pub const INVALID_ARGS: u8 = 2;
    pub const ENGINE_ERROR: u8 = 3;
    pub const SCENARIO_ERROR: u8 = 4;
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging; RUST_LOG overrides the flag-derived level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_directives(cli.verbose, cli.quiet)));
    let log_result = tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .try_init();

    if log_result.is_err() {
        // Logging already initialized, continue
    }

    let result = match cli.command {
        Commands::Run(args) => commands::run::execute(args).await,
        Commands::CompareStyles(args) => commands::compare::execute_styles(args).await,
        Commands::CompareDiversity(args) => commands::compare::execute_diversity(args).await,
    };

    match result {
        Ok(()) => ExitCode::from(ExitCodes::SUCCESS),
        Err(e) => {
            let exit_code = categorize_error(&e);
            eprintln!("❌ Error: {:#}", e);
            ExitCode::from(exit_code)
        }
    }
}

/// Log filter directives for the global verbosity flags.
fn log_directives(verbose: bool, quiet: bool) -> &'static str {
    if verbose {
        "teamsim=debug,info"
    } else if quiet {
        "teamsim=warn,error"
    } else {
        "teamsim=info,warn"
    }
}

/// Categorize error to determine exit code
fn categorize_error(e: &anyhow::Error) -> u8 {
    let msg = e.to_string().to_lowercase();

    if msg.contains("api") || msg.contains("engine") || msg.contains("network") {
        ExitCodes::ENGINE_ERROR
    } else if msg.contains("scenario") || msg.contains("roster") || msg.contains("task kind") {
        ExitCodes::SCENARIO_ERROR
    } else if msg.contains("argument") || msg.contains("option") || msg.contains("unknown") {
        ExitCodes::INVALID_ARGS
    } else {
        ExitCodes::GENERAL_ERROR
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_directives_follow_verbosity_flags() {
        assert_eq!(log_directives(false, false), "teamsim=info,warn");
        assert_eq!(log_directives(true, false), "teamsim=debug,info");
        assert_eq!(log_directives(false, true), "teamsim=warn,error");
    }
}
