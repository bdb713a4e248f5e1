//! CLI command definitions.
//!
//! Each subcommand maps to one experiment workflow: a single scenario
//! run, a leadership-style comparison, or a diversity/inclusion
//! comparison.

use clap::{Parser, Subcommand};

pub mod compare;
pub mod run;

/// teamsim - persona-driven team simulation experiments
#[derive(Parser)]
#[command(name = "teamsim")]
#[command(version, about = "teamsim - persona-driven team simulation experiments")]
#[command(long_about = r#"
teamsim builds teams of LLM-backed personas from trait vectors, runs
them through task sets under a process discipline, and records the
results for comparison.

WORKFLOWS:
  run                → Run a single scenario and save the result
  compare-styles     → Run the same task under each leadership style
  compare-diversity  → Run the same task across diversity/inclusion mixes

EXIT CODES:
  0 - Success
  1 - General error
  2 - Invalid arguments
  3 - Engine error
  4 - Scenario error

Set OPENAI_API_KEY or ANTHROPIC_API_KEY for hosted models, or
TEAMSIM_OLLAMA_MODEL for a local Ollama model. Use --mock to run
without any model at all.
"#)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run a single scenario
    Run(run::RunArgs),

    /// Compare leadership styles on the same task
    #[command(name = "compare-styles")]
    CompareStyles(compare::CompareStylesArgs),

    /// Compare diversity/inclusion configurations on the same task
    #[command(name = "compare-diversity")]
    CompareDiversity(compare::CompareDiversityArgs),
}
