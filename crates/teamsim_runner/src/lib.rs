//! # teamsim_runner
//!
//! Process runner, result aggregation and comparison for teamsim.
//!
//! This crate drives the execution half of a simulation:
//!
//! - **ProcessRunner**: a state machine over a team's bound tasks,
//!   executing them through an [`teamsim_engine::AgentEngine`] under a
//!   sequential or hierarchical discipline.
//! - **aggregate**: converts raw outputs + timing + configuration into
//!   an immutable [`RunResult`].
//! - **compare**: projects multiple results into a [`ComparisonTable`].
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use teamsim_runner::{
//!     aggregate, compare, ProcessDiscipline, ProcessRunner, RunnerConfig, ScenarioConfig,
//! };
//!
//! let engine = Arc::new(teamsim_engine::LlmEngine::from_env()?);
//! let mut runner = ProcessRunner::new(engine, RunnerConfig::default());
//! let outputs = runner.run(&team, ProcessDiscipline::Hierarchical).await?;
//! let result = aggregate(&team, &outputs, ScenarioConfig::new("basic"))?;
//! println!("{}", compare(&[result]).render());
//! ```

pub mod aggregate;
pub mod compare;
pub mod error;
pub mod runner;

// Re-export main types for convenience
pub use aggregate::{aggregate, PersonaSummary, RunResult, ScenarioConfig, TaskSummary};
pub use compare::{compare, ComparisonRow, ComparisonTable};
pub use error::{RunnerError, RunnerResult};
pub use runner::{
    ProcessDiscipline, ProcessRunner, RunOutputs, RunState, RunnerConfig, TaskExecution,
};
