//! Result aggregation: raw run outputs into a canonical metrics record.
//!
//! Aggregation is a pure function of its inputs. The only timestamps it
//! uses are the ones the runner recorded; calling it twice with the
//! same arguments yields equal records.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use teamsim_core::{PersonaVariant, Team, TraitVector};

use crate::error::{RunnerError, RunnerResult};
use crate::runner::{ProcessDiscipline, RunOutputs, TaskExecution};

/// Length of the description prefix kept in task summaries.
const SUMMARY_PREFIX_CHARS: usize = 100;

/// The scenario parameters that produced a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioConfig {
    /// Human-readable label, used in comparison rows and filenames.
    pub label: String,
    /// Free-form parameters (leadership style, diversity level, ...).
    #[serde(default)]
    pub parameters: BTreeMap<String, String>,
}

impl ScenarioConfig {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            parameters: BTreeMap::new(),
        }
    }

    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.parameters.insert(key.into(), value.into());
        self
    }
}

/// Snapshot of one persona at aggregation time.
///
/// Owned copies, not references: later mutation of the team cannot
/// retroactively change a saved result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonaSummary {
    pub name: String,
    pub role: String,
    pub expertise: String,
    pub traits: TraitVector,
    pub variant: PersonaVariant,
}

/// Display-oriented task summary; the description is truncated but the
/// raw outputs elsewhere in the record stay verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskSummary {
    pub description: String,
    pub assigned_role: String,
}

/// The immutable, serializable outcome record of one completed run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunResult {
    pub config: ScenarioConfig,
    pub discipline: ProcessDiscipline,
    pub team_snapshot: Vec<PersonaSummary>,
    pub task_summaries: Vec<TaskSummary>,
    /// Opaque per-task outputs, stored verbatim in execution order.
    pub raw_outputs: Vec<TaskExecution>,
    /// Wall-clock duration in seconds; never negative.
    pub duration_seconds: f64,
    pub team_size: usize,
    pub task_count: usize,
    /// When the run finished, as recorded by the runner.
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Aggregate a completed pass into a [`RunResult`].
///
/// Fails with [`RunnerError::NegativeDuration`] when the recorded end
/// precedes the start; a misordered clock read is a defect and is
/// never silently clamped.
pub fn aggregate(
    team: &Team,
    outputs: &RunOutputs,
    config: ScenarioConfig,
) -> RunnerResult<RunResult> {
    let elapsed = outputs.finished_at - outputs.started_at;
    if outputs.finished_at < outputs.started_at {
        // Compared on the timestamps, not the float: a misordering
        // below millisecond resolution must still be rejected.
        return Err(RunnerError::NegativeDuration {
            seconds: elapsed
                .num_microseconds()
                .map(|us| us as f64 / 1_000_000.0)
                .unwrap_or_else(|| elapsed.num_milliseconds() as f64 / 1000.0),
        });
    }
    let duration_seconds = elapsed.num_milliseconds() as f64 / 1000.0;

    let team_snapshot: Vec<PersonaSummary> = team
        .personas()
        .iter()
        .map(|p| PersonaSummary {
            name: p.name.clone(),
            role: p.role.clone(),
            expertise: p.expertise.clone(),
            traits: p.traits.clone(),
            variant: p.variant,
        })
        .collect();

    let task_summaries: Vec<TaskSummary> = team
        .tasks()
        .iter()
        .map(|t| TaskSummary {
            description: truncate_description(&t.description),
            assigned_role: t.assigned_role.clone(),
        })
        .collect();

    Ok(RunResult {
        config,
        discipline: outputs.discipline,
        team_size: team_snapshot.len(),
        task_count: task_summaries.len(),
        team_snapshot,
        task_summaries,
        raw_outputs: outputs.executions.clone(),
        duration_seconds,
        timestamp: outputs.finished_at,
    })
}

/// Keep a 100-character prefix with an ellipsis marker, for display.
fn truncate_description(description: &str) -> String {
    if description.chars().count() <= SUMMARY_PREFIX_CHARS {
        return description.to_string();
    }
    let prefix: String = description.chars().take(SUMMARY_PREFIX_CHARS).collect();
    format!("{}...", prefix)
}
