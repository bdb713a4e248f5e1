//! Process runner: drives one execution pass through the engine.
//!
//! The runner is a small state machine (`Idle -> Running -> Completed`
//! or `Running -> Failed`) over a team and its bound tasks. Execution
//! is strictly turn-based: one engine call at a time, each awaited
//! before the next is issued, for both disciplines.
//!
//! Disciplines:
//!
//! - **Sequential**: tasks run in binding order; each task's context
//!   carries the verbatim outputs of all prior tasks in the run.
//! - **Hierarchical**: every non-coordinator task runs first (binding
//!   order), then the coordinator's task(s) run last with the
//!   concatenated outputs of every other task as synthesized context.
//!   The coordinator is the first Leader-variant persona or, when the
//!   team has no leader, the persona at position 0.

use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{error, info};
use uuid::Uuid;

use teamsim_core::Team;
use teamsim_engine::{AgentEngine, TaskPrompt};

use crate::error::{RunnerError, RunnerResult};

/// Execution order contract for a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProcessDiscipline {
    Sequential,
    Hierarchical,
}

impl ProcessDiscipline {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProcessDiscipline::Sequential => "sequential",
            ProcessDiscipline::Hierarchical => "hierarchical",
        }
    }
}

impl std::fmt::Display for ProcessDiscipline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ProcessDiscipline {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sequential" => Ok(ProcessDiscipline::Sequential),
            "hierarchical" => Ok(ProcessDiscipline::Hierarchical),
            other => Err(format!("Unknown process discipline: {}", other)),
        }
    }
}

/// Runner state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunState {
    /// Run has not started
    Idle,
    /// Run is in progress
    Running,
    /// Run finished; all tasks produced output
    Completed,
    /// Run aborted at a task
    Failed,
}

/// One executed task: the role that ran it and its verbatim output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskExecution {
    pub role: String,
    pub output: String,
}

/// Raw outputs of one completed pass, in execution order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunOutputs {
    pub run_id: Uuid,
    pub discipline: ProcessDiscipline,
    pub executions: Vec<TaskExecution>,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

/// Runner configuration, passed in explicitly at construction.
#[derive(Debug, Clone, Default)]
pub struct RunnerConfig {
    /// Deadline for each engine call. `None` means the runner waits
    /// indefinitely and cancellation is the caller's concern.
    pub task_timeout: Option<Duration>,
}

/// Drives one execution pass of a team through the engine.
///
/// A runner is single-use: once it reaches a terminal state, further
/// `run` calls fail with `InvalidState`.
pub struct ProcessRunner {
    engine: Arc<dyn AgentEngine>,
    config: RunnerConfig,
    state: RunState,
}

impl ProcessRunner {
    pub fn new(engine: Arc<dyn AgentEngine>, config: RunnerConfig) -> Self {
        Self {
            engine,
            config,
            state: RunState::Idle,
        }
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    /// Execute all bound tasks under the given discipline.
    ///
    /// Fails without transitioning when the team has no personas or no
    /// tasks. On an engine failure or timeout the runner transitions to
    /// `Failed`, does not attempt remaining tasks, and the error names
    /// the role that was executing.
    pub async fn run(
        &mut self,
        team: &Team,
        discipline: ProcessDiscipline,
    ) -> RunnerResult<RunOutputs> {
        if self.state != RunState::Idle {
            return Err(RunnerError::InvalidState(format!(
                "runner already ran (state={:?})",
                self.state
            )));
        }
        if team.is_empty() {
            return Err(RunnerError::EmptyTeam);
        }
        if team.tasks().is_empty() {
            return Err(RunnerError::NoTasks);
        }

        self.state = RunState::Running;
        let run_id = Uuid::new_v4();
        let started_at = Utc::now();

        info!(
            %run_id,
            discipline = %discipline,
            team_size = team.len(),
            task_count = team.tasks().len(),
            engine = self.engine.name(),
            "starting run"
        );

        let order = execution_order(team, discipline);
        let mut executions: Vec<TaskExecution> = Vec::with_capacity(order.len());

        for (position, task_index) in order.iter().enumerate() {
            let task = &team.tasks()[*task_index];
            let persona = team
                .persona_by_role(&task.assigned_role)
                .ok_or_else(|| {
                    RunnerError::InvalidState(format!(
                        "task bound to role '{}' with no persona",
                        task.assigned_role
                    ))
                })?;

            let context = build_context(&task.context, &executions, discipline, position, team);
            let prompt = TaskPrompt {
                role: persona.role.clone(),
                narrative: persona.narrative.clone(),
                description: task.description.clone(),
                expected_output: task.expected_output.clone(),
                context,
            };

            info!(
                "Executing task [{}/{}] for role '{}'",
                position + 1,
                order.len(),
                persona.role
            );

            let output = match self.execute_one(&prompt).await {
                Ok(output) => output,
                Err(e) => {
                    error!(role = %persona.role, "run failed: {}", e);
                    self.state = RunState::Failed;
                    return Err(e);
                }
            };

            executions.push(TaskExecution {
                role: persona.role.clone(),
                output,
            });
        }

        self.state = RunState::Completed;
        let finished_at = Utc::now();
        info!(%run_id, "run completed");

        Ok(RunOutputs {
            run_id,
            discipline,
            executions,
            started_at,
            finished_at,
        })
    }

    /// Issue one engine call, honoring the configured deadline.
    async fn execute_one(&self, prompt: &TaskPrompt) -> RunnerResult<String> {
        let call = self.engine.execute(prompt);

        match self.config.task_timeout {
            Some(deadline) => match tokio::time::timeout(deadline, call).await {
                Ok(result) => result.map_err(|source| RunnerError::Engine {
                    role: prompt.role.clone(),
                    source,
                }),
                Err(_) => Err(RunnerError::TaskTimeout {
                    role: prompt.role.clone(),
                }),
            },
            None => call.await.map_err(|source| RunnerError::Engine {
                role: prompt.role.clone(),
                source,
            }),
        }
    }
}

/// Compute the task execution order (indices into `team.tasks()`).
fn execution_order(team: &Team, discipline: ProcessDiscipline) -> Vec<usize> {
    match discipline {
        ProcessDiscipline::Sequential => (0..team.tasks().len()).collect(),
        ProcessDiscipline::Hierarchical => {
            let coordinator_role = team.coordinator().map(|p| p.role.clone());
            let is_coordinator = |index: &usize| {
                coordinator_role
                    .as_deref()
                    .map(|role| team.tasks()[*index].assigned_role == role)
                    .unwrap_or(false)
            };

            let mut order: Vec<usize> = (0..team.tasks().len())
                .filter(|i| !is_coordinator(i))
                .collect();
            order.extend((0..team.tasks().len()).filter(is_coordinator));
            order
        }
    }
}

/// Build the context string handed to the engine for one task.
///
/// Sequential runs accumulate every prior output; hierarchical runs
/// hand prior outputs only to the coordinator's tasks, which by
/// construction run after everything else.
fn build_context(
    bound_context: &str,
    executions: &[TaskExecution],
    discipline: ProcessDiscipline,
    position: usize,
    team: &Team,
) -> String {
    let include_prior = match discipline {
        ProcessDiscipline::Sequential => true,
        ProcessDiscipline::Hierarchical => {
            // Positions past the non-coordinator block belong to the
            // coordinator's synthesis tasks.
            let coordinator_role = team.coordinator().map(|p| p.role.clone());
            let non_coordinator_count = team
                .tasks()
                .iter()
                .filter(|t| Some(t.assigned_role.as_str()) != coordinator_role.as_deref())
                .count();
            position >= non_coordinator_count
        }
    };

    let mut sections: Vec<String> = Vec::new();
    if !bound_context.is_empty() {
        sections.push(bound_context.to_string());
    }
    if include_prior {
        for execution in executions {
            sections.push(format!(
                "Output from {}:\n{}",
                execution.role, execution.output
            ));
        }
    }
    sections.join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use teamsim_core::{PersonaFactory, PersonaVariant, TraitVector};
    use teamsim_engine::MockEngine;

    fn team_of(roles: &[&str]) -> Team {
        let factory = PersonaFactory::new();
        let mut team = Team::new();
        for role in roles {
            let persona = factory
                .build(
                    format!("{} person", role),
                    *role,
                    "testing",
                    TraitVector::new(),
                    PersonaVariant::Standard,
                    "",
                )
                .unwrap();
            team.add_persona(persona).unwrap();
        }
        team
    }

    #[tokio::test]
    async fn test_empty_team_rejected() {
        let mut runner = ProcessRunner::new(Arc::new(MockEngine::new()), RunnerConfig::default());
        let result = runner.run(&Team::new(), ProcessDiscipline::Sequential).await;
        assert!(matches!(result, Err(RunnerError::EmptyTeam)));
        assert_eq!(runner.state(), RunState::Idle);
    }

    #[tokio::test]
    async fn test_no_tasks_rejected() {
        let team = team_of(&["Analyst"]);
        let mut runner = ProcessRunner::new(Arc::new(MockEngine::new()), RunnerConfig::default());
        let result = runner.run(&team, ProcessDiscipline::Sequential).await;
        assert!(matches!(result, Err(RunnerError::NoTasks)));
        assert_eq!(runner.state(), RunState::Idle);
    }

    #[tokio::test]
    async fn test_sequential_order_and_context_chain() {
        let mut team = team_of(&["A", "B", "C"]);
        team.bind_task("task one", "A", "out", "").unwrap();
        team.bind_task("task two", "B", "out", "").unwrap();
        team.bind_task("task three", "C", "out", "").unwrap();

        let engine = MockEngine::new()
            .add_response("alpha output")
            .add_response("beta output")
            .add_response("gamma output");
        let mut runner = ProcessRunner::new(Arc::new(engine.clone()), RunnerConfig::default());

        let outputs = runner.run(&team, ProcessDiscipline::Sequential).await.unwrap();
        assert_eq!(runner.state(), RunState::Completed);
        assert_eq!(engine.call_count(), 3);

        let roles: Vec<_> = outputs.executions.iter().map(|e| e.role.as_str()).collect();
        assert_eq!(roles, vec!["A", "B", "C"]);

        // Task three's context carries tasks one and two verbatim.
        let captured = engine.captured_prompts();
        assert!(captured[2].context.contains("alpha output"));
        assert!(captured[2].context.contains("beta output"));
        assert!(captured[0].context.is_empty());
    }

    #[tokio::test]
    async fn test_hierarchical_coordinator_runs_last() {
        let factory = PersonaFactory::new();
        let mut team = Team::new();
        team.add_persona(
            factory
                .build(
                    "Alex",
                    "Team Leader",
                    "",
                    TraitVector::new(),
                    PersonaVariant::Leader(teamsim_core::LeadershipStyle::Democratic),
                    "",
                )
                .unwrap(),
        )
        .unwrap();
        team.add_persona(
            factory
                .build("Drew", "Analyst", "x", TraitVector::new(), PersonaVariant::Standard, "")
                .unwrap(),
        )
        .unwrap();

        // Leader's task is bound first but must execute last.
        team.bind_task("synthesize", "Team Leader", "plan", "").unwrap();
        team.bind_task("analyze", "Analyst", "report", "").unwrap();

        let engine = MockEngine::new();
        let mut runner = ProcessRunner::new(Arc::new(engine.clone()), RunnerConfig::default());
        let outputs = runner.run(&team, ProcessDiscipline::Hierarchical).await.unwrap();

        let roles: Vec<_> = outputs.executions.iter().map(|e| e.role.as_str()).collect();
        assert_eq!(roles, vec!["Analyst", "Team Leader"]);

        // The coordinator receives the analyst's output as context.
        let captured = engine.captured_prompts();
        assert!(captured[1].context.contains("[Analyst] output"));
    }

    #[tokio::test]
    async fn test_hierarchical_fallback_without_leader() {
        // No Leader variant: position 0 ("A") coordinates and runs last.
        let mut team = team_of(&["A", "B", "C"]);
        team.bind_task("t1", "A", "out", "").unwrap();
        team.bind_task("t2", "B", "out", "").unwrap();
        team.bind_task("t3", "C", "out", "").unwrap();

        let engine = MockEngine::new();
        let mut runner = ProcessRunner::new(Arc::new(engine), RunnerConfig::default());
        let outputs = runner.run(&team, ProcessDiscipline::Hierarchical).await.unwrap();

        let roles: Vec<_> = outputs.executions.iter().map(|e| e.role.as_str()).collect();
        assert_eq!(roles, vec!["B", "C", "A"]);
    }

    #[tokio::test]
    async fn test_engine_failure_aborts_and_names_role() {
        let mut team = team_of(&["A", "B", "C"]);
        team.bind_task("t1", "A", "out", "").unwrap();
        team.bind_task("t2", "B", "out", "").unwrap();
        team.bind_task("t3", "C", "out", "").unwrap();

        let engine = MockEngine::new().fail_at(1, "engine exploded");
        let mut runner = ProcessRunner::new(Arc::new(engine.clone()), RunnerConfig::default());

        let result = runner.run(&team, ProcessDiscipline::Sequential).await;
        assert!(matches!(result, Err(RunnerError::Engine { ref role, .. }) if role == "B"));
        assert_eq!(runner.state(), RunState::Failed);
        // The third task is never attempted.
        assert_eq!(engine.call_count(), 2);
    }

    #[tokio::test]
    async fn test_task_timeout_transitions_to_failed() {
        let mut team = team_of(&["A"]);
        team.bind_task("t1", "A", "out", "").unwrap();

        let engine = MockEngine::new().with_delay(Duration::from_millis(200));
        let config = RunnerConfig {
            task_timeout: Some(Duration::from_millis(10)),
        };
        let mut runner = ProcessRunner::new(Arc::new(engine), config);

        let result = runner.run(&team, ProcessDiscipline::Sequential).await;
        assert!(matches!(result, Err(RunnerError::TaskTimeout { ref role }) if role == "A"));
        assert_eq!(runner.state(), RunState::Failed);
    }

    #[tokio::test]
    async fn test_runner_is_single_use() {
        let mut team = team_of(&["A"]);
        team.bind_task("t1", "A", "out", "").unwrap();

        let mut runner = ProcessRunner::new(Arc::new(MockEngine::new()), RunnerConfig::default());
        runner.run(&team, ProcessDiscipline::Sequential).await.unwrap();

        let again = runner.run(&team, ProcessDiscipline::Sequential).await;
        assert!(matches!(again, Err(RunnerError::InvalidState(_))));
    }
}
