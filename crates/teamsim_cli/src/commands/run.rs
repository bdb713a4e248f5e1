//! Run command - Run a single scenario end to end.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use tracing::info;

use teamsim_core::LeadershipStyle;
use teamsim_engine::{AgentEngine, LlmEngine, MockEngine};
use teamsim_runner::{aggregate, ProcessDiscipline, ProcessRunner, RunResult, RunnerConfig};
use teamsim_scenarios::{DiversityLevel, InclusionLevel, Scenario, TaskKind};

use crate::results::save_result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ScenarioKind {
    Basic,
    Leadership,
    Diversity,
}

#[derive(Args)]
pub struct RunArgs {
    /// Scenario family to run
    #[arg(long, value_enum, default_value = "basic")]
    scenario: ScenarioKind,

    /// Task set; defaults to the scenario family's first task
    #[arg(long)]
    task: Option<TaskKind>,

    /// Leadership style (leadership scenario only)
    #[arg(long, default_value = "democratic")]
    style: LeadershipStyle,

    /// Diversity level (diversity scenario only)
    #[arg(long, default_value = "high")]
    diversity: DiversityLevel,

    /// Inclusion level (diversity scenario only)
    #[arg(long, default_value = "high")]
    inclusion: InclusionLevel,

    /// Add the dissenting member (basic scenario only)
    #[arg(long)]
    dissenter: bool,

    /// Override the scenario's default process discipline
    #[arg(long)]
    discipline: Option<ProcessDiscipline>,

    /// Per-task timeout in seconds
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// Use the scripted mock engine instead of a model
    #[arg(long)]
    mock: bool,

    /// Directory for result files
    #[arg(long, default_value = "data")]
    output_dir: PathBuf,
}

pub async fn execute(args: RunArgs) -> Result<()> {
    let scenario = scenario_from_args(&args);
    let engine = build_engine(args.mock)?;

    println!("🧪 Running scenario: {}", scenario.label());

    let result = run_scenario(
        &scenario,
        engine,
        args.discipline,
        args.timeout_secs.map(Duration::from_secs),
    )
    .await?;

    print_summary(&result);

    let path = save_result(&args.output_dir, &result)?;
    println!("💾 Results saved to {}", path.display());

    Ok(())
}

fn scenario_from_args(args: &RunArgs) -> Scenario {
    match args.scenario {
        ScenarioKind::Basic => Scenario::Basic {
            include_dissenter: args.dissenter,
            task: args.task.unwrap_or(TaskKind::ProblemSolving),
        },
        ScenarioKind::Leadership => Scenario::Leadership {
            style: args.style,
            task: args.task.unwrap_or(TaskKind::Creative),
        },
        ScenarioKind::Diversity => Scenario::Diversity {
            diversity: args.diversity,
            inclusion: args.inclusion,
            task: args.task.unwrap_or(TaskKind::Innovation),
        },
    }
}

/// Pick the engine: a scripted mock, or whatever the environment offers.
pub(crate) fn build_engine(mock: bool) -> Result<Arc<dyn AgentEngine>> {
    if mock {
        info!("using mock engine");
        return Ok(Arc::new(MockEngine::new()));
    }

    let engine = LlmEngine::from_env()
        .context("no engine configured; set an API key or pass --mock")?;
    info!(engine = engine.name(), "engine configured");
    Ok(Arc::new(engine))
}

/// Build the scenario team, run it, and aggregate the outputs.
pub(crate) async fn run_scenario(
    scenario: &Scenario,
    engine: Arc<dyn AgentEngine>,
    discipline: Option<ProcessDiscipline>,
    timeout: Option<Duration>,
) -> Result<RunResult> {
    let team = scenario
        .build_team()
        .with_context(|| format!("scenario setup failed: {}", scenario.label()))?;

    let discipline = discipline.unwrap_or_else(|| scenario.discipline());
    let config = RunnerConfig {
        task_timeout: timeout,
    };

    let mut runner = ProcessRunner::new(engine, config);
    let outputs = runner
        .run(&team, discipline)
        .await
        .with_context(|| format!("run failed: {}", scenario.label()))?;

    let result = aggregate(&team, &outputs, scenario.config())?;
    Ok(result)
}

fn print_summary(result: &RunResult) {
    println!("\n✅ Run complete: {}", result.config.label);
    println!("   Discipline: {}", result.discipline);
    println!("   Team size:  {}", result.team_size);
    println!("   Tasks:      {}", result.task_count);
    println!("   Duration:   {:.2}s", result.duration_seconds);

    for execution in &result.raw_outputs {
        let preview: String = execution.output.chars().take(80).collect();
        println!("   [{}] {}", execution.role, preview);
    }
}
