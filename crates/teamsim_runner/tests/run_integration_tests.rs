//! End-to-end runner tests: build a team, run both disciplines through
//! the mock engine, aggregate and compare the results.

use std::sync::Arc;

use teamsim_core::{LeadershipStyle, PersonaFactory, PersonaVariant, Team, TraitVector};
use teamsim_engine::MockEngine;
use teamsim_runner::{
    aggregate, compare, ProcessDiscipline, ProcessRunner, RunnerConfig, ScenarioConfig,
};

fn build_team(with_leader: bool) -> Team {
    let factory = PersonaFactory::new();
    let mut team = Team::new();

    if with_leader {
        team.add_persona(
            factory
                .build(
                    "Alex",
                    "Team Leader",
                    "project management",
                    TraitVector::new().with("conscientiousness", 0.8),
                    PersonaVariant::Leader(LeadershipStyle::Democratic),
                    "",
                )
                .unwrap(),
        )
        .unwrap();
    }

    team.add_persona(
        factory
            .build(
                "Blair",
                "Technical Expert",
                "software development",
                TraitVector::new().with("openness", 0.8),
                PersonaVariant::Standard,
                "",
            )
            .unwrap(),
    )
    .unwrap();
    team.add_persona(
        factory
            .build(
                "Drew",
                "Analyst",
                "data analysis",
                TraitVector::new().with("conscientiousness", 0.9),
                PersonaVariant::Standard,
                "",
            )
            .unwrap(),
    )
    .unwrap();

    team
}

#[tokio::test]
async fn sequential_run_aggregates_into_a_result() {
    let mut team = build_team(true);
    team.bind_task("coordinate the plan", "Team Leader", "a plan", "").unwrap();
    team.bind_task("assess feasibility", "Technical Expert", "a memo", "").unwrap();
    team.bind_task("quantify impact", "Analyst", "an analysis", "").unwrap();

    let engine = Arc::new(MockEngine::new());
    let mut runner = ProcessRunner::new(engine, RunnerConfig::default());
    let outputs = runner.run(&team, ProcessDiscipline::Sequential).await.unwrap();

    let config = ScenarioConfig::new("integration").with_param("discipline", "sequential");
    let result = aggregate(&team, &outputs, config).unwrap();

    assert_eq!(result.team_size, 3);
    assert_eq!(result.task_count, 3);
    assert_eq!(result.raw_outputs.len(), 3);
    assert!(result.duration_seconds >= 0.0);
    assert_eq!(result.config.label, "integration");
}

#[tokio::test]
async fn hierarchical_run_synthesizes_at_the_leader() {
    let mut team = build_team(true);
    team.bind_task("synthesize findings", "Team Leader", "a plan", "").unwrap();
    team.bind_task("assess feasibility", "Technical Expert", "a memo", "").unwrap();
    team.bind_task("quantify impact", "Analyst", "an analysis", "").unwrap();

    let engine = MockEngine::new()
        .add_response("feasibility memo")
        .add_response("impact analysis")
        .add_response("final plan");
    let mut runner = ProcessRunner::new(Arc::new(engine.clone()), RunnerConfig::default());
    let outputs = runner.run(&team, ProcessDiscipline::Hierarchical).await.unwrap();

    let roles: Vec<_> = outputs.executions.iter().map(|e| e.role.as_str()).collect();
    assert_eq!(roles, vec!["Technical Expert", "Analyst", "Team Leader"]);

    let leader_prompt = &engine.captured_prompts()[2];
    assert!(leader_prompt.context.contains("feasibility memo"));
    assert!(leader_prompt.context.contains("impact analysis"));
}

#[tokio::test]
async fn comparison_preserves_run_order() {
    let mut results = Vec::new();

    for label in ["slow", "fast"] {
        let mut team = build_team(false);
        team.bind_task("do the work", "Analyst", "output", "").unwrap();

        let mut runner = ProcessRunner::new(Arc::new(MockEngine::new()), RunnerConfig::default());
        let outputs = runner.run(&team, ProcessDiscipline::Sequential).await.unwrap();
        results.push(aggregate(&team, &outputs, ScenarioConfig::new(label)).unwrap());
    }

    let table = compare(&results);
    let labels: Vec<_> = table.rows().iter().map(|r| r.label.as_str()).collect();
    assert_eq!(labels, vec!["slow", "fast"]);
}

#[tokio::test]
async fn run_result_serializes_to_json() {
    let mut team = build_team(false);
    team.bind_task("do the work", "Analyst", "output", "").unwrap();

    let mut runner = ProcessRunner::new(Arc::new(MockEngine::new()), RunnerConfig::default());
    let outputs = runner.run(&team, ProcessDiscipline::Sequential).await.unwrap();
    let result = aggregate(&team, &outputs, ScenarioConfig::new("serde")).unwrap();

    let json = serde_json::to_string_pretty(&result).unwrap();
    assert!(json.contains("\"label\": \"serde\""));

    let restored: teamsim_runner::RunResult = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, result);
}
