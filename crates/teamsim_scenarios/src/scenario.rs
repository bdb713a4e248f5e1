//! Scenario definitions: which team meets which task set, and how.
//!
//! A scenario is a declarative experiment configuration. `build_team`
//! produces a ready-to-run team with tasks bound; `config` produces
//! the parameter record that ends up in the run result.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::info;

use teamsim_core::{LeadershipStyle, Team};
use teamsim_runner::{ProcessDiscipline, ScenarioConfig};

use crate::diversity::{member_profiles, team_specs, DiversityLevel, InclusionLevel};
use crate::error::{ScenarioError, ScenarioResult};
use crate::leadership::{adaptation_text, leader_spec, member_roster};
use crate::roster::{build_team_with_context, default_roster, dissenter_spec};
use crate::tasks::{
    bind_tasks, creative_tasks, crisis_tasks, decision_tasks, innovation_tasks,
    problem_solving_tasks,
};

/// The canned task set a scenario runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskKind {
    ProblemSolving,
    Creative,
    Crisis,
    Innovation,
    Decision,
}

impl TaskKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskKind::ProblemSolving => "problem_solving",
            TaskKind::Creative => "creative",
            TaskKind::Crisis => "crisis",
            TaskKind::Innovation => "innovation",
            TaskKind::Decision => "decision",
        }
    }
}

impl fmt::Display for TaskKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "problem_solving" | "problem-solving" => Ok(TaskKind::ProblemSolving),
            "creative" => Ok(TaskKind::Creative),
            "crisis" => Ok(TaskKind::Crisis),
            "innovation" => Ok(TaskKind::Innovation),
            "decision" => Ok(TaskKind::Decision),
            other => Err(format!("unknown task kind: {other}")),
        }
    }
}

/// An experiment configuration ready to be built and run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "scenario")]
pub enum Scenario {
    /// Default roster, optionally joined by the dissenting member.
    Basic {
        include_dissenter: bool,
        task: TaskKind,
    },
    /// Styled leader with the fixed five-member roster.
    Leadership {
        style: LeadershipStyle,
        task: TaskKind,
    },
    /// Facilitator-led team varying diversity and inclusion.
    Diversity {
        diversity: DiversityLevel,
        inclusion: InclusionLevel,
        task: TaskKind,
    },
}

impl Scenario {
    fn kind_name(&self) -> &'static str {
        match self {
            Scenario::Basic { .. } => "basic",
            Scenario::Leadership { .. } => "leadership",
            Scenario::Diversity { .. } => "diversity",
        }
    }

    /// Label used for result files and comparison rows.
    pub fn label(&self) -> String {
        match self {
            Scenario::Basic { include_dissenter, task } => {
                if *include_dissenter {
                    format!("basic_{task}_with_dissenter")
                } else {
                    format!("basic_{task}")
                }
            }
            Scenario::Leadership { style, task } => format!("leadership_{style}_{task}"),
            Scenario::Diversity { diversity, inclusion, task } => {
                format!("{task}_{diversity}_diversity_{inclusion}_inclusion")
            }
        }
    }

    /// Parameter record carried into the run result.
    pub fn config(&self) -> ScenarioConfig {
        let base = ScenarioConfig::new(self.label());
        match self {
            Scenario::Basic { include_dissenter, task } => base
                .with_param("task", task.as_str())
                .with_param("include_dissenter", include_dissenter.to_string()),
            Scenario::Leadership { style, task } => base
                .with_param("task", task.as_str())
                .with_param("leadership_style", style.as_str()),
            Scenario::Diversity { diversity, inclusion, task } => base
                .with_param("task", task.as_str())
                .with_param("diversity_level", diversity.as_str())
                .with_param("inclusion_level", inclusion.as_str()),
        }
    }

    /// Process discipline the scenario runs under.
    ///
    /// Diversity comparisons run sequentially so every member's output
    /// is produced independently of the facilitator; the other
    /// scenarios synthesize at the leader.
    pub fn discipline(&self) -> ProcessDiscipline {
        match self {
            Scenario::Diversity { .. } => ProcessDiscipline::Sequential,
            _ => ProcessDiscipline::Hierarchical,
        }
    }

    /// Build the scenario's team with its task set bound.
    pub fn build_team(&self) -> ScenarioResult<Team> {
        let team = match self {
            Scenario::Basic { include_dissenter, task } => {
                self.check_task(*task, &[TaskKind::ProblemSolving])?;
                let mut specs = default_roster();
                if *include_dissenter {
                    specs.push(dissenter_spec());
                }
                let mut team = build_team_with_context(&specs, |spec| spec.context.clone())?;
                bind_tasks(&mut team, &problem_solving_tasks())?;
                team
            }
            Scenario::Leadership { style, task } => {
                self.check_task(*task, &[TaskKind::Creative, TaskKind::Crisis])?;
                let mut specs = vec![leader_spec(*style)];
                specs.extend(member_roster());
                let team_style = *style;
                let mut team = build_team_with_context(&specs, move |spec| {
                    if spec.variant.is_leader() {
                        String::new()
                    } else {
                        adaptation_text(&spec.traits, team_style).to_string()
                    }
                })?;
                let tasks = match task {
                    TaskKind::Creative => creative_tasks(*style),
                    _ => crisis_tasks(*style),
                };
                bind_tasks(&mut team, &tasks)?;
                team
            }
            Scenario::Diversity { diversity, inclusion, task } => {
                self.check_task(*task, &[TaskKind::Innovation, TaskKind::Decision])?;
                let specs = team_specs(*diversity, *inclusion);
                let mut team = build_team_with_context(&specs, |spec| spec.context.clone())?;
                let profiles = member_profiles(*diversity);
                let tasks = match task {
                    TaskKind::Innovation => innovation_tasks(*inclusion, &profiles),
                    _ => decision_tasks(*inclusion, &profiles),
                };
                bind_tasks(&mut team, &tasks)?;
                team
            }
        };

        info!(
            scenario = self.kind_name(),
            label = %self.label(),
            team_size = team.len(),
            task_count = team.tasks().len(),
            "scenario team ready"
        );

        Ok(team)
    }

    fn check_task(&self, task: TaskKind, supported: &[TaskKind]) -> ScenarioResult<()> {
        if supported.contains(&task) {
            Ok(())
        } else {
            Err(ScenarioError::UnsupportedTask {
                scenario: self.kind_name().to_string(),
                task: task.as_str().to_string(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_scenario_builds_and_binds() {
        let scenario = Scenario::Basic {
            include_dissenter: true,
            task: TaskKind::ProblemSolving,
        };
        let team = scenario.build_team().unwrap();
        assert_eq!(team.len(), 6);
        assert_eq!(team.tasks().len(), 6);
        assert_eq!(scenario.discipline(), ProcessDiscipline::Hierarchical);
    }

    #[test]
    fn test_leadership_scenario_adapts_members() {
        let scenario = Scenario::Leadership {
            style: LeadershipStyle::Authoritarian,
            task: TaskKind::Crisis,
        };
        let team = scenario.build_team().unwrap();

        // Morgan's agreeableness (0.5) is mid-range, so the generic line.
        let morgan = team.persona_by_role("Finance Specialist").unwrap();
        assert!(morgan.narrative.contains("adapt your work style"));

        let leader = team.coordinator().unwrap();
        assert_eq!(leader.name, "Alex");
        assert!(leader.variant.is_leader());
    }

    #[test]
    fn test_diversity_scenario_runs_sequentially() {
        let scenario = Scenario::Diversity {
            diversity: DiversityLevel::High,
            inclusion: InclusionLevel::Low,
            task: TaskKind::Innovation,
        };
        assert_eq!(scenario.discipline(), ProcessDiscipline::Sequential);

        let team = scenario.build_team().unwrap();
        assert_eq!(team.len(), 5);
        assert_eq!(team.tasks().len(), 5);
    }

    #[test]
    fn test_unsupported_task_is_rejected() {
        let scenario = Scenario::Basic {
            include_dissenter: false,
            task: TaskKind::Crisis,
        };
        let err = scenario.build_team().unwrap_err();
        assert!(matches!(err, ScenarioError::UnsupportedTask { .. }));
    }

    #[test]
    fn test_labels_and_configs() {
        let scenario = Scenario::Diversity {
            diversity: DiversityLevel::High,
            inclusion: InclusionLevel::Low,
            task: TaskKind::Decision,
        };
        assert_eq!(scenario.label(), "decision_high_diversity_low_inclusion");

        let config = scenario.config();
        assert_eq!(config.parameters["diversity_level"], "high");
        assert_eq!(config.parameters["inclusion_level"], "low");
    }

    #[test]
    fn test_task_kind_parses() {
        assert_eq!("problem-solving".parse::<TaskKind>().unwrap(), TaskKind::ProblemSolving);
        assert!("debate".parse::<TaskKind>().is_err());
    }
}
