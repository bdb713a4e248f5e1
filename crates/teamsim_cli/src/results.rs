//! Result persistence: one JSON file per completed run.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use teamsim_runner::RunResult;

/// Write the result to `{dir}/{label}_{YYYYmmdd_HHMMSS}.json`.
///
/// The directory is created if missing. The timestamp is the run's
/// finish time, so re-saving the same result overwrites its own file.
pub fn save_result(directory: &Path, result: &RunResult) -> Result<PathBuf> {
    fs::create_dir_all(directory)
        .with_context(|| format!("creating results directory {}", directory.display()))?;

    let stamp = result.timestamp.format("%Y%m%d_%H%M%S");
    let filename = format!("{}_{stamp}.json", result.config.label);
    let path = directory.join(filename);

    let json = serde_json::to_string_pretty(result)?;
    fs::write(&path, json)
        .with_context(|| format!("writing results file {}", path.display()))?;

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use teamsim_engine::MockEngine;
    use teamsim_runner::{aggregate, ProcessDiscipline, ProcessRunner, RunnerConfig};
    use teamsim_scenarios::{Scenario, TaskKind};

    #[tokio::test]
    async fn test_save_result_names_file_after_label() {
        let scenario = Scenario::Basic {
            include_dissenter: false,
            task: TaskKind::ProblemSolving,
        };
        let team = scenario.build_team().unwrap();

        let mut runner =
            ProcessRunner::new(Arc::new(MockEngine::new()), RunnerConfig::default());
        let outputs = runner.run(&team, ProcessDiscipline::Sequential).await.unwrap();
        let result = aggregate(&team, &outputs, scenario.config()).unwrap();

        let dir = tempfile::tempdir().unwrap();
        let path = save_result(dir.path(), &result).unwrap();

        let name = path.file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with("basic_problem_solving_"));
        assert!(name.ends_with(".json"));

        let restored: RunResult =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(restored.config.label, "basic_problem_solving");
    }
}
