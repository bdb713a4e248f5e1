//! Cross-run comparison.
//!
//! The comparator is a projection, not a judgment: one row per result,
//! rows in input order, no implicit sorting. Callers decide what
//! "better" means.

use serde::{Deserialize, Serialize};

use crate::aggregate::RunResult;
use crate::runner::ProcessDiscipline;

/// One row of a comparison table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonRow {
    pub label: String,
    pub duration_seconds: f64,
    pub team_size: usize,
    pub task_count: usize,
    pub discipline: ProcessDiscipline,
}

/// Comparison across multiple run results.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ComparisonTable {
    rows: Vec<ComparisonRow>,
}

impl ComparisonTable {
    pub fn rows(&self) -> &[ComparisonRow] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Render as an aligned text table.
    pub fn render(&self) -> String {
        let label_width = self
            .rows
            .iter()
            .map(|r| r.label.len())
            .chain(std::iter::once("scenario".len()))
            .max()
            .unwrap_or(0);

        let mut out = format!(
            "{:<width$}  {:>10}  {:>5}  {:>6}  {}\n",
            "scenario",
            "duration",
            "team",
            "tasks",
            "discipline",
            width = label_width
        );
        for row in &self.rows {
            out.push_str(&format!(
                "{:<width$}  {:>9.2}s  {:>5}  {:>6}  {}\n",
                row.label,
                row.duration_seconds,
                row.team_size,
                row.task_count,
                row.discipline,
                width = label_width
            ));
        }
        out
    }
}

/// Project run results into a comparison table, preserving input order.
pub fn compare(results: &[RunResult]) -> ComparisonTable {
    ComparisonTable {
        rows: results
            .iter()
            .map(|r| ComparisonRow {
                label: r.config.label.clone(),
                duration_seconds: r.duration_seconds,
                team_size: r.team_size,
                task_count: r.task_count,
                discipline: r.discipline,
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::ScenarioConfig;

    fn result(label: &str, duration: f64) -> RunResult {
        RunResult {
            config: ScenarioConfig::new(label),
            discipline: ProcessDiscipline::Sequential,
            team_snapshot: Vec::new(),
            task_summaries: Vec::new(),
            raw_outputs: Vec::new(),
            duration_seconds: duration,
            team_size: 4,
            task_count: 3,
            timestamp: chrono::Utc::now(),
        }
    }

    #[test]
    fn test_rows_follow_input_order() {
        // Durations deliberately unsorted; the table must not reorder.
        let results = vec![result("r1", 9.0), result("r2", 1.0), result("r3", 5.0)];
        let table = compare(&results);

        let labels: Vec<_> = table.rows().iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, vec!["r1", "r2", "r3"]);
    }

    #[test]
    fn test_render_contains_all_rows() {
        let table = compare(&[result("authoritarian", 12.5), result("democratic", 8.25)]);
        let text = table.render();

        assert!(text.contains("scenario"));
        assert!(text.contains("authoritarian"));
        assert!(text.contains("democratic"));
        assert!(text.contains("12.50s"));
    }

    #[test]
    fn test_empty_comparison() {
        let table = compare(&[]);
        assert!(table.is_empty());
        assert!(table.render().contains("scenario"));
    }
}
