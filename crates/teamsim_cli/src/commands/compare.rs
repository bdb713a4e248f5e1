//! Comparison commands - Run the same task across configurations.
//!
//! A failed configuration is flagged and skipped rather than aborting
//! the whole comparison; the table at the end covers whichever runs
//! completed.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Result;
use clap::Args;

use teamsim_core::LeadershipStyle;
use teamsim_runner::compare;
use teamsim_scenarios::{DiversityLevel, InclusionLevel, Scenario, TaskKind};

use crate::commands::run::{build_engine, run_scenario};
use crate::results::save_result;

/// Styles covered by the leadership comparison.
const COMPARED_STYLES: [LeadershipStyle; 4] = [
    LeadershipStyle::Authoritarian,
    LeadershipStyle::Democratic,
    LeadershipStyle::LaissezFaire,
    LeadershipStyle::Transformational,
];

/// Diversity/inclusion mixes covered by the diversity comparison.
const COMPARED_MIXES: [(DiversityLevel, InclusionLevel); 4] = [
    (DiversityLevel::High, InclusionLevel::High),
    (DiversityLevel::High, InclusionLevel::Low),
    (DiversityLevel::Low, InclusionLevel::High),
    (DiversityLevel::Low, InclusionLevel::Low),
];

#[derive(Args)]
pub struct CompareStylesArgs {
    /// Task set to compare on (creative or crisis)
    #[arg(long, default_value = "creative")]
    task: TaskKind,

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

#[derive(Args)]
pub struct CompareDiversityArgs {
    /// Task set to compare on (innovation or decision)
    #[arg(long, default_value = "innovation")]
    task: TaskKind,

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

pub async fn execute_styles(args: CompareStylesArgs) -> Result<()> {
    let scenarios: Vec<Scenario> = COMPARED_STYLES
        .iter()
        .map(|style| Scenario::Leadership {
            style: *style,
            task: args.task,
        })
        .collect();

    run_comparison(
        &scenarios,
        args.mock,
        args.timeout_secs.map(Duration::from_secs),
        &args.output_dir,
    )
    .await
}

pub async fn execute_diversity(args: CompareDiversityArgs) -> Result<()> {
    let scenarios: Vec<Scenario> = COMPARED_MIXES
        .iter()
        .map(|(diversity, inclusion)| Scenario::Diversity {
            diversity: *diversity,
            inclusion: *inclusion,
            task: args.task,
        })
        .collect();

    run_comparison(
        &scenarios,
        args.mock,
        args.timeout_secs.map(Duration::from_secs),
        &args.output_dir,
    )
    .await
}

async fn run_comparison(
    scenarios: &[Scenario],
    mock: bool,
    timeout: Option<Duration>,
    output_dir: &Path,
) -> Result<()> {
    let mut results = Vec::new();
    let mut failed = Vec::new();

    for scenario in scenarios {
        println!("\n🧪 Running scenario: {}", scenario.label());

        let engine = build_engine(mock)?;

        match run_scenario(scenario, engine, None, timeout).await {
            Ok(result) => {
                println!("   ✅ Completed in {:.2}s", result.duration_seconds);
                let path = save_result(output_dir, &result)?;
                println!("   💾 {}", path.display());
                results.push(result);
            }
            Err(e) => {
                println!("   ❌ Failed: {:#}", e);
                failed.push(scenario.label());
            }
        }
    }

    if !results.is_empty() {
        let table = compare(&results);
        println!("\n📊 Comparison:\n{}", table.render());
    }

    if !failed.is_empty() {
        println!("⚠️  Failed configurations:");
        for label in &failed {
            println!("   - {label}");
        }
    }

    Ok(())
}
