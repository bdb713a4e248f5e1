//! Built-in experiment scenarios for teamsim.
//!
//! A scenario pairs a persona roster with a canned task set and the
//! process discipline it should run under. Three families ship with
//! the crate: the basic roster (optionally joined by a dissenting
//! member), leadership-style teams, and diversity/inclusion teams.
//! Custom rosters can be loaded from YAML.
//!
//! ```
//! use teamsim_scenarios::{Scenario, TaskKind};
//! use teamsim_core::LeadershipStyle;
//!
//! let scenario = Scenario::Leadership {
//!     style: LeadershipStyle::Democratic,
//!     task: TaskKind::Creative,
//! };
//! let team = scenario.build_team().unwrap();
//! assert_eq!(team.len(), 6);
//! ```

pub mod diversity;
pub mod error;
pub mod leadership;
pub mod roster;
pub mod scenario;
pub mod tasks;

pub use diversity::{DiversityLevel, DiversityProfile, InclusionLevel};
pub use error::{ScenarioError, ScenarioResult};
pub use roster::{build_team, build_team_with_context, load_roster, PersonaSpec};
pub use scenario::{Scenario, TaskKind};
pub use tasks::{bind_tasks, TaskSpec};
