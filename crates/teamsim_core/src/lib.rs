//! # teamsim_core
//!
//! Team, persona and task model for teamsim simulations.
//!
//! This crate provides the configuration-time half of a simulation:
//! trait vectors and their deterministic textual description, persona
//! construction from variant-indexed narrative templates, and teams
//! with validated role→task binding.
//!
//! # Example
//!
//! ```rust
//! use teamsim_core::{
//!     LeadershipStyle, PersonaFactory, PersonaVariant, Team, TraitVector,
//! };
//!
//! let factory = PersonaFactory::new();
//! let mut team = Team::new();
//!
//! let leader = factory.build(
//!     "Alex",
//!     "Team Leader",
//!     "project management",
//!     TraitVector::new().with("conscientiousness", 0.8),
//!     PersonaVariant::Leader(LeadershipStyle::Democratic),
//!     "",
//! ).unwrap();
//! team.add_persona(leader).unwrap();
//!
//! team.bind_task(
//!     "Coordinate the team to draft a project plan",
//!     "Team Leader",
//!     "A project plan",
//!     "",
//! ).unwrap();
//! ```

pub mod error;
pub mod persona;
pub mod task;
pub mod team;
pub mod traits;

// Re-export main types for convenience
pub use error::{TeamError, TeamResult};
pub use persona::{LeadershipStyle, Persona, PersonaFactory, PersonaVariant};
pub use task::Task;
pub use team::Team;
pub use traits::{describe, TraitVector, CANONICAL_TRAITS, NEUTRAL_INTENSITY};
