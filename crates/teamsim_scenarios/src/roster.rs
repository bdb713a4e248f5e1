//! Persona rosters: the cast a scenario builds its team from.
//!
//! Rosters are plain data (serde-friendly specs) so custom casts can
//! be loaded from YAML files alongside the built-in ones.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use teamsim_core::{PersonaFactory, PersonaVariant, Team, TraitVector};

use crate::error::ScenarioResult;

fn standard_variant() -> PersonaVariant {
    PersonaVariant::Standard
}

/// Declarative persona definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonaSpec {
    pub name: String,
    pub role: String,
    #[serde(default)]
    pub expertise: String,
    #[serde(default)]
    pub traits: TraitVector,
    #[serde(default = "standard_variant")]
    pub variant: PersonaVariant,
    /// Extra narrative context appended after the trait description.
    #[serde(default)]
    pub context: String,
}

impl PersonaSpec {
    pub fn new(
        name: &str,
        role: &str,
        expertise: &str,
        traits: TraitVector,
        variant: PersonaVariant,
    ) -> Self {
        Self {
            name: name.to_string(),
            role: role.to_string(),
            expertise: expertise.to_string(),
            traits,
            variant,
            context: String::new(),
        }
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = context.into();
        self
    }
}

/// Build a team from persona specs, one persona per spec in order.
pub fn build_team(specs: &[PersonaSpec]) -> ScenarioResult<Team> {
    build_team_with_context(specs, |spec| spec.context.clone())
}

/// Build a team, deriving per-spec extra narrative context.
/// The closure's result replaces any context carried on the spec.
pub fn build_team_with_context<F>(specs: &[PersonaSpec], context_for: F) -> ScenarioResult<Team>
where
    F: Fn(&PersonaSpec) -> String,
{
    let factory = PersonaFactory::new();
    let mut team = Team::new();

    for spec in specs {
        let persona = factory.build(
            &spec.name,
            &spec.role,
            &spec.expertise,
            spec.traits.clone(),
            spec.variant,
            &context_for(spec),
        )?;
        team.add_persona(persona)?;
    }

    debug!(team_size = team.len(), "built team from roster");
    Ok(team)
}

/// Load a roster from a YAML file (a sequence of persona specs).
pub fn load_roster(path: &Path) -> ScenarioResult<Vec<PersonaSpec>> {
    let content = fs::read_to_string(path)?;
    let specs: Vec<PersonaSpec> = serde_yaml::from_str(&content)?;
    Ok(specs)
}

/// The default five-person roster used by the basic scenarios.
pub fn default_roster() -> Vec<PersonaSpec> {
    vec![
        PersonaSpec::new(
            "Alex",
            "Team Leader",
            "project management",
            TraitVector::new()
                .with("openness", 0.7)
                .with("conscientiousness", 0.8)
                .with("extraversion", 0.7)
                .with("agreeableness", 0.6)
                .with("neuroticism", 0.3),
            PersonaVariant::Leader(teamsim_core::LeadershipStyle::Balanced),
        ),
        PersonaSpec::new(
            "Blair",
            "Technical Expert",
            "software development",
            TraitVector::new()
                .with("openness", 0.8)
                .with("conscientiousness", 0.7)
                .with("extraversion", 0.4)
                .with("agreeableness", 0.5)
                .with("neuroticism", 0.4),
            PersonaVariant::Standard,
        ),
        PersonaSpec::new(
            "Casey",
            "Creative Lead",
            "design thinking",
            TraitVector::new()
                .with("openness", 0.9)
                .with("conscientiousness", 0.5)
                .with("extraversion", 0.7)
                .with("agreeableness", 0.7)
                .with("neuroticism", 0.4),
            PersonaVariant::Standard,
        ),
        PersonaSpec::new(
            "Drew",
            "Analyst",
            "data analysis",
            TraitVector::new()
                .with("openness", 0.6)
                .with("conscientiousness", 0.9)
                .with("extraversion", 0.3)
                .with("agreeableness", 0.6)
                .with("neuroticism", 0.4),
            PersonaVariant::Standard,
        ),
        PersonaSpec::new(
            "Ellis",
            "Marketing Specialist",
            "market research",
            TraitVector::new()
                .with("openness", 0.7)
                .with("conscientiousness", 0.6)
                .with("extraversion", 0.8)
                .with("agreeableness", 0.7)
                .with("neuroticism", 0.3),
            PersonaVariant::Standard,
        ),
    ]
}

/// The dissenting member appended when a scenario includes one.
///
/// Low conformity is what marks the member as a habitual challenger;
/// the Dissenting variant overrides the narrative regardless.
pub fn dissenter_spec() -> PersonaSpec {
    PersonaSpec::new(
        "Finley",
        "Devil's Advocate",
        "critical thinking",
        TraitVector::new()
            .with("openness", 0.9)
            .with("conscientiousness", 0.6)
            .with("extraversion", 0.5)
            .with("agreeableness", 0.3)
            .with("neuroticism", 0.4)
            .with("conformity", 0.2),
        PersonaVariant::Dissenting,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_roster_builds_team() {
        let team = build_team(&default_roster()).unwrap();
        assert_eq!(team.len(), 5);
        assert!(team.has_role("Team Leader"));
        assert!(team.coordinator().unwrap().variant.is_leader());
    }

    #[test]
    fn test_dissenter_joins_team() {
        let mut specs = default_roster();
        specs.push(dissenter_spec());
        let team = build_team(&specs).unwrap();

        let finley = team.persona_by_role("Devil's Advocate").unwrap();
        assert!(finley.narrative.contains("devil's advocate"));
    }

    #[test]
    fn test_roster_yaml_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("roster.yaml");

        let specs = vec![dissenter_spec()];
        let yaml = serde_yaml::to_string(&specs).unwrap();
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(yaml.as_bytes()).unwrap();

        let loaded = load_roster(&path).unwrap();
        assert_eq!(loaded, specs);
    }

    #[test]
    fn test_roster_yaml_minimal_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("roster.yaml");
        std::fs::write(&path, "- name: Sam\n  role: Researcher\n").unwrap();

        let loaded = load_roster(&path).unwrap();
        assert_eq!(loaded[0].name, "Sam");
        assert!(loaded[0].expertise.is_empty());
        assert!(loaded[0].traits.is_empty());
    }
}
