//! Personas and the factory that builds their narratives.
//!
//! A persona is an agent definition: identity, role, expertise, a trait
//! vector and a behavioral variant. The factory renders the narrative
//! (the backstory handed to the reasoning engine) from a variant-indexed
//! table of canned text blocks plus the trait description.
//!
//! The narrative is a pure function of the persona fields: building the
//! same persona twice yields byte-identical text.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{TeamError, TeamResult};
use crate::traits::{describe, TraitVector};

/// Leadership style applied to Leader-variant personas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeadershipStyle {
    Authoritarian,
    Democratic,
    LaissezFaire,
    Transformational,
    Balanced,
}

impl LeadershipStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            LeadershipStyle::Authoritarian => "authoritarian",
            LeadershipStyle::Democratic => "democratic",
            LeadershipStyle::LaissezFaire => "laissez_faire",
            LeadershipStyle::Transformational => "transformational",
            LeadershipStyle::Balanced => "balanced",
        }
    }

    /// All styles, in comparison order.
    pub fn all() -> Vec<LeadershipStyle> {
        vec![
            LeadershipStyle::Authoritarian,
            LeadershipStyle::Democratic,
            LeadershipStyle::LaissezFaire,
            LeadershipStyle::Transformational,
            LeadershipStyle::Balanced,
        ]
    }

    /// The canned behavioral block injected into a leader narrative.
    pub fn behaviors(&self) -> &'static str {
        match self {
            LeadershipStyle::Authoritarian => AUTHORITARIAN_BEHAVIORS,
            LeadershipStyle::Democratic => DEMOCRATIC_BEHAVIORS,
            LeadershipStyle::LaissezFaire => LAISSEZ_FAIRE_BEHAVIORS,
            LeadershipStyle::Transformational => TRANSFORMATIONAL_BEHAVIORS,
            LeadershipStyle::Balanced => BALANCED_BEHAVIORS,
        }
    }

    /// A one-line description of the style.
    pub fn description(&self) -> &'static str {
        match self {
            LeadershipStyle::Authoritarian => {
                "Directive leader who makes decisions with minimal input from team"
            }
            LeadershipStyle::Democratic => {
                "Collaborative leader who involves team in decision-making"
            }
            LeadershipStyle::LaissezFaire => {
                "Hands-off leader who delegates extensively and provides minimal direction"
            }
            LeadershipStyle::Transformational => {
                "Inspirational leader who motivates through vision and personal connection"
            }
            LeadershipStyle::Balanced => {
                "Pragmatic leader who adapts direction and delegation to the situation"
            }
        }
    }
}

impl fmt::Display for LeadershipStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for LeadershipStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "authoritarian" => Ok(LeadershipStyle::Authoritarian),
            "democratic" => Ok(LeadershipStyle::Democratic),
            "laissez_faire" | "laissez-faire" => Ok(LeadershipStyle::LaissezFaire),
            "transformational" => Ok(LeadershipStyle::Transformational),
            "balanced" => Ok(LeadershipStyle::Balanced),
            other => Err(format!("Unknown leadership style: {}", other)),
        }
    }
}

/// Behavioral category of a persona, selecting the narrative template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "style")]
pub enum PersonaVariant {
    /// Regular team member.
    Standard,
    /// Team leader with an explicit leadership style.
    Leader(LeadershipStyle),
    /// Member who challenges consensus regardless of their traits.
    Dissenting,
}

impl PersonaVariant {
    pub fn is_leader(&self) -> bool {
        matches!(self, PersonaVariant::Leader(_))
    }
}

/// An agent definition participating in a simulated team.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Persona {
    pub name: String,
    /// Unique within a team; tasks are bound by role, not name.
    pub role: String,
    pub expertise: String,
    pub traits: TraitVector,
    pub variant: PersonaVariant,
    /// Rendered narrative, cached at build time.
    pub narrative: String,
}

/// Builds personas from identity fields, traits and a variant.
///
/// Pure builder: holds no mutable state across calls.
#[derive(Debug, Default)]
pub struct PersonaFactory;

impl PersonaFactory {
    pub fn new() -> Self {
        Self
    }

    /// Build a persona, rendering and caching its narrative.
    ///
    /// `extra_context` is appended to the narrative when non-empty; it
    /// carries scenario-specific framing such as inclusion practices or
    /// leader-adaptation lines.
    ///
    /// Fails with [`TeamError::InvalidPersona`] on an empty name or role.
    pub fn build(
        &self,
        name: impl Into<String>,
        role: impl Into<String>,
        expertise: impl Into<String>,
        traits: TraitVector,
        variant: PersonaVariant,
        extra_context: &str,
    ) -> TeamResult<Persona> {
        let name = name.into();
        let role = role.into();
        let expertise = expertise.into();

        if name.trim().is_empty() {
            return Err(TeamError::InvalidPersona(
                "persona name must not be empty".to_string(),
            ));
        }
        if role.trim().is_empty() {
            return Err(TeamError::InvalidPersona(format!(
                "persona '{}' must have a non-empty role",
                name
            )));
        }

        let narrative = self.render_narrative(&name, &expertise, &traits, variant, extra_context);

        Ok(Persona {
            name,
            role,
            expertise,
            traits,
            variant,
            narrative,
        })
    }

    fn render_narrative(
        &self,
        name: &str,
        expertise: &str,
        traits: &TraitVector,
        variant: PersonaVariant,
        extra_context: &str,
    ) -> String {
        let traits_text = describe(traits);
        let mut segments: Vec<String> = Vec::new();

        match variant {
            PersonaVariant::Standard => {
                segments.push(format!(
                    "You are {}, a team member with expertise in {}.",
                    name, expertise
                ));
                segments.push(traits_text);
                segments.push(STANDARD_CLOSING.to_string());
            }
            PersonaVariant::Leader(style) => {
                segments.push(format!(
                    "You are {}, an experienced team leader with a {} leadership style.",
                    name, style
                ));
                segments.push(traits_text);
                segments.push(style.behaviors().to_string());
                segments.push(LEADER_CLOSING.to_string());
            }
            PersonaVariant::Dissenting => {
                // Dissent framing intentionally overrides normal trait
                // narration for agreeableness/conformity; the traits are
                // still recorded on the persona for metrics.
                segments.push(format!(
                    "You are {}, a team member with expertise in {}.",
                    name, expertise
                ));
                segments.push(traits_text);
                segments.push(DISSENTING_BLOCK.to_string());
            }
        }

        if !extra_context.trim().is_empty() {
            segments.push(extra_context.trim().to_string());
        }

        segments
            .into_iter()
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

// Variant-indexed narrative blocks.

const STANDARD_CLOSING: &str = "You work well with others but also have your own perspective \
and ideas. You want the team to succeed and share your knowledge.";

const LEADER_CLOSING: &str = "Your job is to guide the team to successful completion of the \
project while maintaining your leadership style throughout all interactions.";

const DISSENTING_BLOCK: &str = "You are known for challenging the status quo and questioning \
assumptions. You believe that the best ideas emerge from constructive conflict and diverse \
perspectives. You often play devil's advocate even when you might agree with the team.";

const AUTHORITARIAN_BEHAVIORS: &str = "You are a directive leader who believes in clear \
hierarchy and structure. You make decisions quickly and expect team members to follow your \
instructions. You provide detailed guidance and closely monitor progress. You believe that \
strong leadership means taking control and being decisive. You give feedback directly and \
focus on efficiency and results.";

const DEMOCRATIC_BEHAVIORS: &str = "You are a collaborative leader who values team input and \
consensus. You facilitate discussions and encourage everyone to contribute ideas. You make \
decisions based on team feedback and shared goals. You believe that the best solutions come \
from collective intelligence. You distribute responsibility and trust team members to \
contribute their expertise.";

const LAISSEZ_FAIRE_BEHAVIORS: &str = "You are a hands-off leader who believes in giving team \
members complete autonomy. You provide resources and support but minimal direct guidance or \
intervention. You trust team members to make their own decisions and solve problems. You \
believe micromanaging inhibits creativity and personal growth. You evaluate outcomes rather \
than controlling the process.";

const TRANSFORMATIONAL_BEHAVIORS: &str = "You are an inspirational leader who motivates \
through vision and personal connection. You articulate a compelling future state and connect \
work to deeper purpose. You mentor team members individually and help them develop \
professionally. You believe in leading by example and challenging status quo thinking. You \
focus on both achieving goals and transforming individuals and the team.";

const BALANCED_BEHAVIORS: &str = "You are a pragmatic leader who adapts your approach to the \
situation at hand. You give clear direction when time is short and open the floor when the \
problem benefits from discussion. You delegate based on each member's strengths and follow \
up without micromanaging. You keep the team focused on outcomes while staying open to \
better ideas.";

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_traits() -> TraitVector {
        TraitVector::new()
            .with("openness", 0.8)
            .with("conscientiousness", 0.5)
            .with("agreeableness", 0.2)
    }

    #[test]
    fn test_standard_narrative() {
        let factory = PersonaFactory::new();
        let persona = factory
            .build(
                "Blair",
                "Technical Expert",
                "software development",
                sample_traits(),
                PersonaVariant::Standard,
                "",
            )
            .unwrap();

        assert!(persona.narrative.starts_with("You are Blair"));
        assert!(persona.narrative.contains("software development"));
        assert!(persona.narrative.contains("open to new ideas"));
        assert!(persona.narrative.contains("work well with others"));
    }

    #[test]
    fn test_leader_narrative_includes_style_block() {
        let factory = PersonaFactory::new();
        let persona = factory
            .build(
                "Alex",
                "Team Leader",
                "",
                TraitVector::new().with("conscientiousness", 0.9),
                PersonaVariant::Leader(LeadershipStyle::Authoritarian),
                "",
            )
            .unwrap();

        assert!(persona.narrative.contains("authoritarian leadership style"));
        assert!(persona.narrative.contains("directive leader"));
        assert!(persona.narrative.contains("guide the team"));
    }

    #[test]
    fn test_dissenting_block_overrides_trait_framing() {
        let factory = PersonaFactory::new();
        // Highly agreeable traits: the dissent block must still appear.
        let persona = factory
            .build(
                "Finley",
                "Devil's Advocate",
                "critical thinking",
                TraitVector::new().with("agreeableness", 0.9),
                PersonaVariant::Dissenting,
                "",
            )
            .unwrap();

        assert!(persona.narrative.contains("devil's advocate"));
        assert!(persona.narrative.contains("challenging the status quo"));
        // Traits are still recorded for metrics.
        assert!(persona.traits.contains("agreeableness"));
    }

    #[test]
    fn test_extra_context_is_appended() {
        let factory = PersonaFactory::new();
        let persona = factory
            .build(
                "Sam",
                "Facilitator",
                "",
                TraitVector::new(),
                PersonaVariant::Standard,
                "This team has strong inclusion practices.",
            )
            .unwrap();

        assert!(persona
            .narrative
            .ends_with("This team has strong inclusion practices."));
    }

    #[test]
    fn test_narrative_is_deterministic() {
        let factory = PersonaFactory::new();
        let a = factory
            .build(
                "Drew",
                "Analyst",
                "data analysis",
                sample_traits(),
                PersonaVariant::Standard,
                "",
            )
            .unwrap();
        let b = factory
            .build(
                "Drew",
                "Analyst",
                "data analysis",
                sample_traits(),
                PersonaVariant::Standard,
                "",
            )
            .unwrap();

        assert_eq!(a.narrative, b.narrative);
    }

    #[test]
    fn test_empty_identity_rejected() {
        let factory = PersonaFactory::new();
        assert!(matches!(
            factory.build("", "Analyst", "", TraitVector::new(), PersonaVariant::Standard, ""),
            Err(TeamError::InvalidPersona(_))
        ));
        assert!(matches!(
            factory.build("Drew", " ", "", TraitVector::new(), PersonaVariant::Standard, ""),
            Err(TeamError::InvalidPersona(_))
        ));
    }

    #[test]
    fn test_leadership_style_parsing() {
        assert_eq!(
            "laissez-faire".parse::<LeadershipStyle>().unwrap(),
            LeadershipStyle::LaissezFaire
        );
        assert!("heroic".parse::<LeadershipStyle>().is_err());
    }
}
