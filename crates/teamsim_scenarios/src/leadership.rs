//! Leadership-style scenario tables.
//!
//! Each style carries a trait preset for the leader persona; members
//! get an adaptation line describing how their own traits sit with the
//! leader's style.

use teamsim_core::{LeadershipStyle, PersonaVariant, TraitVector};

use crate::roster::PersonaSpec;

/// Trait preset applied to the leader persona for a given style.
pub fn style_traits(style: LeadershipStyle) -> TraitVector {
    match style {
        LeadershipStyle::Authoritarian => TraitVector::new()
            .with("openness", 0.3)
            .with("conscientiousness", 0.9)
            .with("extraversion", 0.7)
            .with("agreeableness", 0.3)
            .with("neuroticism", 0.4),
        LeadershipStyle::Democratic => TraitVector::new()
            .with("openness", 0.8)
            .with("conscientiousness", 0.7)
            .with("extraversion", 0.6)
            .with("agreeableness", 0.8)
            .with("neuroticism", 0.3),
        LeadershipStyle::LaissezFaire => TraitVector::new()
            .with("openness", 0.7)
            .with("conscientiousness", 0.4)
            .with("extraversion", 0.5)
            .with("agreeableness", 0.6)
            .with("neuroticism", 0.2),
        LeadershipStyle::Transformational => TraitVector::new()
            .with("openness", 0.9)
            .with("conscientiousness", 0.6)
            .with("extraversion", 0.8)
            .with("agreeableness", 0.7)
            .with("neuroticism", 0.3),
        LeadershipStyle::Balanced => TraitVector::new()
            .with("openness", 0.6)
            .with("conscientiousness", 0.7)
            .with("extraversion", 0.6)
            .with("agreeableness", 0.6)
            .with("neuroticism", 0.3),
    }
}

/// The leader spec for a leadership scenario.
pub fn leader_spec(style: LeadershipStyle) -> PersonaSpec {
    PersonaSpec::new(
        "Alex",
        "Team Leader",
        "team leadership",
        style_traits(style),
        PersonaVariant::Leader(style),
    )
}

/// Member roster used by the leadership scenarios.
pub fn member_roster() -> Vec<PersonaSpec> {
    vec![
        PersonaSpec::new(
            "Taylor",
            "Technical Expert",
            "software development",
            TraitVector::new()
                .with("openness", 0.6)
                .with("conscientiousness", 0.8)
                .with("extraversion", 0.4)
                .with("agreeableness", 0.5)
                .with("neuroticism", 0.3),
            PersonaVariant::Standard,
        ),
        PersonaSpec::new(
            "Jordan",
            "Creative Designer",
            "user experience",
            TraitVector::new()
                .with("openness", 0.9)
                .with("conscientiousness", 0.5)
                .with("extraversion", 0.7)
                .with("agreeableness", 0.7)
                .with("neuroticism", 0.4),
            PersonaVariant::Standard,
        ),
        PersonaSpec::new(
            "Riley",
            "Project Coordinator",
            "project management",
            TraitVector::new()
                .with("openness", 0.5)
                .with("conscientiousness", 0.9)
                .with("extraversion", 0.6)
                .with("agreeableness", 0.7)
                .with("neuroticism", 0.3),
            PersonaVariant::Standard,
        ),
        PersonaSpec::new(
            "Casey",
            "Market Researcher",
            "market analysis",
            TraitVector::new()
                .with("openness", 0.7)
                .with("conscientiousness", 0.7)
                .with("extraversion", 0.5)
                .with("agreeableness", 0.6)
                .with("neuroticism", 0.4),
            PersonaVariant::Standard,
        ),
        PersonaSpec::new(
            "Morgan",
            "Finance Specialist",
            "financial planning",
            TraitVector::new()
                .with("openness", 0.4)
                .with("conscientiousness", 0.8)
                .with("extraversion", 0.3)
                .with("agreeableness", 0.5)
                .with("neuroticism", 0.4),
            PersonaVariant::Standard,
        ),
    ]
}

/// How a member with the given traits adapts to the leader's style.
///
/// Appended to member narratives as extra context.
pub fn adaptation_text(traits: &TraitVector, style: LeadershipStyle) -> &'static str {
    let openness = traits.intensity("openness");
    let agreeableness = traits.intensity("agreeableness");
    let conscientiousness = traits.intensity("conscientiousness");

    match style {
        LeadershipStyle::Authoritarian => {
            if agreeableness < 0.4 {
                return "You sometimes struggle with directive leadership and may feel your \
                        autonomy is limited.";
            }
            if agreeableness > 0.7 {
                return "You tend to follow directions well and appreciate clear guidance \
                        from leadership.";
            }
        }
        LeadershipStyle::LaissezFaire => {
            if conscientiousness > 0.8 {
                return "You sometimes prefer more structure than a hands-off leadership \
                        approach provides.";
            }
            if openness > 0.7 {
                return "You thrive with the autonomy provided by a hands-off leadership \
                        approach.";
            }
        }
        LeadershipStyle::Democratic => {
            if openness < 0.4 {
                return "You sometimes find collaborative decision-making processes \
                        time-consuming.";
            }
            if openness > 0.7 {
                return "You value being included in decisions and having your input \
                        considered.";
            }
        }
        LeadershipStyle::Transformational => {
            if openness < 0.4 {
                return "You sometimes find visionary leadership too abstract and prefer \
                        concrete direction.";
            }
            if openness > 0.7 {
                return "You are inspired by leaders who connect work to a larger purpose \
                        and vision.";
            }
        }
        LeadershipStyle::Balanced => {}
    }

    "You adapt your work style to different leadership approaches as needed."
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_presets_cross_thresholds() {
        // Authoritarian: only conscientiousness (0.9) crosses a threshold;
        // the 0.3 and 0.7 values sit exactly on the open boundaries.
        let text = teamsim_core::describe(&style_traits(LeadershipStyle::Authoritarian));
        assert_eq!(text, "You are highly organized and detail-oriented.");

        // Transformational crosses high on openness and extraversion.
        let text = teamsim_core::describe(&style_traits(LeadershipStyle::Transformational));
        assert!(text.contains("very open to new ideas"));
        assert!(text.contains("outgoing and energized"));
    }

    #[test]
    fn test_adaptation_text_reacts_to_traits() {
        let disagreeable = TraitVector::new().with("agreeableness", 0.2);
        assert!(adaptation_text(&disagreeable, LeadershipStyle::Authoritarian)
            .contains("struggle with directive leadership"));

        let neutral = TraitVector::new();
        assert_eq!(
            adaptation_text(&neutral, LeadershipStyle::Authoritarian),
            "You adapt your work style to different leadership approaches as needed."
        );
    }

    #[test]
    fn test_member_roster_roles_are_unique() {
        let roster = member_roster();
        let mut roles: Vec<_> = roster.iter().map(|s| s.role.clone()).collect();
        roles.sort();
        roles.dedup();
        assert_eq!(roles.len(), roster.len());
    }
}
