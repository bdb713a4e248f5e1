//! Personality trait vectors and their textual description.
//!
//! A [`TraitVector`] maps trait names to intensities in `[0, 1]`. The
//! descriptor turns a vector into behavioral sentences for a persona
//! narrative: intensities above 0.7 emit the trait's "high" sentence,
//! below 0.3 its "low" sentence, and the middle band stays silent.
//! Both thresholds are open intervals: exactly 0.7 or 0.3 emits nothing.
//!
//! Output order follows [`CANONICAL_TRAITS`], not the insertion order of
//! the map, so the description is deterministic for a given vector.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Intensity a trait takes when it is absent from the vector.
///
/// Neutral values never cross a threshold, so absent traits generate
/// no sentence.
pub const NEUTRAL_INTENSITY: f64 = 0.5;

/// Canonical trait order used for description output.
pub const CANONICAL_TRAITS: [&str; 6] = [
    "openness",
    "conscientiousness",
    "extraversion",
    "agreeableness",
    "neuroticism",
    "conformity",
];

/// High/low sentence pair for each canonical trait, in canonical order.
const TRAIT_SENTENCES: [(&str, &str, &str); 6] = [
    (
        "openness",
        "You are very open to new ideas and experiences.",
        "You prefer traditional, familiar approaches.",
    ),
    (
        "conscientiousness",
        "You are highly organized and detail-oriented.",
        "You tend to be flexible and spontaneous rather than organized.",
    ),
    (
        "extraversion",
        "You are outgoing and energized by social interaction.",
        "You are more reserved and prefer thinking before speaking.",
    ),
    (
        "agreeableness",
        "You prioritize team harmony and are cooperative.",
        "You're not afraid of disagreement and can be competitive.",
    ),
    (
        "neuroticism",
        "You tend to worry about things going wrong.",
        "You are emotionally stable and rarely get stressed.",
    ),
    (
        "conformity",
        "You tend to go along with group decisions.",
        "You often question group consensus and challenge the team's thinking.",
    ),
];

/// A mapping from trait name to intensity in `[0, 1]`.
///
/// No trait is required; unknown trait names are carried along (they may
/// matter to metrics) but never described.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TraitVector(HashMap<String, f64>);

impl TraitVector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a trait intensity, builder style.
    pub fn with(mut self, name: impl Into<String>, intensity: f64) -> Self {
        self.0.insert(name.into(), intensity);
        self
    }

    /// Get a trait intensity, falling back to [`NEUTRAL_INTENSITY`].
    pub fn intensity(&self, name: &str) -> f64 {
        self.0.get(name).copied().unwrap_or(NEUTRAL_INTENSITY)
    }

    /// Whether the trait is explicitly present in the vector.
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, f64)> for TraitVector {
    fn from_iter<I: IntoIterator<Item = (S, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

/// Convert a trait vector into descriptive sentences.
///
/// Returns the empty string when no present trait crosses a threshold.
pub fn describe(traits: &TraitVector) -> String {
    let mut sentences = Vec::new();

    for (name, high, low) in TRAIT_SENTENCES {
        if !traits.contains(name) {
            continue;
        }
        let intensity = traits.intensity(name);
        if intensity > 0.7 {
            sentences.push(high);
        } else if intensity < 0.3 {
            sentences.push(low);
        }
    }

    sentences.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_high_and_low() {
        let traits = TraitVector::new()
            .with("openness", 0.9)
            .with("extraversion", 0.1);

        let text = describe(&traits);
        assert!(text.contains("very open to new ideas"));
        assert!(text.contains("more reserved"));
    }

    #[test]
    fn test_describe_boundaries_are_open() {
        assert_eq!(describe(&TraitVector::new().with("openness", 0.7)), "");
        assert_eq!(describe(&TraitVector::new().with("openness", 0.3)), "");
        assert!(!describe(&TraitVector::new().with("openness", 0.71)).is_empty());
        assert!(!describe(&TraitVector::new().with("openness", 0.29)).is_empty());
    }

    #[test]
    fn test_describe_canonical_order() {
        // Inserted out of canonical order; output must still lead with openness.
        let traits = TraitVector::new()
            .with("conformity", 0.2)
            .with("openness", 0.9);

        let text = describe(&traits);
        let openness_pos = text.find("open to new ideas").unwrap();
        let conformity_pos = text.find("question group consensus").unwrap();
        assert!(openness_pos < conformity_pos);
    }

    #[test]
    fn test_describe_unknown_trait_ignored() {
        let traits = TraitVector::new().with("curiosity", 0.95);
        assert_eq!(describe(&traits), "");
    }

    #[test]
    fn test_describe_is_deterministic() {
        let traits = TraitVector::new()
            .with("agreeableness", 0.8)
            .with("neuroticism", 0.1);
        assert_eq!(describe(&traits), describe(&traits));
    }

    #[test]
    fn test_absent_trait_is_neutral() {
        let traits = TraitVector::new();
        assert_eq!(traits.intensity("openness"), NEUTRAL_INTENSITY);
        assert_eq!(describe(&traits), "");
    }
}
