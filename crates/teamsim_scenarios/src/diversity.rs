//! Diversity and inclusion scenario tables.
//!
//! Teams here vary along two axes: cognitive diversity of the member
//! profiles and the inclusion practices the facilitator works by. The
//! rosters are fixed so the same configuration always produces the
//! same team.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use teamsim_core::{PersonaVariant, TraitVector};

use crate::roster::PersonaSpec;

const HIGH_INCLUSION_BEHAVIORS: &str = "\
This team has strong inclusion practices:
- All team members are explicitly invited to contribute
- Diverse perspectives are actively sought out and valued
- Decision-making processes involve all team members
- Team norms support psychological safety
- Communication is transparent and accessible
- Team leader actively promotes equity";

const HIGH_INCLUSION_MEETINGS: &str = "\
When conducting team meetings or discussions:
- Begin by ensuring all voices are heard
- Use structured turn-taking to prevent domination by some members
- Actively solicit input from quieter members
- Acknowledge and build upon others' ideas
- Encourage respectful challenging of assumptions
- Summarize diverse perspectives before making decisions";

const LOW_INCLUSION_BEHAVIORS: &str = "\
This team has minimal inclusion practices:
- Team interactions tend to be dominated by a few voices
- Alternative perspectives are rarely sought out
- Decision-making often happens informally among select members
- Team culture rewards conformity over diverse thinking
- Communication is inconsistent and varies by team member
- Team leader shows unconscious favoritism";

const LOW_INCLUSION_MEETINGS: &str = "\
When conducting team meetings or discussions:
- Move quickly through agenda items focusing on efficiency
- Allow natural conversation flow (dominant voices tend to lead)
- Make decisions based on majority or authority perspectives
- Focus primarily on task completion rather than process
- Minimize dissent to maintain harmony and speed
- Rely on conventional approaches and established methods";

const HIGH_INCLUSION_PARTICIPATION: &str = "\
In this team, you're encouraged to actively share your perspective. \
The team values diverse viewpoints and creates space for all voices. \
You should feel comfortable expressing both agreement and disagreement.";

const LOW_INCLUSION_PARTICIPATION: &str = "\
In this team, you'll need to find opportunities to contribute. \
Team discussions can move quickly, and sometimes quieter perspectives get overlooked. \
You should try to share your insights when possible without disrupting the flow.";

/// How strongly the facilitator works by inclusive practices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InclusionLevel {
    High,
    Low,
}

impl InclusionLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            InclusionLevel::High => "high",
            InclusionLevel::Low => "low",
        }
    }

    /// Team norms block woven into the facilitator's narrative.
    pub fn behaviors(&self) -> &'static str {
        match self {
            InclusionLevel::High => HIGH_INCLUSION_BEHAVIORS,
            InclusionLevel::Low => LOW_INCLUSION_BEHAVIORS,
        }
    }

    /// Meeting facilitation block woven into the facilitator's narrative.
    pub fn meeting_structure(&self) -> &'static str {
        match self {
            InclusionLevel::High => HIGH_INCLUSION_MEETINGS,
            InclusionLevel::Low => LOW_INCLUSION_MEETINGS,
        }
    }

    /// Guidance each regular member receives about participating.
    pub fn participation_guidance(&self) -> &'static str {
        match self {
            InclusionLevel::High => HIGH_INCLUSION_PARTICIPATION,
            InclusionLevel::Low => LOW_INCLUSION_PARTICIPATION,
        }
    }
}

impl fmt::Display for InclusionLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InclusionLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "high" => Ok(InclusionLevel::High),
            "low" => Ok(InclusionLevel::Low),
            other => Err(format!("unknown inclusion level: {other}")),
        }
    }
}

/// How varied the member profiles are.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiversityLevel {
    High,
    Low,
}

impl DiversityLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            DiversityLevel::High => "high",
            DiversityLevel::Low => "low",
        }
    }
}

impl fmt::Display for DiversityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DiversityLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "high" => Ok(DiversityLevel::High),
            "low" => Ok(DiversityLevel::Low),
            other => Err(format!("unknown diversity level: {other}")),
        }
    }
}

/// One member's cognitive and experiential profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiversityProfile {
    pub name: String,
    pub role: String,
    pub background: String,
    pub thinking_style: String,
    pub communication_style: String,
    pub expertise: String,
    pub years_experience: u8,
}

impl DiversityProfile {
    fn new(
        name: &str,
        role: &str,
        background: &str,
        thinking_style: &str,
        communication_style: &str,
        expertise: &str,
        years_experience: u8,
    ) -> Self {
        Self {
            name: name.to_string(),
            role: role.to_string(),
            background: background.to_string(),
            thinking_style: thinking_style.to_string(),
            communication_style: communication_style.to_string(),
            expertise: expertise.to_string(),
            years_experience,
        }
    }

    /// Narrative line describing how this member's thinking style shows up.
    pub fn approach(&self) -> &'static str {
        match self.thinking_style.as_str() {
            "Analytical" => {
                "You tend to analyze situations logically, looking for patterns and evidence."
            }
            "Creative" => {
                "You tend to approach problems from unexpected angles, generating novel ideas."
            }
            "Practical" => {
                "You focus on practical, implementable solutions rather than abstract concepts."
            }
            "Conceptual" => {
                "You prefer working with big-picture concepts and theoretical frameworks."
            }
            "Reflective" => {
                "You carefully consider all angles before offering thoughtful, nuanced perspectives."
            }
            _ => "You bring your unique perspective to problem-solving and team discussions.",
        }
    }
}

/// The facilitator profile, shared by both diversity levels.
pub fn facilitator_profile() -> DiversityProfile {
    DiversityProfile::new(
        "Alex",
        "Team Facilitator",
        "Psychology",
        "Integrative",
        "Inclusive",
        "Team Dynamics",
        10,
    )
}

/// Fixed member roster for the requested diversity level.
///
/// The high-diversity roster spreads thinking styles, communication
/// styles, backgrounds and tenure; the low-diversity roster alternates
/// between two near-identical profiles.
pub fn member_profiles(level: DiversityLevel) -> Vec<DiversityProfile> {
    match level {
        DiversityLevel::High => vec![
            DiversityProfile::new(
                "Taylor",
                "Data Analyst",
                "Mathematics",
                "Analytical",
                "Direct",
                "Technical",
                3,
            ),
            DiversityProfile::new(
                "Jordan",
                "Project Manager",
                "Liberal Arts",
                "Creative",
                "Collaborative",
                "People",
                12,
            ),
            DiversityProfile::new(
                "Casey",
                "UX Designer",
                "Design",
                "Conceptual",
                "Intuitive",
                "Strategy",
                7,
            ),
            DiversityProfile::new(
                "Riley",
                "Software Engineer",
                "Computer Science",
                "Reflective",
                "Functional",
                "Implementation",
                18,
            ),
        ],
        DiversityLevel::Low => vec![
            DiversityProfile::new(
                "Taylor",
                "Data Analyst",
                "Computer Science",
                "Analytical",
                "Direct",
                "Technical",
                6,
            ),
            DiversityProfile::new(
                "Jordan",
                "Project Manager",
                "Business Administration",
                "Practical",
                "Collaborative",
                "Process",
                8,
            ),
            DiversityProfile::new(
                "Casey",
                "UX Designer",
                "Computer Science",
                "Analytical",
                "Direct",
                "Technical",
                6,
            ),
            DiversityProfile::new(
                "Riley",
                "Software Engineer",
                "Business Administration",
                "Practical",
                "Collaborative",
                "Process",
                8,
            ),
        ],
    }
}

/// Persona specs for a diversity team: facilitator first, then members.
///
/// The facilitator carries the inclusion practice blocks; members get
/// their profile description, thinking-style approach and the level's
/// participation guidance as extra narrative context.
pub fn team_specs(diversity: DiversityLevel, inclusion: InclusionLevel) -> Vec<PersonaSpec> {
    let mut specs = Vec::new();

    let facilitator = facilitator_profile();
    let facilitator_context = format!(
        "You have {} years of experience and a background in {}. {} {} \
         Your primary responsibility is to guide the team through the assigned task \
         while implementing these inclusion practices consistently.",
        facilitator.years_experience,
        facilitator.background,
        inclusion.behaviors(),
        inclusion.meeting_structure(),
    );
    specs.push(
        PersonaSpec::new(
            &facilitator.name,
            &facilitator.role,
            &facilitator.expertise,
            TraitVector::new(),
            PersonaVariant::Standard,
        )
        .with_context(facilitator_context),
    );

    for profile in member_profiles(diversity) {
        let context = format!(
            "You have {} years of experience and a background in {}. \
             You have a {} thinking style and tend to communicate in a {} manner. \
             Your area of expertise is {}. {} {}",
            profile.years_experience,
            profile.background,
            profile.thinking_style,
            profile.communication_style,
            profile.expertise,
            profile.approach(),
            inclusion.participation_guidance(),
        );
        specs.push(
            PersonaSpec::new(
                &profile.name,
                &profile.role,
                &profile.expertise,
                TraitVector::new(),
                PersonaVariant::Standard,
            )
            .with_context(context),
        );
    }

    specs
}
