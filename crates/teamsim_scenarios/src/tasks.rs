//! Canned task sets for the built-in scenarios.
//!
//! Each set is a list of role-addressed task specs; binding skips
//! specs whose role is not on the team, so the same set works for
//! rosters with and without the optional members.

use serde::{Deserialize, Serialize};
use tracing::debug;

use teamsim_core::{LeadershipStyle, Team};

use crate::diversity::{DiversityProfile, InclusionLevel};
use crate::error::ScenarioResult;

/// A task waiting to be bound to a team role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskSpec {
    pub description: String,
    pub assigned_role: String,
    pub expected_output: String,
    #[serde(default)]
    pub context: String,
}

impl TaskSpec {
    pub fn new(
        description: impl Into<String>,
        assigned_role: impl Into<String>,
        expected_output: impl Into<String>,
        context: impl Into<String>,
    ) -> Self {
        Self {
            description: description.into(),
            assigned_role: assigned_role.into(),
            expected_output: expected_output.into(),
            context: context.into(),
        }
    }
}

/// Bind every spec whose role exists on the team; skip the rest.
///
/// Returns the number of tasks bound. Specs are bound in order, which
/// fixes the execution order for both process disciplines.
pub fn bind_tasks(team: &mut Team, specs: &[TaskSpec]) -> ScenarioResult<usize> {
    let mut bound = 0;
    for spec in specs {
        if !team.has_role(&spec.assigned_role) {
            debug!(role = %spec.assigned_role, "skipping task for absent role");
            continue;
        }
        team.bind_task(
            &spec.description,
            &spec.assigned_role,
            &spec.expected_output,
            &spec.context,
        )?;
        bound += 1;
    }
    Ok(bound)
}

/// Problem-solving set: plan a study-habit tracking app.
///
/// Written for the default roster; the Devil's Advocate task only
/// binds when the dissenting member is on the team.
pub fn problem_solving_tasks() -> Vec<TaskSpec> {
    let app_context = "Your team works at a software company. College students have asked for \
                       a mobile app that helps them track and improve their study habits.";

    vec![
        TaskSpec::new(
            "Develop a project plan for creating a new mobile app that helps college students \
             track their study habits.",
            "Team Leader",
            "A comprehensive project plan with team roles and timeline.",
            "You need to coordinate with all team members to create a comprehensive project plan.",
        ),
        TaskSpec::new(
            "Propose the technical architecture for the study habit tracking app.",
            "Technical Expert",
            "A technical architecture proposal with recommended technologies.",
            "Consider key features like tracking study time, setting goals, and providing \
             analytics.",
        ),
        TaskSpec::new(
            "Design the user interface and experience for the app.",
            "Creative Lead",
            "A design proposal including UI concepts and user flow.",
            "The app should be engaging and intuitive for college students.",
        ),
        TaskSpec::new(
            "Research similar apps and identify market opportunities.",
            "Analyst",
            "An analysis of competitor apps with identified gaps and opportunities.",
            "Analyze competitor apps and identify gaps or opportunities for our app.",
        ),
        TaskSpec::new(
            "Develop a launch and adoption strategy for the app among college students.",
            "Marketing Specialist",
            "A launch strategy with messaging approaches and distribution channels.",
            app_context,
        ),
        TaskSpec::new(
            "Challenge the team's assumptions about the project direction.",
            "Devil's Advocate",
            "A list of questioned assumptions with alternative perspectives.",
            "Question key assumptions the team is making and offer alternative perspectives.",
        ),
    ]
}

/// Creative set: reduce plastic waste on a university campus.
pub fn creative_tasks(style: LeadershipStyle) -> Vec<TaskSpec> {
    vec![
        TaskSpec::new(
            format!(
                "Your team has been tasked with designing an innovative solution to reduce \
                 plastic waste on your university campus. As the team leader using a {style} \
                 leadership style, guide your team through this creative challenge. You need to: \
                 1. Define the scope of the problem. 2. Facilitate the team's creative process. \
                 3. Evaluate proposed ideas. 4. Select the most promising solution. \
                 5. Create an implementation plan. Remember to maintain your {style} leadership \
                 style throughout the process."
            ),
            "Team Leader",
            "A comprehensive plan for reducing plastic waste on campus, including the selected \
             solution and implementation steps.",
            "This is an open-ended creative task that will test the team's innovation \
             capabilities.",
        ),
        TaskSpec::new(
            "Research and propose technical solutions for reducing plastic waste on campus. \
             Consider aspects like waste monitoring systems, recycling technologies, or digital \
             platforms that could help track and reduce plastic usage.",
            "Technical Expert",
            "3-5 technology-based solutions with explanations of how they would work.",
            "Focus on solutions that are technically feasible given university resources.",
        ),
        TaskSpec::new(
            "Design creative approaches to engage students in plastic waste reduction. Consider \
             behavioral design, visual campaigns, or innovative product designs that could \
             replace single-use plastics on campus.",
            "Creative Designer",
            "3-5 creative concepts with visual or behavioral design elements.",
            "Focus on designs that would appeal to college students and drive behavior change.",
        ),
        TaskSpec::new(
            "Develop a project timeline and resource allocation plan for implementing plastic \
             waste reduction initiatives on campus. Consider stakeholders, required approvals, \
             and potential challenges.",
            "Project Coordinator",
            "A project plan with timeline, resource requirements, and risk assessment.",
            "Consider university bureaucracy and the academic calendar in your planning.",
        ),
        TaskSpec::new(
            "Research plastic waste trends on college campuses and successful reduction \
             initiatives implemented elsewhere. Analyze what has worked, what hasn't, and why.",
            "Market Researcher",
            "An analysis of successful plastic reduction initiatives with key success factors.",
            "Focus on examples from similar universities when possible.",
        ),
        TaskSpec::new(
            "Analyze the costs and potential savings of different plastic waste reduction \
             strategies. Consider implementation costs, ongoing expenses, and potential \
             financial benefits.",
            "Finance Specialist",
            "A cost-benefit analysis of different plastic reduction approaches.",
            "Consider both short-term costs and long-term financial sustainability.",
        ),
    ]
}

/// Crisis set: respond to a ransomware attack.
pub fn crisis_tasks(style: LeadershipStyle) -> Vec<TaskSpec> {
    vec![
        TaskSpec::new(
            format!(
                "Your team manages the IT systems for a midsize company. A ransomware attack \
                 has just been detected that threatens to encrypt all company data within 24 \
                 hours unless a payment is made. As the team leader using a {style} leadership \
                 style, you must guide your team through this crisis. You need to: \
                 1. Assess the situation and potential impact. 2. Develop an immediate response \
                 strategy. 3. Coordinate team actions to contain and resolve the threat. \
                 4. Create a communication plan for stakeholders. 5. Develop a plan to prevent \
                 future attacks. Remember to maintain your {style} leadership style throughout \
                 the process."
            ),
            "Team Leader",
            "A comprehensive crisis response plan with immediate actions and future prevention \
             strategies.",
            "This is a time-sensitive situation requiring quick, effective decisions.",
        ),
        TaskSpec::new(
            "Analyze the ransomware attack from a technical perspective. Identify the attack \
             vector, affected systems, and potential containment strategies. Recommend technical \
             solutions for both immediate response and longer-term security.",
            "Technical Expert",
            "Technical analysis and recommendations for containment and recovery.",
            "This is a sophisticated attack that bypassed standard security measures.",
        ),
        TaskSpec::new(
            "Develop alternative approaches to the ransomware situation. Consider creative \
             workarounds for affected systems, user experience during the recovery, and \
             innovative ways to maintain business operations during the crisis.",
            "Creative Designer",
            "Creative solutions for maintaining operations and managing user experience during \
             the crisis.",
            "Think beyond conventional cybersecurity approaches to solve this problem.",
        ),
        TaskSpec::new(
            "Create a detailed response timeline and coordinate resources needed for the crisis \
             response. Track all actions taken, manage team workload, and ensure critical tasks \
             are prioritized.",
            "Project Coordinator",
            "A crisis response timeline with resource allocation and task prioritization.",
            "The company's operations are severely impacted, and every hour counts.",
        ),
        TaskSpec::new(
            "Research similar ransomware attacks and how other organizations have responded. \
             Analyze which approaches were successful, which weren't, and identify best \
             practices for crisis communication with stakeholders.",
            "Market Researcher",
            "Analysis of similar cases with successful response strategies and communication \
             approaches.",
            "This type of attack has happened to other organizations in our industry.",
        ),
        TaskSpec::new(
            "Analyze the financial implications of different response options, including paying \
             the ransom versus recovery costs. Evaluate business continuity costs, potential \
             liability, and insurance coverage.",
            "Finance Specialist",
            "Financial analysis of response options with risk assessment.",
            "The ransom demand is $500,000, and the estimated recovery cost without paying is \
             $750,000-1,200,000.",
        ),
    ]
}

/// Innovation set: digital mental health support for students.
///
/// Member tasks interpolate each profile's thinking style, matching
/// the role-specific assignments to whichever profiles are passed in.
pub fn innovation_tasks(
    inclusion: InclusionLevel,
    profiles: &[DiversityProfile],
) -> Vec<TaskSpec> {
    let mut specs = vec![TaskSpec::new(
        format!(
            "Your team has been tasked with developing an innovative digital solution to \
             improve mental health support for university students. As the team facilitator \
             using {inclusion} inclusion practices, guide your team through this challenge. \
             You need to: 1. Define the scope of the mental health challenges facing students. \
             2. Facilitate a collaborative ideation process. 3. Evaluate proposed solutions. \
             4. Develop an implementation plan for the chosen solution. 5. Prepare a summary \
             of your team's process and solution. Remember to maintain the {inclusion} \
             inclusion practices throughout."
        ),
        "Team Facilitator",
        "A comprehensive proposal for a digital mental health solution, including \
         implementation plan and team process summary.",
        "Student mental health has become increasingly important, especially with recent \
         changes in education delivery and social conditions.",
    )];

    for profile in profiles {
        let role = profile.role.as_str();
        let style = profile.thinking_style.as_str();

        let spec = if role.contains("Analyst") || role.contains("Data") {
            TaskSpec::new(
                format!(
                    "Research and analyze data related to student mental health challenges and \
                     digital support solutions. Consider user demographics, usage patterns, and \
                     effectiveness metrics of existing solutions. Apply your {style} thinking \
                     style to identify insights that might not be immediately obvious to others."
                ),
                role,
                "Data analysis with key insights about student mental health needs and \
                 effective digital interventions.",
                "Data can help identify patterns in mental health challenges and solution \
                 effectiveness.",
            )
        } else if role.contains("Engineer") || role.contains("Software") {
            TaskSpec::new(
                format!(
                    "Evaluate technical feasibility of digital mental health support solutions. \
                     Consider aspects like platform options, privacy/security requirements, \
                     integration needs, and development resources. Apply your {style} thinking \
                     style to identify technical considerations that others might overlook."
                ),
                role,
                "Technical assessment of solution options with implementation requirements.",
                "Technical feasibility and security are crucial for mental health applications.",
            )
        } else if role.contains("Design") || role.contains("UX") {
            TaskSpec::new(
                format!(
                    "Design user-centered approaches for digital mental health support. \
                     Consider user experience factors, accessibility, engagement strategies, \
                     and interface design. Apply your {style} thinking style to create design \
                     solutions that effectively meet student needs."
                ),
                role,
                "User experience design concepts for the mental health solution.",
                "Effective mental health solutions must be engaging and easy to use.",
            )
        } else {
            TaskSpec::new(
                format!(
                    "Contribute your expertise as a {role} to the team's mental health \
                     solution. Consider how your unique perspective and skills can enhance the \
                     team's approach. Apply your {style} thinking style to identify aspects of \
                     the challenge that align with your expertise."
                ),
                role,
                format!(
                    "Specialized input related to {role} expertise for the mental health \
                     solution."
                ),
                format!("Your {role} perspective adds valuable diversity to the team's thinking."),
            )
        };
        specs.push(spec);
    }

    specs
}

/// Decision set: recommend an international market entry strategy.
pub fn decision_tasks(inclusion: InclusionLevel, profiles: &[DiversityProfile]) -> Vec<TaskSpec> {
    let mut specs = vec![TaskSpec::new(
        format!(
            "Your team must evaluate and recommend a strategy for a company expanding into \
             international markets. The company is a mid-sized tech firm that has been \
             successful domestically but has no international experience. As the team \
             facilitator using {inclusion} inclusion practices, guide your team through this \
             decision process. You need to: 1. Establish decision criteria for evaluating \
             market options. 2. Facilitate collaborative analysis of at least three possible \
             markets. 3. Ensure all perspectives are considered in the evaluation. 4. Lead the \
             team to a final recommendation with implementation steps. 5. Document the decision \
             process and rationale. Remember to maintain the {inclusion} inclusion practices \
             throughout."
        ),
        "Team Facilitator",
        "A comprehensive market entry recommendation with implementation plan and \
         documentation of the decision process.",
        "This decision will significantly impact the company's future growth trajectory and \
         resource allocation.",
    )];

    for profile in profiles {
        let role = profile.role.as_str();
        let style = profile.thinking_style.as_str();

        let spec = if role.contains("Analyst") || role.contains("Data") {
            TaskSpec::new(
                format!(
                    "Research and analyze market data for potential international expansion \
                     targets. Consider economic indicators, market size, growth projections, \
                     competitive landscape, and relevant regulatory factors. Apply your {style} \
                     thinking style to identify insights that might not be immediately obvious \
                     to others."
                ),
                role,
                "Market analysis with comparative data on potential target markets.",
                "Quantitative and qualitative data provide essential context for market \
                 selection.",
            )
        } else if role.contains("Engineer") || role.contains("Software") {
            TaskSpec::new(
                format!(
                    "Evaluate technical requirements for serving international markets. \
                     Consider infrastructure needs, localization requirements, technical \
                     compliance issues, and development resources needed for different markets. \
                     Apply your {style} thinking style to identify technical considerations \
                     that could impact market selection."
                ),
                role,
                "Technical assessment of requirements for different international markets.",
                "Technical adaptations are often needed to serve international markets \
                 effectively.",
            )
        } else {
            TaskSpec::new(
                format!(
                    "Contribute your expertise as a {role} to the international expansion \
                     decision. Consider how your perspective and experience relate to the \
                     challenges of entering new markets. Apply your {style} thinking style to \
                     identify aspects of market selection that others might overlook."
                ),
                role,
                format!("Specialized input related to {role} expertise for market selection \
                        decision."),
                format!(
                    "Your {role} perspective adds valuable diversity to the team's decision \
                     process."
                ),
            )
        };
        specs.push(spec);
    }

    specs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diversity::{member_profiles, team_specs, DiversityLevel};
    use crate::roster::{build_team, default_roster};

    #[test]
    fn test_bind_skips_absent_roles() {
        // Default roster has no Devil's Advocate, so that spec is skipped.
        let mut team = build_team(&default_roster()).unwrap();
        let bound = bind_tasks(&mut team, &problem_solving_tasks()).unwrap();
        assert_eq!(bound, 5);
        assert_eq!(team.tasks().len(), 5);
    }

    #[test]
    fn test_creative_tasks_carry_the_style() {
        let tasks = creative_tasks(LeadershipStyle::Transformational);
        assert!(tasks[0].description.contains("transformational leadership style"));
        assert_eq!(tasks[0].assigned_role, "Team Leader");
    }

    #[test]
    fn test_innovation_tasks_match_diverse_roster() {
        let profiles = member_profiles(DiversityLevel::High);
        let tasks = innovation_tasks(InclusionLevel::High, &profiles);

        // Facilitator plus one task per member profile.
        assert_eq!(tasks.len(), 5);
        assert!(tasks[0].description.contains("high inclusion practices"));

        let analyst = tasks.iter().find(|t| t.assigned_role == "Data Analyst").unwrap();
        assert!(analyst.description.contains("Analytical thinking style"));

        // Project Manager falls through to the generic task.
        let pm = tasks.iter().find(|t| t.assigned_role == "Project Manager").unwrap();
        assert!(pm.description.contains("Contribute your expertise"));
    }

    #[test]
    fn test_decision_tasks_bind_to_diversity_team() {
        let mut team =
            build_team(&team_specs(DiversityLevel::Low, InclusionLevel::Low)).unwrap();
        let profiles = member_profiles(DiversityLevel::Low);
        let bound = bind_tasks(&mut team, &decision_tasks(InclusionLevel::Low, &profiles)).unwrap();
        assert_eq!(bound, 5);
    }
}
