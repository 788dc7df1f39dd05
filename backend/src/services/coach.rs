//! Rule-based coaching responder
//!
//! Maps one user message plus a profile snapshot to exactly one reply.
//! The rules form an ordered decision table evaluated first-match-wins;
//! the final catch-all guarantees every input produces a reply, so this
//! component has no error states. Replies use the `**bold**` emphasis
//! convention; rendering is the client's concern.

use crate::error::ApiError;
use crate::repositories::UserRepository;
use crate::services::profile::ProfileService;
use optitrain_shared::models::ProfileSnapshot;
use optitrain_shared::validation::get_field_display_label;
use sqlx::PgPool;
use std::sync::OnceLock;
use uuid::Uuid;

/// One row of the decision table: a predicate over the normalized message
/// and the reply builder it selects
struct Rule {
    matches: fn(&str) -> bool,
    respond: fn(&ProfileSnapshot) -> String,
}

/// Ordered decision table. Evaluation order is the tie-break: a message
/// matching several keyword sets resolves to the first row only.
const RULES: &[Rule] = &[
    Rule {
        matches: is_greeting,
        respond: greeting_reply,
    },
    Rule {
        matches: |text| text.contains("workout") || text.contains("plan"),
        respond: workout_plan_reply,
    },
    Rule {
        matches: |text| text.contains("goal"),
        respond: goal_reply,
    },
    Rule {
        matches: |text| text.contains("progress") || text.contains("week"),
        respond: progress_reply,
    },
    Rule {
        matches: |text| text.contains("tomorrow") || text.contains("focus"),
        respond: focus_reply,
    },
    Rule {
        matches: |text| {
            text.contains("nutrition") || text.contains("diet") || text.contains("calories")
        },
        respond: nutrition_reply,
    },
    // Catch-all: guarantees totality
    Rule {
        matches: |_| true,
        respond: capability_reply,
    },
];

/// Build the coach's reply for one message. Pure; no I/O.
pub fn build_reply(message: &str, profile: &ProfileSnapshot) -> String {
    let text = message.trim().to_lowercase();

    RULES
        .iter()
        .find(|rule| (rule.matches)(&text))
        .map(|rule| (rule.respond)(profile))
        .unwrap_or_else(|| capability_reply(profile))
}

fn is_greeting(text: &str) -> bool {
    static GREETING: OnceLock<regex_lite::Regex> = OnceLock::new();
    GREETING
        .get_or_init(|| {
            regex_lite::Regex::new(r"^(hi|hello|hey|yo|sup|good (morning|afternoon|evening))\b")
                .unwrap()
        })
        .is_match(text)
}

fn display_name(profile: &ProfileSnapshot) -> &str {
    if profile.name.trim().is_empty() {
        "there"
    } else {
        profile.name.as_str()
    }
}

/// Labels for the planning fields the user has not filled in, in the fixed
/// order {goal, experience level, workouts per week}
fn missing_planning_fields(profile: &ProfileSnapshot) -> Vec<&'static str> {
    let mut missing = Vec::new();
    if profile.goal.is_none() {
        missing.push(get_field_display_label("goal"));
    }
    if profile.experience_level.is_none() {
        missing.push(get_field_display_label("experience_level"));
    }
    if profile.workouts_per_week.is_none() {
        missing.push(get_field_display_label("workouts_per_week"));
    }
    missing
}

fn greeting_reply(profile: &ProfileSnapshot) -> String {
    format!(
        "Hey {}! How can I help today - workout plan, goal setting, or nutrition?",
        display_name(profile)
    )
}

fn workout_plan_reply(profile: &ProfileSnapshot) -> String {
    let (Some(goal), Some(experience), Some(workouts)) = (
        profile.goal,
        profile.experience_level,
        profile.workouts_per_week.as_deref(),
    ) else {
        let list = missing_planning_fields(profile)
            .iter()
            .map(|label| format!("- {}", label))
            .collect::<Vec<_>>()
            .join("\n");
        return format!(
            "I can build a personalized workout plan, but I need a few details from you first:\n{}\n\nPlease update these in Settings and ask again.",
            list
        );
    };

    format!(
        "Here's a simple {} plan for {} days/week at a {} level:\n\n\
         Day 1: Full body strength (compound lifts + accessories)\n\
         Day 2: Cardio + mobility\n\
         Day 3: Upper body strength\n\
         Day 4: Lower body strength\n\
         Day 5: Optional conditioning or active recovery\n\n\
         If you want, tell me which equipment you have and how much time you can train per session.",
        goal, workouts, experience
    )
}

fn goal_reply(profile: &ProfileSnapshot) -> String {
    match profile.goal {
        None => "What's your primary goal? (build muscle, lose weight, increase strength, improve endurance, flexibility)".to_string(),
        Some(goal) => format!(
            "Your current goal is **{}**. If you want to change it, tell me what goal you want and I'll guide you.",
            goal
        ),
    }
}

fn progress_reply(profile: &ProfileSnapshot) -> String {
    let details: Vec<String> = [
        profile.goal.map(|g| format!("Goal: {}", g)),
        profile
            .experience_level
            .map(|e| format!("Experience: {}", e)),
        profile
            .workouts_per_week
            .as_ref()
            .map(|w| format!("Workouts/week: {}", w)),
        profile.weight.as_ref().map(|w| format!("Current weight: {}", w)),
        profile
            .target_weight
            .as_ref()
            .map(|t| format!("Target weight: {}", t)),
    ]
    .into_iter()
    .flatten()
    .collect();

    if details.is_empty() {
        return "I don't have enough progress data yet. If you log workouts or share your recent training, I can summarize it.".to_string();
    }

    format!(
        "Here's what I have from your profile:\n- {}\n\nIf you want detailed progress tracking, log workouts and update your measurements regularly.",
        details.join("\n- ")
    )
}

fn focus_reply(profile: &ProfileSnapshot) -> String {
    let (Some(goal), Some(_), Some(workouts)) = (
        profile.goal,
        profile.experience_level,
        profile.workouts_per_week.as_deref(),
    ) else {
        return "I can suggest tomorrow's focus once I know your goal, experience level, and workouts per week.".to_string();
    };

    format!(
        "For tomorrow, focus on the next session in your {} plan. A simple split for {} days/week:\n\
         1) Full body strength\n\
         2) Upper body strength\n\
         3) Lower body strength\n\n\
         Tell me which day you last trained and I'll pick the exact session.",
        goal, workouts
    )
}

fn nutrition_reply(profile: &ProfileSnapshot) -> String {
    match profile.goal {
        None => "To give nutrition guidance, I need your primary goal first. Update it in Settings and ask again.".to_string(),
        Some(goal) => format!(
            "For {}, I can help you estimate calories and macros. Tell me your age, height, weight, and activity level.",
            goal
        ),
    }
}

fn capability_reply(_profile: &ProfileSnapshot) -> String {
    "I can help with workout planning, goals, progress summaries, and nutrition basics. Ask a specific question and I'll answer based on your profile.".to_string()
}

/// Coach service: loads the caller's profile snapshot and runs the table
pub struct CoachService;

impl CoachService {
    pub async fn respond(pool: &PgPool, user_id: Uuid, message: &str) -> Result<String, ApiError> {
        let profile = UserRepository::get_profile(pool, user_id)
            .await?
            .map(ProfileService::snapshot)
            .unwrap_or_default();

        Ok(build_reply(message, &profile))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use optitrain_shared::models::{ExperienceLevel, FitnessGoal};
    use rstest::rstest;

    fn full_profile() -> ProfileSnapshot {
        ProfileSnapshot {
            name: "Sam".to_string(),
            location: None,
            goal: Some(FitnessGoal::MuscleGain),
            experience_level: Some(ExperienceLevel::Beginner),
            workouts_per_week: Some("4".to_string()),
            weight: Some("80".to_string()),
            target_weight: Some("85".to_string()),
            height: None,
        }
    }

    #[rstest]
    #[case("hey")]
    #[case("Hi coach")]
    #[case("good morning")]
    #[case("  hello  ")]
    fn test_greeting_echoes_name(#[case] message: &str) {
        let reply = build_reply(message, &full_profile());
        assert!(reply.starts_with("Hey Sam!"), "got: {}", reply);
    }

    #[test]
    fn test_greeting_falls_back_to_there() {
        let profile = ProfileSnapshot::default();
        let reply = build_reply("hey", &profile);
        assert!(reply.starts_with("Hey there!"));
    }

    #[test]
    fn test_greeting_requires_word_boundary() {
        // "history" contains "hi" but is not a greeting; falls through to
        // the catch-all
        let reply = build_reply("history", &ProfileSnapshot::default());
        assert!(reply.starts_with("I can help with workout planning"));
    }

    #[test]
    fn test_workout_request_names_all_missing_fields() {
        let reply = build_reply("Create a workout for today", &ProfileSnapshot::default());
        assert!(reply.contains("- Primary goal"));
        assert!(reply.contains("- Experience level"));
        assert!(reply.contains("- Workouts per week"));
        assert!(reply.contains("update these in Settings"));
    }

    #[test]
    fn test_workout_request_names_only_missing_fields() {
        let profile = ProfileSnapshot {
            goal: Some(FitnessGoal::Strength),
            ..Default::default()
        };
        let reply = build_reply("workout please", &profile);
        assert!(!reply.contains("- Primary goal"));
        assert!(reply.contains("- Experience level"));
        assert!(reply.contains("- Workouts per week"));
    }

    #[test]
    fn test_workout_request_with_full_profile() {
        let reply = build_reply("build me a plan", &full_profile());
        assert!(reply.contains("muscle-gain plan"));
        assert!(reply.contains("4 days/week"));
        assert!(reply.contains("beginner level"));
    }

    #[test]
    fn test_goal_query_states_current_goal() {
        let profile = ProfileSnapshot {
            goal: Some(FitnessGoal::Endurance),
            ..Default::default()
        };
        let reply = build_reply("goal", &profile);
        assert!(reply.contains("Your current goal is **endurance**."));
    }

    #[test]
    fn test_goal_query_asks_with_option_list_when_missing() {
        let reply = build_reply("help me set a goal", &ProfileSnapshot::default());
        assert!(reply.contains("What's your primary goal?"));
        assert!(reply.contains("build muscle, lose weight, increase strength"));
    }

    #[test]
    fn test_progress_lists_only_populated_fields() {
        let profile = ProfileSnapshot {
            goal: Some(FitnessGoal::Strength),
            workouts_per_week: Some("4".to_string()),
            ..Default::default()
        };
        let reply = build_reply("How is my progress this week?", &profile);
        assert!(reply.contains("Goal: strength"));
        assert!(reply.contains("Workouts/week: 4"));
        assert!(!reply.contains("Experience:"));
        assert!(!reply.contains("Current weight:"));
        assert!(!reply.contains("Target weight:"));
    }

    #[test]
    fn test_progress_with_empty_profile_apologizes() {
        let reply = build_reply("show my progress", &ProfileSnapshot::default());
        assert!(reply.starts_with("I don't have enough progress data yet."));
    }

    #[test]
    fn test_focus_gated_on_same_fields_as_workout() {
        let reply = build_reply("what should I focus on tomorrow?", &ProfileSnapshot::default());
        assert!(reply.contains("once I know your goal, experience level, and workouts per week"));

        let reply = build_reply("tomorrow?", &full_profile());
        assert!(reply.contains("For tomorrow, focus on the next session"));
    }

    #[test]
    fn test_nutrition_requires_goal() {
        let reply = build_reply("how many calories should I eat", &ProfileSnapshot::default());
        assert!(reply.contains("I need your primary goal first"));

        let reply = build_reply("diet advice", &full_profile());
        assert!(reply.contains("For muscle-gain, I can help you estimate calories and macros."));
    }

    #[test]
    fn test_unmatched_input_gets_fixed_capability_statement() {
        let reply = build_reply("asdf qwerty", &full_profile());
        assert_eq!(
            reply,
            "I can help with workout planning, goals, progress summaries, and nutrition basics. Ask a specific question and I'll answer based on your profile."
        );
    }

    #[test]
    fn test_first_match_wins_tie_break() {
        // Contains both "goal" and "progress"; the workout/plan row is not
        // matched, so the goal row (earlier) wins over progress
        let profile = ProfileSnapshot {
            goal: Some(FitnessGoal::Endurance),
            ..Default::default()
        };
        let reply = build_reply("goal progress", &profile);
        assert!(reply.contains("Your current goal is"));

        // "plan" beats "goal": the workout row comes first
        let reply = build_reply("plan for my goal", &ProfileSnapshot::default());
        assert!(reply.contains("I can build a personalized workout plan"));
    }

    #[test]
    fn test_every_input_produces_a_reply() {
        for message in ["", "   ", "?", "Tell me a joke", "WORKOUT", "¿Qué tal?"] {
            let reply = build_reply(message, &ProfileSnapshot::default());
            assert!(!reply.is_empty());
        }
    }
}
