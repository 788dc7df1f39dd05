//! Scenario tests for the rule-based coach

#[cfg(test)]
mod tests {
    use crate::services::coach::build_reply;
    use optitrain_shared::models::{ExperienceLevel, FitnessGoal, ProfileSnapshot};
    use rstest::rstest;

    fn profile_named(name: &str) -> ProfileSnapshot {
        ProfileSnapshot {
            name: name.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn scenario_greeting_uses_profile_name() {
        let reply = build_reply("hey", &profile_named("Sam"));
        assert!(reply.starts_with("Hey Sam!"));
    }

    #[test]
    fn scenario_workout_request_without_profile_lists_needed_fields() {
        let reply = build_reply("Can you make me a workout plan?", &ProfileSnapshot::default());
        assert!(reply.contains("Primary goal"));
        assert!(reply.contains("Experience level"));
        assert!(reply.contains("Workouts per week"));
    }

    #[test]
    fn scenario_progress_summary_includes_only_known_fields() {
        let profile = ProfileSnapshot {
            goal: Some(FitnessGoal::Strength),
            workouts_per_week: Some("4".to_string()),
            ..Default::default()
        };
        let reply = build_reply("progress", &profile);
        assert!(reply.contains("Goal: strength"));
        assert!(reply.contains("Workouts/week: 4"));
        assert!(!reply.contains("Experience:"));
        assert!(!reply.contains("weight"));
    }

    #[test]
    fn scenario_unmatched_message_gets_capability_statement() {
        let reply = build_reply("what's the weather like", &ProfileSnapshot::default());
        assert!(reply.starts_with("I can help with workout planning"));
    }

    #[test]
    fn scenario_goal_question_reflects_stored_goal() {
        let profile = ProfileSnapshot {
            goal: Some(FitnessGoal::Endurance),
            ..Default::default()
        };
        let reply = build_reply("what's my goal?", &profile);
        assert!(reply.contains("Your current goal is **endurance**."));
    }

    /// Same message, same profile, same reply
    #[rstest]
    #[case("hey there coach")]
    #[case("build me a plan")]
    #[case("nutrition tips")]
    #[case("something unrelated")]
    fn replies_are_deterministic(#[case] message: &str) {
        let profile = ProfileSnapshot {
            name: "Sam".to_string(),
            goal: Some(FitnessGoal::MuscleGain),
            experience_level: Some(ExperienceLevel::Intermediate),
            workouts_per_week: Some("3".to_string()),
            ..Default::default()
        };
        assert_eq!(build_reply(message, &profile), build_reply(message, &profile));
    }

    /// Case and surrounding whitespace never change the matched rule
    #[rstest]
    #[case("WORKOUT PLAN", "workout plan")]
    #[case("  Progress  ", "progress")]
    #[case("NUTRITION", "nutrition")]
    fn matching_is_case_and_whitespace_insensitive(#[case] a: &str, #[case] b: &str) {
        let profile = profile_named("Sam");
        assert_eq!(build_reply(a, &profile), build_reply(b, &profile));
    }
}
