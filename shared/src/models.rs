//! Data models for the OptiTrain application

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Primary fitness goal selected in settings
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum FitnessGoal {
    MuscleGain,
    WeightLoss,
    Strength,
    Endurance,
    Flexibility,
}

impl FitnessGoal {
    /// All valid goal tokens, in the order offered to the user
    pub const ALL: &'static [FitnessGoal] = &[
        FitnessGoal::MuscleGain,
        FitnessGoal::WeightLoss,
        FitnessGoal::Strength,
        FitnessGoal::Endurance,
        FitnessGoal::Flexibility,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FitnessGoal::MuscleGain => "muscle-gain",
            FitnessGoal::WeightLoss => "weight-loss",
            FitnessGoal::Strength => "strength",
            FitnessGoal::Endurance => "endurance",
            FitnessGoal::Flexibility => "flexibility",
        }
    }
}

impl fmt::Display for FitnessGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FitnessGoal {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "muscle-gain" => Ok(FitnessGoal::MuscleGain),
            "weight-loss" => Ok(FitnessGoal::WeightLoss),
            "strength" => Ok(FitnessGoal::Strength),
            "endurance" => Ok(FitnessGoal::Endurance),
            "flexibility" => Ok(FitnessGoal::Flexibility),
            other => Err(format!("Unknown fitness goal: {}", other)),
        }
    }
}

/// Training experience level
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl ExperienceLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExperienceLevel::Beginner => "beginner",
            ExperienceLevel::Intermediate => "intermediate",
            ExperienceLevel::Advanced => "advanced",
        }
    }
}

impl fmt::Display for ExperienceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExperienceLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "beginner" => Ok(ExperienceLevel::Beginner),
            "intermediate" => Ok(ExperienceLevel::Intermediate),
            "advanced" => Ok(ExperienceLevel::Advanced),
            other => Err(format!("Unknown experience level: {}", other)),
        }
    }
}

/// Workout category
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum WorkoutType {
    Strength,
    Cardio,
}

impl WorkoutType {
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkoutType::Strength => "strength",
            WorkoutType::Cardio => "cardio",
        }
    }
}

impl fmt::Display for WorkoutType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WorkoutType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "strength" => Ok(WorkoutType::Strength),
            "cardio" => Ok(WorkoutType::Cardio),
            other => Err(format!("Unknown workout type: {}", other)),
        }
    }
}

/// Read-only view of the profile fields that planning and coaching consume.
///
/// Constructed fresh from the profile store for each generation or response
/// call and never mutated during it. Any field may be absent; consumers must
/// ask a clarifying question instead of fabricating a value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileSnapshot {
    pub name: String,
    pub location: Option<String>,
    pub goal: Option<FitnessGoal>,
    pub experience_level: Option<ExperienceLevel>,
    /// Raw user-entered value from settings, e.g. "4". Resolved to a
    /// clamped integer only at plan-generation time.
    pub workouts_per_week: Option<String>,
    pub weight: Option<String>,
    pub target_weight: Option<String>,
    pub height: Option<String>,
}

impl ProfileSnapshot {
    /// Weekly workout target resolved from the raw setting.
    ///
    /// Missing or non-numeric values default to 3; the result is clamped
    /// to [1, 7].
    pub fn weekly_workout_target(&self) -> u32 {
        crate::validation::resolve_workouts_per_week(self.workouts_per_week.as_deref())
    }
}

/// One exercise within a workout template, with logging detail
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExerciseSpec {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sets: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reps: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<String>,
}

impl ExerciseSpec {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            sets: None,
            reps: None,
            weight: None,
        }
    }
}

/// A reusable, user-authored workout definition
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WorkoutTemplate {
    pub id: String,
    pub name: String,
    pub workout_type: WorkoutType,
    pub duration_minutes: i32,
    /// Order-preserving; duplicates allowed
    pub exercises: Vec<ExerciseSpec>,
}

impl WorkoutTemplate {
    /// Flattened exercise name list, as stored on plan entries.
    ///
    /// Set/rep/weight detail is not carried over: the planner is a
    /// scheduling view, not a logging view.
    pub fn exercise_names(&self) -> Vec<String> {
        self.exercises.iter().map(|e| e.name.clone()).collect()
    }
}

/// One workout template assigned to one day of one calendar week
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlanEntry {
    /// Deterministic composite id: `{week_id}-{template_id}-{position}`
    pub id: String,
    /// Day of week, 0 = Sunday
    pub day: u8,
    pub name: String,
    pub workout_type: WorkoutType,
    pub duration_minutes: i32,
    pub exercises: Vec<String>,
    pub completed: bool,
    /// Weak back-reference; the template may be deleted without
    /// invalidating this entry
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_workout_id: Option<String>,
}

/// Chat message role
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    User,
    Assistant,
}

/// One message in a coaching conversation.
///
/// The history is client-held and append-only during a session; content may
/// carry the `**bold**` emphasis convention.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: MessageRole,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_goal_tokens_round_trip() {
        for goal in FitnessGoal::ALL {
            let parsed: FitnessGoal = goal.as_str().parse().unwrap();
            assert_eq!(parsed, *goal);
        }
    }

    #[test]
    fn test_goal_serde_uses_kebab_case() {
        let json = serde_json::to_string(&FitnessGoal::MuscleGain).unwrap();
        assert_eq!(json, "\"muscle-gain\"");
        let back: FitnessGoal = serde_json::from_str("\"weight-loss\"").unwrap();
        assert_eq!(back, FitnessGoal::WeightLoss);
    }

    #[test]
    fn test_unknown_goal_rejected() {
        assert!("cutting".parse::<FitnessGoal>().is_err());
    }

    #[test]
    fn test_weekly_workout_target_defaults_to_three() {
        let profile = ProfileSnapshot::default();
        assert_eq!(profile.weekly_workout_target(), 3);

        let profile = ProfileSnapshot {
            workouts_per_week: Some("not a number".to_string()),
            ..Default::default()
        };
        assert_eq!(profile.weekly_workout_target(), 3);
    }

    #[test]
    fn test_weekly_workout_target_clamped() {
        let profile = ProfileSnapshot {
            workouts_per_week: Some("12".to_string()),
            ..Default::default()
        };
        assert_eq!(profile.weekly_workout_target(), 7);
    }

    #[test]
    fn test_exercise_names_preserve_order_and_duplicates() {
        let template = WorkoutTemplate {
            id: "w1".to_string(),
            name: "Push Day".to_string(),
            workout_type: WorkoutType::Strength,
            duration_minutes: 45,
            exercises: vec![
                ExerciseSpec::named("Bench Press"),
                ExerciseSpec::named("Dips"),
                ExerciseSpec::named("Bench Press"),
            ],
        };
        assert_eq!(
            template.exercise_names(),
            vec!["Bench Press", "Dips", "Bench Press"]
        );
    }

    #[test]
    fn test_plan_entry_serde_round_trip() {
        let entry = PlanEntry {
            id: "2026-08-23-w1-0".to_string(),
            day: 1,
            name: "Push Day".to_string(),
            workout_type: WorkoutType::Strength,
            duration_minutes: 45,
            exercises: vec!["Bench Press".to_string()],
            completed: false,
            source_workout_id: Some("w1".to_string()),
        };
        let json = serde_json::to_string(&entry).unwrap();
        let back: PlanEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(back, entry);
    }
}
