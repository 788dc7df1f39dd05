//! Profile service
//!
//! The settings page submits fitness fields as free text; they are stored
//! verbatim and only interpreted at the point of use. `snapshot` is that
//! interpretation step: it normalizes blanks to absent and parses the
//! enumerated fields, treating anything unparseable as absent.

use crate::error::{ApiError, ApiResult};
use crate::repositories::{ProfileRecord, UpdateProfile, UserRepository};
use optitrain_shared::models::{ExperienceLevel, FitnessGoal, ProfileSnapshot};
use optitrain_shared::types::{ProfileResponse, UpdateProfileRequest};
use sqlx::PgPool;
use uuid::Uuid;

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

pub struct ProfileService;

impl ProfileService {
    /// Interpret a stored profile row for planning and coaching
    pub fn snapshot(record: ProfileRecord) -> ProfileSnapshot {
        let goal = non_blank(record.goal).and_then(|g| g.parse::<FitnessGoal>().ok());
        let experience_level =
            non_blank(record.experience_level).and_then(|e| e.parse::<ExperienceLevel>().ok());

        ProfileSnapshot {
            name: record.name,
            location: non_blank(record.location),
            goal,
            experience_level,
            workouts_per_week: non_blank(record.workouts_per_week),
            weight: non_blank(record.weight),
            target_weight: non_blank(record.target_weight),
            height: non_blank(record.height),
        }
    }

    pub async fn get(pool: &PgPool, user_id: Uuid) -> ApiResult<ProfileResponse> {
        let record = UserRepository::get_profile(pool, user_id)
            .await?
            .ok_or_else(|| ApiError::NotFound("Profile not found".to_string()))?;

        Ok(Self::to_response(record))
    }

    pub async fn update(
        pool: &PgPool,
        user_id: Uuid,
        request: UpdateProfileRequest,
    ) -> ApiResult<ProfileResponse> {
        // Enumerated fields must carry a known token; a blank clears the
        // field and is always accepted
        if let Some(goal) = request.goal.as_deref() {
            if !goal.trim().is_empty() && goal.parse::<FitnessGoal>().is_err() {
                return Err(ApiError::Validation(format!("Unknown fitness goal: {}", goal)));
            }
        }
        if let Some(level) = request.experience_level.as_deref() {
            if !level.trim().is_empty() && level.parse::<ExperienceLevel>().is_err() {
                return Err(ApiError::Validation(format!(
                    "Unknown experience level: {}",
                    level
                )));
            }
        }

        let updates = UpdateProfile {
            name: request.name,
            location: request.location,
            goal: request.goal,
            experience_level: request.experience_level,
            workouts_per_week: request.workouts_per_week,
            weight: request.weight,
            target_weight: request.target_weight,
            height: request.height,
        };

        let record = UserRepository::update_profile(pool, user_id, updates)
            .await?
            .ok_or_else(|| ApiError::NotFound("Profile not found".to_string()))?;

        Ok(Self::to_response(record))
    }

    fn to_response(record: ProfileRecord) -> ProfileResponse {
        ProfileResponse {
            name: record.name,
            location: record.location,
            goal: record.goal,
            experience_level: record.experience_level,
            workouts_per_week: record.workouts_per_week,
            weight: record.weight,
            target_weight: record.target_weight,
            height: record.height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn record() -> ProfileRecord {
        ProfileRecord {
            user_id: Uuid::new_v4(),
            name: "Sam".to_string(),
            location: Some("Oslo".to_string()),
            goal: Some("strength".to_string()),
            experience_level: Some("beginner".to_string()),
            workouts_per_week: Some("4".to_string()),
            weight: Some("80".to_string()),
            target_weight: None,
            height: Some("".to_string()),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_snapshot_parses_enumerated_fields() {
        let snapshot = ProfileService::snapshot(record());
        assert_eq!(snapshot.goal, Some(FitnessGoal::Strength));
        assert_eq!(snapshot.experience_level, Some(ExperienceLevel::Beginner));
        assert_eq!(snapshot.workouts_per_week.as_deref(), Some("4"));
    }

    #[test]
    fn test_snapshot_treats_blank_as_absent() {
        let snapshot = ProfileService::snapshot(record());
        assert!(snapshot.height.is_none());
        assert!(snapshot.target_weight.is_none());
    }

    #[test]
    fn test_snapshot_drops_unparseable_tokens() {
        let mut rec = record();
        rec.goal = Some("get swole".to_string());
        rec.experience_level = Some("ninja".to_string());

        let snapshot = ProfileService::snapshot(rec);
        assert!(snapshot.goal.is_none());
        assert!(snapshot.experience_level.is_none());
    }
}
