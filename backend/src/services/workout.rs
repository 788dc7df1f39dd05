//! Workout template service

use crate::error::{ApiError, ApiResult};
use crate::repositories::{CreateWorkout, UpdateWorkout, WorkoutRecord, WorkoutRepository};
use optitrain_shared::models::{WorkoutTemplate, WorkoutType};
use optitrain_shared::types::{
    CreateWorkoutRequest, UpdateWorkoutRequest, WorkoutResponse, WorkoutsListResponse,
};
use optitrain_shared::validation::validate_duration_minutes;
use sqlx::PgPool;
use uuid::Uuid;

pub struct WorkoutService;

impl WorkoutService {
    /// Turn a stored row into the planner's input shape.
    ///
    /// Rows written before the type column was constrained may carry an
    /// unknown token; those fall back to strength.
    pub fn record_to_template(record: WorkoutRecord) -> WorkoutTemplate {
        WorkoutTemplate {
            id: record.id.to_string(),
            name: record.name,
            workout_type: record
                .workout_type
                .parse::<WorkoutType>()
                .unwrap_or(WorkoutType::Strength),
            duration_minutes: record.duration_minutes,
            exercises: record.exercises.0,
        }
    }

    pub async fn create(
        pool: &PgPool,
        user_id: Uuid,
        request: CreateWorkoutRequest,
    ) -> ApiResult<WorkoutResponse> {
        if request.name.trim().is_empty() {
            return Err(ApiError::Validation("Workout name is required".to_string()));
        }
        if request.exercises.is_empty() {
            return Err(ApiError::Validation(
                "A workout needs at least one exercise".to_string(),
            ));
        }
        validate_duration_minutes(request.duration_minutes).map_err(ApiError::Validation)?;

        let record = WorkoutRepository::create(
            pool,
            CreateWorkout {
                user_id,
                name: request.name.trim().to_string(),
                workout_type: request.workout_type.as_str().to_string(),
                duration_minutes: request.duration_minutes,
                exercises: request.exercises,
            },
        )
        .await?;

        Ok(Self::to_response(record))
    }

    pub async fn list(pool: &PgPool, user_id: Uuid) -> ApiResult<WorkoutsListResponse> {
        let records = WorkoutRepository::list_by_user(pool, user_id).await?;

        Ok(WorkoutsListResponse {
            workouts: records.into_iter().map(Self::to_response).collect(),
        })
    }

    pub async fn get(pool: &PgPool, user_id: Uuid, id: Uuid) -> ApiResult<WorkoutResponse> {
        let record = WorkoutRepository::get_by_id(pool, id, user_id)
            .await?
            .ok_or_else(|| ApiError::NotFound("Workout not found".to_string()))?;

        Ok(Self::to_response(record))
    }

    pub async fn update(
        pool: &PgPool,
        user_id: Uuid,
        id: Uuid,
        request: UpdateWorkoutRequest,
    ) -> ApiResult<WorkoutResponse> {
        if let Some(name) = request.name.as_deref() {
            if name.trim().is_empty() {
                return Err(ApiError::Validation("Workout name is required".to_string()));
            }
        }
        if let Some(duration) = request.duration_minutes {
            validate_duration_minutes(duration).map_err(ApiError::Validation)?;
        }
        if let Some(exercises) = request.exercises.as_deref() {
            if exercises.is_empty() {
                return Err(ApiError::Validation(
                    "A workout needs at least one exercise".to_string(),
                ));
            }
        }

        let updates = UpdateWorkout {
            name: request.name.map(|n| n.trim().to_string()),
            workout_type: request.workout_type.map(|t| t.as_str().to_string()),
            duration_minutes: request.duration_minutes,
            exercises: request.exercises,
        };

        let record = WorkoutRepository::update(pool, id, user_id, updates)
            .await?
            .ok_or_else(|| ApiError::NotFound("Workout not found".to_string()))?;

        Ok(Self::to_response(record))
    }

    pub async fn delete(pool: &PgPool, user_id: Uuid, id: Uuid) -> ApiResult<()> {
        let deleted = WorkoutRepository::delete(pool, id, user_id).await?;
        if !deleted {
            return Err(ApiError::NotFound("Workout not found".to_string()));
        }
        Ok(())
    }

    fn to_response(record: WorkoutRecord) -> WorkoutResponse {
        let workout_type = record
            .workout_type
            .parse::<WorkoutType>()
            .unwrap_or(WorkoutType::Strength);

        WorkoutResponse {
            id: record.id.to_string(),
            name: record.name,
            workout_type,
            duration_minutes: record.duration_minutes,
            exercises: record.exercises.0,
            created_at: record.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use optitrain_shared::models::ExerciseSpec;
    use sqlx::types::Json;

    fn record(workout_type: &str) -> WorkoutRecord {
        WorkoutRecord {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            name: "Push day".to_string(),
            workout_type: workout_type.to_string(),
            duration_minutes: 45,
            exercises: Json(vec![
                ExerciseSpec::named("Bench press"),
                ExerciseSpec::named("Dips"),
            ]),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_record_to_template_keeps_exercise_order() {
        let template = WorkoutService::record_to_template(record("strength"));
        assert_eq!(template.exercise_names(), vec!["Bench press", "Dips"]);
        assert_eq!(template.workout_type, WorkoutType::Strength);
    }

    #[test]
    fn test_unknown_type_token_falls_back_to_strength() {
        let template = WorkoutService::record_to_template(record("crossfit"));
        assert_eq!(template.workout_type, WorkoutType::Strength);
    }

    #[test]
    fn test_cardio_type_preserved() {
        let template = WorkoutService::record_to_template(record("cardio"));
        assert_eq!(template.workout_type, WorkoutType::Cardio);
    }
}
