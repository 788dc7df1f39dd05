//! Workout template repository

use chrono::{DateTime, Utc};
use optitrain_shared::models::ExerciseSpec;
use sqlx::types::Json;
use sqlx::PgPool;
use uuid::Uuid;

/// Workout template record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct WorkoutRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub workout_type: String,
    pub duration_minutes: i32,
    pub exercises: Json<Vec<ExerciseSpec>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a workout template
#[derive(Debug, Clone)]
pub struct CreateWorkout {
    pub user_id: Uuid,
    pub name: String,
    pub workout_type: String,
    pub duration_minutes: i32,
    pub exercises: Vec<ExerciseSpec>,
}

/// Input for updating a workout template
#[derive(Debug, Clone, Default)]
pub struct UpdateWorkout {
    pub name: Option<String>,
    pub workout_type: Option<String>,
    pub duration_minutes: Option<i32>,
    pub exercises: Option<Vec<ExerciseSpec>>,
}

/// Workout template repository
pub struct WorkoutRepository;

impl WorkoutRepository {
    /// Create a workout template
    pub async fn create(pool: &PgPool, input: CreateWorkout) -> Result<WorkoutRecord, sqlx::Error> {
        let record = sqlx::query_as::<_, WorkoutRecord>(
            r#"
            INSERT INTO workouts (user_id, name, workout_type, duration_minutes, exercises)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, user_id, name, workout_type, duration_minutes, exercises,
                      created_at, updated_at
            "#,
        )
        .bind(input.user_id)
        .bind(&input.name)
        .bind(&input.workout_type)
        .bind(input.duration_minutes)
        .bind(Json(&input.exercises))
        .fetch_one(pool)
        .await?;

        Ok(record)
    }

    /// List a user's workout templates, newest first
    pub async fn list_by_user(
        pool: &PgPool,
        user_id: Uuid,
    ) -> Result<Vec<WorkoutRecord>, sqlx::Error> {
        let records = sqlx::query_as::<_, WorkoutRecord>(
            r#"
            SELECT id, user_id, name, workout_type, duration_minutes, exercises,
                   created_at, updated_at
            FROM workouts
            WHERE user_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(pool)
        .await?;

        Ok(records)
    }

    /// Get a workout template by ID
    pub async fn get_by_id(
        pool: &PgPool,
        id: Uuid,
        user_id: Uuid,
    ) -> Result<Option<WorkoutRecord>, sqlx::Error> {
        let record = sqlx::query_as::<_, WorkoutRecord>(
            r#"
            SELECT id, user_id, name, workout_type, duration_minutes, exercises,
                   created_at, updated_at
            FROM workouts
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(id)
        .bind(user_id)
        .fetch_optional(pool)
        .await?;

        Ok(record)
    }

    /// Update a workout template
    pub async fn update(
        pool: &PgPool,
        id: Uuid,
        user_id: Uuid,
        updates: UpdateWorkout,
    ) -> Result<Option<WorkoutRecord>, sqlx::Error> {
        let record = sqlx::query_as::<_, WorkoutRecord>(
            r#"
            UPDATE workouts SET
                name = COALESCE($3, name),
                workout_type = COALESCE($4, workout_type),
                duration_minutes = COALESCE($5, duration_minutes),
                exercises = COALESCE($6, exercises),
                updated_at = NOW()
            WHERE id = $1 AND user_id = $2
            RETURNING id, user_id, name, workout_type, duration_minutes, exercises,
                      created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(user_id)
        .bind(&updates.name)
        .bind(&updates.workout_type)
        .bind(updates.duration_minutes)
        .bind(updates.exercises.map(Json))
        .fetch_optional(pool)
        .await?;

        Ok(record)
    }

    /// Delete a workout template.
    ///
    /// Plan entries referencing it keep their weak `source_workout_id`.
    pub async fn delete(pool: &PgPool, id: Uuid, user_id: Uuid) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(r#"DELETE FROM workouts WHERE id = $1 AND user_id = $2"#)
            .bind(id)
            .bind(user_id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
