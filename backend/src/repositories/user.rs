//! User repository for account and profile rows

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

/// User record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct UserRecord {
    pub id: Uuid,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Profile record from database.
///
/// Fitness fields are stored as the raw text the settings page submits;
/// NULL means the user never filled the field in.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ProfileRecord {
    pub user_id: Uuid,
    pub name: String,
    pub location: Option<String>,
    pub goal: Option<String>,
    pub experience_level: Option<String>,
    pub workouts_per_week: Option<String>,
    pub weight: Option<String>,
    pub target_weight: Option<String>,
    pub height: Option<String>,
    pub updated_at: DateTime<Utc>,
}

/// Input for updating a profile; None leaves the column unchanged
#[derive(Debug, Clone, Default)]
pub struct UpdateProfile {
    pub name: Option<String>,
    pub location: Option<String>,
    pub goal: Option<String>,
    pub experience_level: Option<String>,
    pub workouts_per_week: Option<String>,
    pub weight: Option<String>,
    pub target_weight: Option<String>,
    pub height: Option<String>,
}

/// User repository for database operations
pub struct UserRepository;

impl UserRepository {
    /// Create a new user with an empty profile
    pub async fn create(
        pool: &PgPool,
        email: &str,
        password_hash: &str,
    ) -> Result<UserRecord, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let user = sqlx::query_as::<_, UserRecord>(
            r#"
            INSERT INTO users (email, password_hash)
            VALUES ($1, $2)
            RETURNING id, email, password_hash, created_at, updated_at
            "#,
        )
        .bind(email)
        .bind(password_hash)
        .fetch_one(&mut *tx)
        .await?;

        sqlx::query(
            r#"
            INSERT INTO user_profiles (user_id)
            VALUES ($1)
            "#,
        )
        .bind(user.id)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(user)
    }

    /// Find user by email
    pub async fn find_by_email(
        pool: &PgPool,
        email: &str,
    ) -> Result<Option<UserRecord>, sqlx::Error> {
        let user = sqlx::query_as::<_, UserRecord>(
            r#"
            SELECT id, email, password_hash, created_at, updated_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(pool)
        .await?;

        Ok(user)
    }

    /// Find user by ID
    pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<UserRecord>, sqlx::Error> {
        let user = sqlx::query_as::<_, UserRecord>(
            r#"
            SELECT id, email, password_hash, created_at, updated_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(user)
    }

    /// Check if an email is already registered
    pub async fn email_exists(pool: &PgPool, email: &str) -> Result<bool, sqlx::Error> {
        let row: (bool,) =
            sqlx::query_as(r#"SELECT EXISTS(SELECT 1 FROM users WHERE email = $1)"#)
                .bind(email)
                .fetch_one(pool)
                .await?;

        Ok(row.0)
    }

    /// Get a user's profile
    pub async fn get_profile(
        pool: &PgPool,
        user_id: Uuid,
    ) -> Result<Option<ProfileRecord>, sqlx::Error> {
        let profile = sqlx::query_as::<_, ProfileRecord>(
            r#"
            SELECT user_id, name, location, goal, experience_level,
                   workouts_per_week, weight, target_weight, height, updated_at
            FROM user_profiles
            WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(pool)
        .await?;

        Ok(profile)
    }

    /// Update a user's profile; omitted fields are left unchanged
    pub async fn update_profile(
        pool: &PgPool,
        user_id: Uuid,
        updates: UpdateProfile,
    ) -> Result<Option<ProfileRecord>, sqlx::Error> {
        let profile = sqlx::query_as::<_, ProfileRecord>(
            r#"
            UPDATE user_profiles SET
                name = COALESCE($2, name),
                location = COALESCE($3, location),
                goal = COALESCE($4, goal),
                experience_level = COALESCE($5, experience_level),
                workouts_per_week = COALESCE($6, workouts_per_week),
                weight = COALESCE($7, weight),
                target_weight = COALESCE($8, target_weight),
                height = COALESCE($9, height),
                updated_at = NOW()
            WHERE user_id = $1
            RETURNING user_id, name, location, goal, experience_level,
                      workouts_per_week, weight, target_weight, height, updated_at
            "#,
        )
        .bind(user_id)
        .bind(&updates.name)
        .bind(&updates.location)
        .bind(&updates.goal)
        .bind(&updates.experience_level)
        .bind(&updates.workouts_per_week)
        .bind(&updates.weight)
        .bind(&updates.target_weight)
        .bind(&updates.height)
        .fetch_optional(pool)
        .await?;

        Ok(profile)
    }
}
