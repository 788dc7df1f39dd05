//! Weekly plan repository
//!
//! Each (user, week) pair maps to a single row holding the whole week's
//! entries as JSONB. Writes replace the document unconditionally; there is
//! no concurrency token, so concurrent writers are last-write-wins.

use chrono::NaiveDate;
use optitrain_shared::models::PlanEntry;
use sqlx::types::Json;
use sqlx::PgPool;
use uuid::Uuid;

/// Weekly plan repository
pub struct PlannerRepository;

impl PlannerRepository {
    /// Load the plan entries for one week, if a plan document exists
    pub async fn get(
        pool: &PgPool,
        user_id: Uuid,
        week_start: NaiveDate,
    ) -> Result<Option<Vec<PlanEntry>>, sqlx::Error> {
        let row: Option<(Json<Vec<PlanEntry>>,)> = sqlx::query_as(
            r#"
            SELECT items
            FROM weekly_plans
            WHERE user_id = $1 AND week_start = $2
            "#,
        )
        .bind(user_id)
        .bind(week_start)
        .fetch_optional(pool)
        .await?;

        Ok(row.map(|(items,)| items.0))
    }

    /// Write the full plan for one week, replacing whatever was there
    pub async fn put(
        pool: &PgPool,
        user_id: Uuid,
        week_start: NaiveDate,
        entries: &[PlanEntry],
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            INSERT INTO weekly_plans (user_id, week_start, items)
            VALUES ($1, $2, $3)
            ON CONFLICT (user_id, week_start)
            DO UPDATE SET items = EXCLUDED.items, updated_at = NOW()
            "#,
        )
        .bind(user_id)
        .bind(week_start)
        .bind(Json(entries))
        .execute(pool)
        .await?;

        Ok(())
    }
}
