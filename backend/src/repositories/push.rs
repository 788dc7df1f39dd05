//! Push subscription repository
//!
//! Subscriptions are opaque JSON blobs from the browser's push manager,
//! keyed by a URL-safe encoding of their endpoint so re-registering the
//! same endpoint overwrites rather than duplicates.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use sqlx::PgPool;
use uuid::Uuid;

/// Push subscription repository
pub struct PushRepository;

impl PushRepository {
    /// Stable storage key for a subscription endpoint URL
    pub fn endpoint_key(endpoint: &str) -> String {
        URL_SAFE_NO_PAD.encode(endpoint.as_bytes())
    }

    /// Store or refresh a subscription
    pub async fn upsert(
        pool: &PgPool,
        user_id: Uuid,
        endpoint: &str,
        subscription: &serde_json::Value,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            INSERT INTO push_subscriptions (user_id, endpoint_key, subscription)
            VALUES ($1, $2, $3)
            ON CONFLICT (user_id, endpoint_key)
            DO UPDATE SET subscription = EXCLUDED.subscription, updated_at = NOW()
            "#,
        )
        .bind(user_id)
        .bind(Self::endpoint_key(endpoint))
        .bind(subscription)
        .execute(pool)
        .await?;

        Ok(())
    }

    /// Remove a subscription by its endpoint URL
    pub async fn delete(pool: &PgPool, user_id: Uuid, endpoint: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            r#"DELETE FROM push_subscriptions WHERE user_id = $1 AND endpoint_key = $2"#,
        )
        .bind(user_id)
        .bind(Self::endpoint_key(endpoint))
        .execute(pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
