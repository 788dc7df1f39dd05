//! Push notification routes
//!
//! Subscriptions are opaque browser push-manager objects; the server only
//! needs the endpoint URL inside them to key storage.

use crate::auth::AuthUser;
use crate::error::{ApiError, ApiResult};
use crate::repositories::PushRepository;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use optitrain_shared::types::{PushSubscribeRequest, PushUnsubscribeRequest};

/// Create notification routes
pub fn notification_routes() -> Router<AppState> {
    Router::new()
        .route("/subscribe", post(subscribe))
        .route("/unsubscribe", post(unsubscribe))
}

/// POST /api/v1/notifications/subscribe
async fn subscribe(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<PushSubscribeRequest>,
) -> ApiResult<StatusCode> {
    let endpoint = req
        .subscription
        .get("endpoint")
        .and_then(|v| v.as_str())
        .filter(|e| !e.is_empty())
        .ok_or_else(|| ApiError::Validation("Subscription is missing an endpoint".to_string()))?;

    PushRepository::upsert(state.db(), auth.user_id, endpoint, &req.subscription).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/notifications/unsubscribe
async fn unsubscribe(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<PushUnsubscribeRequest>,
) -> ApiResult<StatusCode> {
    // Removing an unknown endpoint is not an error
    PushRepository::delete(state.db(), auth.user_id, &req.endpoint).await?;
    Ok(StatusCode::NO_CONTENT)
}
