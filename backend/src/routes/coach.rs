//! Coach routes
//!
//! `/chat` is the rule-based responder and always works. `/generate` talks
//! to the hosted model and returns 503 when the feature is disabled.

use crate::auth::AuthUser;
use crate::error::{ApiError, ApiResult};
use crate::repositories::UserRepository;
use crate::services::{CoachService, ProfileService};
use crate::state::AppState;
use axum::{extract::State, routing::post, Json, Router};
use optitrain_shared::types::{ChatRequest, ChatResponse, GenerateRequest, GenerateResponse};

/// Create coach routes
pub fn coach_routes() -> Router<AppState> {
    Router::new()
        .route("/chat", post(chat))
        .route("/generate", post(generate))
}

/// POST /api/v1/coach/chat
async fn chat(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<ChatRequest>,
) -> ApiResult<Json<ChatResponse>> {
    let reply = CoachService::respond(state.db(), auth.user_id, &req.message).await?;
    Ok(Json(ChatResponse { reply }))
}

/// POST /api/v1/coach/generate
async fn generate(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<GenerateRequest>,
) -> ApiResult<Json<GenerateResponse>> {
    let ai = state.ai().ok_or(ApiError::CoachDisabled)?;

    let profile = UserRepository::get_profile(state.db(), auth.user_id)
        .await?
        .map(ProfileService::snapshot)
        .unwrap_or_default();

    let content = ai.generate(&req.messages, &profile).await;
    Ok(Json(GenerateResponse { content }))
}
