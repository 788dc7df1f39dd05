//! Weekly planner routes
//!
//! The week path segment is an ISO date; any date inside a week addresses
//! that week's plan.

use crate::auth::AuthUser;
use crate::error::ApiResult;
use crate::services::PlannerService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    routing::{delete, get, post, put},
    Json, Router,
};
use optitrain_shared::types::{AddPlanEntryRequest, PlanResponse};

/// Create planner routes
pub fn planner_routes() -> Router<AppState> {
    Router::new()
        .route("/:week", get(get_plan))
        .route("/:week/generate", post(generate_plan))
        .route("/:week/entries", post(add_entry))
        .route("/:week/entries/:entry_id/complete", put(toggle_completion))
        .route("/:week/entries/:entry_id", delete(remove_entry))
}

/// GET /api/v1/planner/:week
async fn get_plan(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(week): Path<String>,
) -> ApiResult<Json<PlanResponse>> {
    let plan = PlannerService::get_plan(state.db(), auth.user_id, &week).await?;
    Ok(Json(plan))
}

/// POST /api/v1/planner/:week/generate
///
/// Replaces the stored plan for the week outright. Fails with a conflict
/// when the user has no saved workouts, leaving any stored plan untouched.
async fn generate_plan(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(week): Path<String>,
) -> ApiResult<Json<PlanResponse>> {
    let plan = PlannerService::generate(state.db(), auth.user_id, &week).await?;
    Ok(Json(plan))
}

/// POST /api/v1/planner/:week/entries
async fn add_entry(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(week): Path<String>,
    Json(req): Json<AddPlanEntryRequest>,
) -> ApiResult<Json<PlanResponse>> {
    let plan = PlannerService::add_entry(state.db(), auth.user_id, &week, req).await?;
    Ok(Json(plan))
}

/// PUT /api/v1/planner/:week/entries/:entry_id/complete
async fn toggle_completion(
    State(state): State<AppState>,
    auth: AuthUser,
    Path((week, entry_id)): Path<(String, String)>,
) -> ApiResult<Json<PlanResponse>> {
    let plan = PlannerService::toggle_completion(state.db(), auth.user_id, &week, &entry_id).await?;
    Ok(Json(plan))
}

/// DELETE /api/v1/planner/:week/entries/:entry_id
async fn remove_entry(
    State(state): State<AppState>,
    auth: AuthUser,
    Path((week, entry_id)): Path<(String, String)>,
) -> ApiResult<Json<PlanResponse>> {
    let plan = PlannerService::remove_entry(state.db(), auth.user_id, &week, &entry_id).await?;
    Ok(Json(plan))
}
