//! Workout template routes

use crate::auth::AuthUser;
use crate::error::{ApiError, ApiResult};
use crate::services::WorkoutService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use optitrain_shared::types::{
    CreateWorkoutRequest, UpdateWorkoutRequest, WorkoutResponse, WorkoutsListResponse,
};
use uuid::Uuid;

/// Create workout routes
pub fn workout_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_workout).get(list_workouts))
        .route(
            "/:id",
            get(get_workout).put(update_workout).delete(delete_workout),
        )
}

fn parse_id(id: &str) -> ApiResult<Uuid> {
    Uuid::parse_str(id).map_err(|_| ApiError::Validation("Invalid workout ID".to_string()))
}

/// POST /api/v1/workouts
async fn create_workout(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreateWorkoutRequest>,
) -> ApiResult<(StatusCode, Json<WorkoutResponse>)> {
    let workout = WorkoutService::create(state.db(), auth.user_id, req).await?;
    Ok((StatusCode::CREATED, Json(workout)))
}

/// GET /api/v1/workouts
async fn list_workouts(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<WorkoutsListResponse>> {
    let workouts = WorkoutService::list(state.db(), auth.user_id).await?;
    Ok(Json(workouts))
}

/// GET /api/v1/workouts/:id
async fn get_workout(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> ApiResult<Json<WorkoutResponse>> {
    let workout = WorkoutService::get(state.db(), auth.user_id, parse_id(&id)?).await?;
    Ok(Json(workout))
}

/// PUT /api/v1/workouts/:id
async fn update_workout(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
    Json(req): Json<UpdateWorkoutRequest>,
) -> ApiResult<Json<WorkoutResponse>> {
    let workout = WorkoutService::update(state.db(), auth.user_id, parse_id(&id)?, req).await?;
    Ok(Json(workout))
}

/// DELETE /api/v1/workouts/:id
async fn delete_workout(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    WorkoutService::delete(state.db(), auth.user_id, parse_id(&id)?).await?;
    Ok(StatusCode::NO_CONTENT)
}
