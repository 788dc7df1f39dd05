//! Application error handling
//!
//! Converts internal errors to HTTP responses. Persistence failures are
//! deliberately generic: the client sees a single "unable to save or load"
//! condition, is never retried automatically, and stays interactive.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use optitrain_shared::errors::PlannerError;
use optitrain_shared::types::{ErrorDetail, ErrorResponse};
use thiserror::Error;
use tracing::error;

/// API error type that can be converted to HTTP responses
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    /// Plan generation precondition: the user has no saved workouts
    #[error("No workout templates available")]
    NoTemplates,

    /// Add-to-day called without a day or workout selection
    #[error("Missing selection: {0}")]
    MissingSelection(String),

    /// The hosted text-generation backend is not configured
    #[error("Coach generation is disabled")]
    CoachDisabled,

    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),

    #[error("Store unavailable")]
    Database(#[from] sqlx::Error),
}

impl From<PlannerError> for ApiError {
    fn from(err: PlannerError) -> Self {
        match err {
            PlannerError::NoTemplatesAvailable => ApiError::NoTemplates,
            PlannerError::MissingSelection(what) => ApiError::MissingSelection(what),
            PlannerError::InvalidDay(day) => {
                ApiError::Validation(format!("Day index must be 0-6, got {}", day))
            }
            PlannerError::InvalidWeekId(week) => {
                ApiError::Validation(format!("Invalid week identifier: {}", week))
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            ApiError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", msg.clone()),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, "CONFLICT", msg.clone()),
            ApiError::NoTemplates => (
                StatusCode::CONFLICT,
                "NO_TEMPLATES",
                "Add workouts in the Workouts page before generating a plan.".to_string(),
            ),
            ApiError::MissingSelection(what) => (
                StatusCode::BAD_REQUEST,
                "MISSING_SELECTION",
                format!("Pick a {} to add.", what),
            ),
            ApiError::CoachDisabled => (
                StatusCode::SERVICE_UNAVAILABLE,
                "COACH_DISABLED",
                "AI coach is unavailable. Please try again in a moment.".to_string(),
            ),
            ApiError::Internal(err) => {
                error!("Internal error: {:?}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                )
            }
            ApiError::Database(err) => {
                error!("Database error: {:?}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "STORE_UNAVAILABLE",
                    "Unable to save or load data. Please try again.".to_string(),
                )
            }
        };

        let body = Json(ErrorResponse {
            error: ErrorDetail {
                code: code.to_string(),
                message,
                field: None,
            },
        });

        (status, body).into_response()
    }
}

/// Result type alias for API handlers
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_status() {
        let error = ApiError::Validation("Invalid input".to_string());
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_unauthorized_error_status() {
        let error = ApiError::Unauthorized("Invalid token".to_string());
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_no_templates_maps_to_conflict() {
        let error: ApiError = PlannerError::NoTemplatesAvailable.into();
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn test_missing_selection_maps_to_bad_request() {
        let error: ApiError = PlannerError::MissingSelection("day and workout".to_string()).into();
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_store_failure_surfaces_as_store_unavailable() {
        let error: ApiError = sqlx::Error::PoolTimedOut.into();
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let parsed: ErrorResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(parsed.error.code, "STORE_UNAVAILABLE");
        assert_eq!(
            parsed.error.message,
            "Unable to save or load data. Please try again."
        );
    }
}
