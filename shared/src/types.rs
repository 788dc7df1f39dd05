//! API request and response types

use crate::models::{ChatMessage, ExerciseSpec, PlanEntry, WorkoutType};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// API error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

/// Error detail
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

// ============================================================================
// Authentication
// ============================================================================

/// Authentication tokens response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthTokens {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub expires_in: i64,
}

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email)]
    pub email: String,
    pub password: String,
}

/// Registration request
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 8, max = 128))]
    pub password: String,
}

/// Token refresh request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshTokenRequest {
    pub refresh_token: String,
}

/// Authenticated account summary
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountResponse {
    pub id: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Profile / settings
// ============================================================================

/// Profile response, covering the settings page's fitness block
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileResponse {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goal: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experience_level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workouts_per_week: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_weight: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<String>,
}

/// Profile update request; omitted fields are left unchanged
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateProfileRequest {
    pub name: Option<String>,
    pub location: Option<String>,
    pub goal: Option<String>,
    pub experience_level: Option<String>,
    pub workouts_per_week: Option<String>,
    pub weight: Option<String>,
    pub target_weight: Option<String>,
    pub height: Option<String>,
}

// ============================================================================
// Workout templates
// ============================================================================

/// Create a workout template
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateWorkoutRequest {
    pub name: String,
    pub workout_type: WorkoutType,
    #[serde(default)]
    pub duration_minutes: i32,
    pub exercises: Vec<ExerciseSpec>,
}

/// Update a workout template; omitted fields are left unchanged
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateWorkoutRequest {
    pub name: Option<String>,
    pub workout_type: Option<WorkoutType>,
    pub duration_minutes: Option<i32>,
    pub exercises: Option<Vec<ExerciseSpec>>,
}

/// Workout template response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutResponse {
    pub id: String,
    pub name: String,
    pub workout_type: WorkoutType,
    pub duration_minutes: i32,
    pub exercises: Vec<ExerciseSpec>,
    pub created_at: DateTime<Utc>,
}

/// Workout template list response, ordered by creation time descending
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutsListResponse {
    pub workouts: Vec<WorkoutResponse>,
}

// ============================================================================
// Weekly planner
// ============================================================================

/// One week's plan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanResponse {
    /// ISO date of the week's Sunday
    pub week_id: String,
    pub entries: Vec<PlanEntry>,
}

/// Add a saved workout to a specific day.
///
/// Both fields are required; the server rejects the call with a
/// missing-selection error when either is absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AddPlanEntryRequest {
    pub day: Option<u8>,
    pub workout_id: Option<String>,
}

// ============================================================================
// Coach
// ============================================================================

/// Rule-based coach request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

/// Coach reply
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    pub reply: String,
}

/// Hosted-model generation request: the client-held conversation history
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateRequest {
    pub messages: Vec<ChatMessage>,
}

/// Hosted-model generation response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateResponse {
    pub content: String,
}

// ============================================================================
// Push notifications
// ============================================================================

/// Push subscription registration; the subscription object is opaque and
/// forwarded to the relay as-is
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PushSubscribeRequest {
    pub subscription: serde_json::Value,
}

/// Push subscription removal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PushUnsubscribeRequest {
    pub endpoint: String,
}
