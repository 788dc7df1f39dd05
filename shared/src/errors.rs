//! Error types shared across the OptiTrain services

use thiserror::Error;

/// Planner domain errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum PlannerError {
    /// Plan generation requires at least one saved workout template
    #[error("No workout templates available")]
    NoTemplatesAvailable,

    /// An add-entry call arrived without a day or workout selection
    #[error("Missing selection: {0}")]
    MissingSelection(String),

    /// Day index outside 0..=6
    #[error("Invalid day index: {0}")]
    InvalidDay(u8),

    /// Week identifier is not an ISO date
    #[error("Invalid week identifier: {0}")]
    InvalidWeekId(String),
}

/// Authentication error types
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token")]
    InvalidToken,

    #[error("Missing token")]
    MissingToken,
}
