//! Data access layer
//!
//! Repositories own the SQL; services own the business rules. The weekly
//! plan is stored as a single document-style row per (user, week) so that
//! writes replace the whole week at document granularity.

pub mod planner;
pub mod push;
pub mod user;
pub mod workout;

pub use planner::PlannerRepository;
pub use push::PushRepository;
pub use user::{ProfileRecord, UpdateProfile, UserRecord, UserRepository};
pub use workout::{CreateWorkout, UpdateWorkout, WorkoutRecord, WorkoutRepository};
