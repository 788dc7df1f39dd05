//! Business logic services

pub mod ai;
pub mod coach;
pub mod planner;
pub mod profile;
pub mod user;
pub mod workout;

pub use ai::AiClient;
pub use coach::CoachService;
pub use planner::PlannerService;
pub use profile::ProfileService;
pub use user::UserService;
pub use workout::WorkoutService;
