//! Authentication module
//!
//! JWT-based sessions with argon2 password hashing. Every persisted
//! resource requires an authenticated user id; requests without a valid
//! token fail with 401.

mod jwt;
mod middleware;
mod password;

pub use jwt::{Claims, JwtService};
pub use middleware::AuthUser;
pub use password::PasswordService;
