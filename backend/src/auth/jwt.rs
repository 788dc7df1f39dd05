//! JWT token generation and validation
//!
//! Keys are derived once at startup and shared through `AppState`; token
//! operations never re-derive them per request.

use anyhow::Result;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

/// JWT claims
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Token type: "access" or "refresh"
    pub token_type: String,
}

/// JWT service with pre-computed keys
#[derive(Clone)]
pub struct JwtService {
    encoding: Arc<EncodingKey>,
    decoding: Arc<DecodingKey>,
    access_expiry_secs: i64,
    refresh_expiry_secs: i64,
}

impl JwtService {
    /// Create a new JWT service. Call once at startup.
    pub fn new(secret: &str, access_expiry_secs: i64, refresh_expiry_secs: i64) -> Self {
        Self {
            encoding: Arc::new(EncodingKey::from_secret(secret.as_bytes())),
            decoding: Arc::new(DecodingKey::from_secret(secret.as_bytes())),
            access_expiry_secs,
            refresh_expiry_secs,
        }
    }

    pub fn access_token_expiry_secs(&self) -> i64 {
        self.access_expiry_secs
    }

    /// Generate an access token for a user
    pub fn generate_access_token(&self, user_id: Uuid) -> Result<String> {
        self.generate_token(user_id, "access", self.access_expiry_secs)
    }

    /// Generate a refresh token for a user
    pub fn generate_refresh_token(&self, user_id: Uuid) -> Result<String> {
        self.generate_token(user_id, "refresh", self.refresh_expiry_secs)
    }

    fn generate_token(&self, user_id: Uuid, token_type: &str, expiry_secs: i64) -> Result<String> {
        let now = Utc::now();
        let claims = Claims {
            sub: user_id.to_string(),
            exp: (now + Duration::seconds(expiry_secs)).timestamp(),
            iat: now.timestamp(),
            token_type: token_type.to_string(),
        };

        encode(&Header::default(), &claims, &self.encoding)
            .map_err(|e| anyhow::anyhow!("Failed to generate {} token: {}", token_type, e))
    }

    /// Validate an access token and return its claims
    pub fn validate_access_token(&self, token: &str) -> Result<Claims> {
        self.validate_token(token, "access")
    }

    /// Validate a refresh token and return its claims
    pub fn validate_refresh_token(&self, token: &str) -> Result<Claims> {
        self.validate_token(token, "refresh")
    }

    fn validate_token(&self, token: &str, expected_type: &str) -> Result<Claims> {
        let data = decode::<Claims>(token, &self.decoding, &Validation::default())
            .map_err(|e| anyhow::anyhow!("Token validation failed: {}", e))?;

        if data.claims.token_type != expected_type {
            anyhow::bail!(
                "Wrong token type: expected {}, got {}",
                expected_type,
                data.claims.token_type
            );
        }

        Ok(data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> JwtService {
        JwtService::new("test-secret-at-least-32-characters!!", 3600, 604800)
    }

    #[test]
    fn test_access_token_round_trip() {
        let jwt = service();
        let user_id = Uuid::new_v4();
        let token = jwt.generate_access_token(user_id).unwrap();
        let claims = jwt.validate_access_token(&token).unwrap();
        assert_eq!(claims.sub, user_id.to_string());
        assert_eq!(claims.token_type, "access");
    }

    #[test]
    fn test_refresh_token_rejected_as_access() {
        let jwt = service();
        let token = jwt.generate_refresh_token(Uuid::new_v4()).unwrap();
        assert!(jwt.validate_access_token(&token).is_err());
    }

    #[test]
    fn test_garbage_token_rejected() {
        let jwt = service();
        assert!(jwt.validate_access_token("not.a.token").is_err());
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let jwt = service();
        let other = JwtService::new("another-secret-also-32-characters!!!", 3600, 604800);
        let token = jwt.generate_access_token(Uuid::new_v4()).unwrap();
        assert!(other.validate_access_token(&token).is_err());
    }
}
