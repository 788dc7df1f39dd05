//! Shared application state

use crate::auth::JwtService;
use crate::config::AppConfig;
use crate::services::AiClient;
use sqlx::PgPool;
use std::sync::Arc;

/// State shared across all request handlers.
///
/// Cheap to clone: the pool is a handle, the JWT keys are Arc'd, and the
/// hosted-model client is only built when the feature is enabled.
#[derive(Clone)]
pub struct AppState {
    db: PgPool,
    config: Arc<AppConfig>,
    jwt: JwtService,
    ai: Option<AiClient>,
}

impl AppState {
    pub fn new(db: PgPool, config: AppConfig) -> Self {
        let jwt = JwtService::new(
            &config.jwt.secret,
            config.jwt.access_token_expiry_secs,
            config.jwt.refresh_token_expiry_secs,
        );
        let ai = config.ai.enabled.then(|| AiClient::new(&config.ai));

        Self {
            db,
            config: Arc::new(config),
            jwt,
            ai,
        }
    }

    pub fn db(&self) -> &PgPool {
        &self.db
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn jwt(&self) -> &JwtService {
        &self.jwt
    }

    /// None when the hosted coach is disabled
    pub fn ai(&self) -> Option<&AiClient> {
        self.ai.as_ref()
    }
}
