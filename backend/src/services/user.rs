//! Account service: registration, login, token refresh

use crate::auth::{JwtService, PasswordService};
use crate::error::{ApiError, ApiResult};
use crate::repositories::UserRepository;
use optitrain_shared::types::{AccountResponse, AuthTokens, LoginRequest, RegisterRequest};
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

pub struct UserService;

impl UserService {
    pub async fn register(
        pool: &PgPool,
        jwt: &JwtService,
        request: RegisterRequest,
    ) -> ApiResult<AuthTokens> {
        request
            .validate()
            .map_err(|e| ApiError::Validation(e.to_string()))?;

        let email = request.email.trim().to_lowercase();

        if UserRepository::email_exists(pool, &email).await? {
            return Err(ApiError::Conflict("Email is already registered".to_string()));
        }

        let password_hash = PasswordService::hash_async(request.password).await?;
        let user = UserRepository::create(pool, &email, &password_hash).await?;

        Self::issue_tokens(jwt, user.id)
    }

    pub async fn login(
        pool: &PgPool,
        jwt: &JwtService,
        request: LoginRequest,
    ) -> ApiResult<AuthTokens> {
        let email = request.email.trim().to_lowercase();

        // Same error for unknown email and wrong password
        let user = UserRepository::find_by_email(pool, &email)
            .await?
            .ok_or_else(|| ApiError::Unauthorized("Invalid email or password".to_string()))?;

        let valid = PasswordService::verify_async(request.password, user.password_hash).await?;
        if !valid {
            return Err(ApiError::Unauthorized("Invalid email or password".to_string()));
        }

        Self::issue_tokens(jwt, user.id)
    }

    pub async fn refresh(
        pool: &PgPool,
        jwt: &JwtService,
        refresh_token: &str,
    ) -> ApiResult<AuthTokens> {
        let claims = jwt
            .validate_refresh_token(refresh_token)
            .map_err(|_| ApiError::Unauthorized("Invalid refresh token".to_string()))?;

        let user_id = Uuid::parse_str(&claims.sub)
            .map_err(|_| ApiError::Unauthorized("Invalid refresh token".to_string()))?;

        // The account may have been removed since the token was issued
        UserRepository::find_by_id(pool, user_id)
            .await?
            .ok_or_else(|| ApiError::Unauthorized("Invalid refresh token".to_string()))?;

        Self::issue_tokens(jwt, user_id)
    }

    pub async fn get_account(pool: &PgPool, user_id: Uuid) -> ApiResult<AccountResponse> {
        let user = UserRepository::find_by_id(pool, user_id)
            .await?
            .ok_or_else(|| ApiError::NotFound("Account not found".to_string()))?;

        Ok(AccountResponse {
            id: user.id.to_string(),
            email: user.email,
            created_at: user.created_at,
        })
    }

    fn issue_tokens(jwt: &JwtService, user_id: Uuid) -> ApiResult<AuthTokens> {
        let access_token = jwt.generate_access_token(user_id)?;
        let refresh_token = jwt.generate_refresh_token(user_id)?;

        Ok(AuthTokens {
            access_token,
            refresh_token,
            token_type: "Bearer".to_string(),
            expires_in: jwt.access_token_expiry_secs(),
        })
    }
}
