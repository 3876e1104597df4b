//! Authentication service - credential verification and token issuance.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::config::AuthConfig;
use crate::errors::{AppError, AppResult};
use crate::infra::UserRepository;

/// JWT claims payload
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid,
    pub iat: i64,
    pub exp: i64,
}

/// Session response returned after successful authentication
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AuthResponse {
    /// JWT access token
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    pub access_token: String,
}

/// Authentication service trait for dependency injection.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Verify credentials and issue a session token
    async fn create_session(&self, email: String, password: String) -> AppResult<AuthResponse>;

    /// Verify a session token and extract its claims
    fn verify_token(&self, token: &str) -> AppResult<Claims>;
}

/// Concrete implementation of AuthService.
///
/// Holds the user repository and the signing configuration injected at
/// startup; no ambient signing state.
pub struct Authenticator {
    users: Arc<dyn UserRepository>,
    config: AuthConfig,
}

impl Authenticator {
    /// Create a new auth service instance
    pub fn new(users: Arc<dyn UserRepository>, config: AuthConfig) -> Self {
        Self { users, config }
    }
}

#[async_trait]
impl AuthService for Authenticator {
    async fn create_session(&self, email: String, password: String) -> AppResult<AuthResponse> {
        // Absence and lookup failure are both the "unknown account"
        // class, distinct from a bad password.
        let user = match self.users.find_by_email(&email).await {
            Ok(Some(user)) => user,
            Ok(None) => return Err(AppError::NotFound),
            Err(e) => {
                tracing::error!("User lookup failed: {}", e);
                return Err(AppError::NotFound);
            }
        };

        if !user.validate_password(&password) {
            return Err(AppError::InvalidCredentials);
        }

        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: user.id,
            iat: now,
            exp: now + self.config.expiration_seconds,
        };

        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.config.secret_bytes()),
        )
        .map_err(|e| AppError::internal(format!("Token signing failed: {}", e)))?;

        Ok(AuthResponse {
            access_token: token,
        })
    }

    fn verify_token(&self, token: &str) -> AppResult<Claims> {
        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.config.secret_bytes()),
            &Validation::default(),
        )?;

        Ok(token_data.claims)
    }
}
