//! Authentication service unit tests.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use jsonwebtoken::{decode, DecodingKey, Validation};
use mockall::mock;

use product_api::config::AuthConfig;
use product_api::domain::User;
use product_api::errors::{AppError, AppResult};
use product_api::infra::{InMemoryUserRepository, UserRepository};
use product_api::services::{AuthService, Authenticator, Claims};

const TEST_SECRET: &str = "test-secret-key-for-testing-only-32chars";
const TOKEN_LIFETIME_SECONDS: i64 = 300;

mock! {
    Users {}

    #[async_trait]
    impl UserRepository for Users {
        async fn create(&self, user: &User) -> AppResult<()>;
        async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;
    }
}

/// Authenticator over an in-memory repository seeded with one user.
async fn authenticator_with_user(email: &str, password: &str) -> Authenticator {
    let users = Arc::new(InMemoryUserRepository::new());
    let user = User::new("Ann", email, password).unwrap();
    users.create(&user).await.unwrap();

    Authenticator::new(users, AuthConfig::new(TEST_SECRET, TOKEN_LIFETIME_SECONDS))
}

#[tokio::test]
async fn test_create_session_success() {
    let auth = authenticator_with_user("a@x.com", "secret").await;

    let response = auth
        .create_session("a@x.com".to_string(), "secret".to_string())
        .await
        .unwrap();

    assert!(!response.access_token.is_empty());
}

#[tokio::test]
async fn test_token_expiry_is_issuance_plus_lifetime() {
    let auth = authenticator_with_user("a@x.com", "secret").await;
    let issued_at = Utc::now().timestamp();

    let response = auth
        .create_session("a@x.com".to_string(), "secret".to_string())
        .await
        .unwrap();

    let claims = decode::<Claims>(
        &response.access_token,
        &DecodingKey::from_secret(TEST_SECRET.as_bytes()),
        &Validation::default(),
    )
    .unwrap()
    .claims;

    assert_eq!(claims.exp - claims.iat, TOKEN_LIFETIME_SECONDS);
    // Allow a few seconds of clock skew
    assert!((claims.iat - issued_at).abs() <= 5);
}

#[tokio::test]
async fn test_unknown_email_is_not_found() {
    let auth = authenticator_with_user("a@x.com", "secret").await;

    let result = auth
        .create_session("nobody@x.com".to_string(), "secret".to_string())
        .await;

    assert!(matches!(result, Err(AppError::NotFound)));
}

#[tokio::test]
async fn test_wrong_password_is_invalid_credentials() {
    let auth = authenticator_with_user("a@x.com", "secret").await;

    let result = auth
        .create_session("a@x.com".to_string(), "wrong".to_string())
        .await;

    // Distinct from the unknown-email outcome
    assert!(matches!(result, Err(AppError::InvalidCredentials)));
}

#[tokio::test]
async fn test_lookup_failure_maps_to_not_found() {
    let mut users = MockUsers::new();
    users
        .expect_find_by_email()
        .returning(|_| Err(AppError::internal("connection lost")));

    let auth = Authenticator::new(
        Arc::new(users),
        AuthConfig::new(TEST_SECRET, TOKEN_LIFETIME_SECONDS),
    );

    let result = auth
        .create_session("a@x.com".to_string(), "secret".to_string())
        .await;

    assert!(matches!(result, Err(AppError::NotFound)));
}

#[tokio::test]
async fn test_verify_token_roundtrip() {
    let auth = authenticator_with_user("a@x.com", "secret").await;

    let response = auth
        .create_session("a@x.com".to_string(), "secret".to_string())
        .await
        .unwrap();

    let claims = auth.verify_token(&response.access_token).unwrap();
    assert!(claims.exp > claims.iat);
}

#[tokio::test]
async fn test_verify_token_rejects_garbage() {
    let auth = authenticator_with_user("a@x.com", "secret").await;

    let result = auth.verify_token("not-a-token");
    assert!(matches!(result, Err(AppError::Jwt(_))));
}

#[tokio::test]
async fn test_verify_token_rejects_expired() {
    let users = Arc::new(InMemoryUserRepository::new());
    let user = User::new("Ann", "a@x.com", "secret").unwrap();
    users.create(&user).await.unwrap();

    // Negative lifetime issues tokens that are already expired
    let auth = Authenticator::new(users, AuthConfig::new(TEST_SECRET, -300));

    let response = auth
        .create_session("a@x.com".to_string(), "secret".to_string())
        .await
        .unwrap();

    let result = auth.verify_token(&response.access_token);
    assert!(matches!(result, Err(AppError::Jwt(_))));
}
