//! User registration and session handlers.

use axum::{extract::State, http::StatusCode, response::Json, routing::post, Router};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::domain::{CreateUserInput, User};
use crate::errors::AppResult;
use crate::services::AuthResponse;

/// Login request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginCredentialsInput {
    /// User email address
    #[schema(example = "a@x.com")]
    pub email: String,
    /// User password
    #[schema(example = "secret")]
    pub password: String,
}

/// Create user and session routes (public)
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", post(create_user))
        .route("/sessions", post(create_session))
}

/// Register a new user
#[utoipa::path(
    post,
    path = "/users",
    tag = "Users",
    request_body = CreateUserInput,
    responses(
        (status = 201, description = "User registered"),
        (status = 400, description = "Malformed body or validation error"),
        (status = 500, description = "Storage error, e.g. duplicate email")
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateUserInput>,
) -> AppResult<StatusCode> {
    let user = User::new(payload.name, payload.email, &payload.password)?;
    state.users.create(&user).await?;

    Ok(StatusCode::CREATED)
}

/// Create a session, returning a signed access token
#[utoipa::path(
    post,
    path = "/sessions",
    tag = "Users",
    request_body = LoginCredentialsInput,
    responses(
        (status = 200, description = "Session created", body = AuthResponse),
        (status = 400, description = "Malformed body"),
        (status = 401, description = "Wrong password"),
        (status = 404, description = "Unknown email")
    )
)]
pub async fn create_session(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<LoginCredentialsInput>,
) -> AppResult<Json<AuthResponse>> {
    let token = state
        .auth
        .create_session(payload.email, payload.password)
        .await?;

    Ok(Json(token))
}
