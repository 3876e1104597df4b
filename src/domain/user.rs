//! User domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::domain::Password;
use crate::errors::{AppError, AppResult};

/// User domain entity
///
/// Immutable after creation; only the salted hash of the password is
/// kept, never the plaintext.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a new user, hashing the password at construction time.
    ///
    /// # Errors
    /// Returns a validation error for an empty name or email, and an
    /// internal error if hashing fails.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: &str,
    ) -> AppResult<Self> {
        let name = name.into();
        let email = email.into();

        if name.is_empty() {
            return Err(AppError::validation("Name is required"));
        }
        if email.is_empty() {
            return Err(AppError::validation("Email is required"));
        }

        let password_hash = Password::new(password)?.into_string();

        Ok(Self {
            id: Uuid::new_v4(),
            name,
            email,
            password_hash,
            created_at: Utc::now(),
        })
    }

    /// Check a candidate password against the stored hash.
    pub fn validate_password(&self, candidate: &str) -> bool {
        Password::from_hash(self.password_hash.clone()).verify(candidate)
    }
}

/// User creation data transfer object
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateUserInput {
    /// User display name
    #[validate(length(min = 1, message = "Name is required"))]
    #[schema(example = "Ann")]
    pub name: String,
    /// User email address
    #[validate(email(message = "Invalid email format"))]
    #[schema(example = "a@x.com")]
    pub email: String,
    /// User password
    #[schema(example = "secret")]
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_hashes_password() {
        let user = User::new("Ann", "a@x.com", "secret").unwrap();

        assert_ne!(user.password_hash, "secret");
        assert!(user.validate_password("secret"));
        assert!(!user.validate_password("secretx"));
    }

    #[test]
    fn test_empty_name_is_rejected() {
        let result = User::new("", "a@x.com", "secret");
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[test]
    fn test_empty_email_is_rejected() {
        let result = User::new("Ann", "", "secret");
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[test]
    fn test_serialized_user_omits_hash() {
        let user = User::new("Ann", "a@x.com", "secret").unwrap();
        let json = serde_json::to_value(&user).unwrap();

        assert!(json.get("password_hash").is_none());
        assert_eq!(json["email"], "a@x.com");
    }
}
