//! User repository contract and SeaORM-backed store.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};

use super::entities::user::{ActiveModel, Column, Entity as UserEntity};
use crate::domain::User;
use crate::errors::{AppError, AppResult};

/// Persistence contract for users.
///
/// Users are immutable after creation; the contract deliberately
/// exposes no update or delete operations. Email is the unique
/// business key.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Persist a new user
    async fn create(&self, user: &User) -> AppResult<()>;

    /// Find a user by email
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;
}

/// SeaORM-backed user repository
pub struct UserStore {
    db: DatabaseConnection,
}

impl UserStore {
    /// Create a new user store
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn create(&self, user: &User) -> AppResult<()> {
        // Duplicate emails surface as a database error via the unique key
        ActiveModel::from(user)
            .insert(&self.db)
            .await
            .map_err(AppError::from)?;
        Ok(())
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let model = UserEntity::find()
            .filter(Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(model.map(User::from))
    }
}
