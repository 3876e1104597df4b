//! In-memory repository implementations.
//!
//! Map-backed stores satisfying the repository contracts, used as test
//! doubles and for running the service without a database.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{ProductRepository, UserRepository};
use crate::config::SORT_DESC;
use crate::domain::{Product, User};
use crate::errors::{AppError, AppResult};

/// In-memory implementation of [`ProductRepository`]
#[derive(Debug, Default, Clone)]
pub struct InMemoryProductRepository {
    products: Arc<RwLock<HashMap<Uuid, Product>>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn create(&self, product: &Product) -> AppResult<()> {
        let mut products = self.products.write().await;
        products.insert(product.id, product.clone());

        tracing::debug!(product_id = %product.id, "Created product");
        Ok(())
    }

    async fn find_all(&self, page: u64, limit: u64, sort: &str) -> AppResult<Vec<Product>> {
        let products = self.products.read().await;

        let mut result: Vec<Product> = products.values().cloned().collect();
        result.sort_by(|a, b| {
            if sort.eq_ignore_ascii_case(SORT_DESC) {
                b.created_at.cmp(&a.created_at)
            } else {
                a.created_at.cmp(&b.created_at)
            }
        });

        // Zero page or limit means no pagination
        if page > 0 && limit > 0 {
            result = result
                .into_iter()
                .skip(((page - 1) * limit) as usize)
                .take(limit as usize)
                .collect();
        }

        Ok(result)
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Product>> {
        let products = self.products.read().await;
        Ok(products.get(&id).cloned())
    }

    async fn update(&self, product: &Product) -> AppResult<()> {
        let mut products = self.products.write().await;

        match products.get_mut(&product.id) {
            Some(existing) => {
                *existing = product.clone();
                Ok(())
            }
            None => Err(AppError::NotFound),
        }
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        let mut products = self.products.write().await;

        if products.remove(&id).is_some() {
            tracing::debug!(product_id = %id, "Deleted product");
            Ok(())
        } else {
            Err(AppError::NotFound)
        }
    }
}

/// In-memory implementation of [`UserRepository`]
#[derive(Debug, Default, Clone)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<HashMap<Uuid, User>>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: &User) -> AppResult<()> {
        let mut users = self.users.write().await;

        // Mirrors the database's unique key on email
        if users.values().any(|u| u.email == user.email) {
            return Err(AppError::internal(format!(
                "duplicate email: {}",
                user.email
            )));
        }

        users.insert(user.id, user.clone());

        tracing::debug!(user_id = %user.id, "Created user");
        Ok(())
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.values().find(|u| u.email == email).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_and_find_product() {
        let repo = InMemoryProductRepository::new();
        let product = Product::new("Pen", 1.5).unwrap();

        repo.create(&product).await.unwrap();

        let found = repo.find_by_id(product.id).await.unwrap();
        assert_eq!(found, Some(product));
    }

    #[tokio::test]
    async fn test_find_all_sort_and_pagination() {
        let repo = InMemoryProductRepository::new();
        for name in ["a", "b", "c"] {
            repo.create(&Product::new(name, 1.0).unwrap()).await.unwrap();
        }

        let asc = repo.find_all(0, 0, "").await.unwrap();
        assert_eq!(asc.len(), 3);
        assert_eq!(asc[0].name, "a");

        let desc = repo.find_all(0, 0, "desc").await.unwrap();
        assert_eq!(desc[0].name, "c");

        let page2 = repo.find_all(2, 1, "").await.unwrap();
        assert_eq!(page2.len(), 1);
        assert_eq!(page2[0].name, "b");
    }

    #[tokio::test]
    async fn test_update_missing_product_is_not_found() {
        let repo = InMemoryProductRepository::new();
        let product = Product::new("Pen", 1.5).unwrap();

        let result = repo.update(&product).await;
        assert!(matches!(result, Err(AppError::NotFound)));
    }

    #[tokio::test]
    async fn test_duplicate_email_is_rejected() {
        let repo = InMemoryUserRepository::new();
        let first = User::new("Ann", "a@x.com", "secret").unwrap();
        let second = User::new("Bea", "a@x.com", "other").unwrap();

        repo.create(&first).await.unwrap();

        let result = repo.create(&second).await;
        assert!(matches!(result, Err(AppError::Internal(_))));
    }

    #[tokio::test]
    async fn test_find_by_email_absent_is_none() {
        let repo = InMemoryUserRepository::new();
        let found = repo.find_by_email("missing@x.com").await.unwrap();
        assert!(found.is_none());
    }
}
