//! Application state - Dependency injection container.

use std::sync::Arc;

use crate::config::Config;
use crate::infra::{Database, ProductRepository, ProductStore, UserRepository, UserStore};
use crate::services::{AuthService, Authenticator};

/// Application state handed to every handler.
///
/// Holds only the repository contracts and the auth component; no
/// storage handles leak into the HTTP layer. Cloning is cheap.
#[derive(Clone)]
pub struct AppState {
    /// Product repository
    pub products: Arc<dyn ProductRepository>,
    /// User repository
    pub users: Arc<dyn UserRepository>,
    /// Authentication service
    pub auth: Arc<dyn AuthService>,
}

impl AppState {
    /// Create application state backed by the database.
    pub fn from_config(database: &Database, config: &Config) -> Self {
        let products = Arc::new(ProductStore::new(database.get_connection()));
        let users: Arc<dyn UserRepository> = Arc::new(UserStore::new(database.get_connection()));
        let auth = Arc::new(Authenticator::new(users.clone(), config.auth()));

        Self {
            products,
            users,
            auth,
        }
    }

    /// Create application state with manually injected dependencies.
    pub fn new(
        products: Arc<dyn ProductRepository>,
        users: Arc<dyn UserRepository>,
        auth: Arc<dyn AuthService>,
    ) -> Self {
        Self {
            products,
            users,
            auth,
        }
    }
}
