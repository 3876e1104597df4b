//! Infrastructure layer - External systems integration
//!
//! Handles persistence concerns: the database connection and the
//! repository implementations behind the domain-facing contracts.

pub mod db;
pub mod repositories;

pub use db::Database;
pub use repositories::{
    InMemoryProductRepository, InMemoryUserRepository, ProductRepository, ProductStore,
    UserRepository, UserStore,
};
