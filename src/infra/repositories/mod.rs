//! Repository layer - Data access abstraction
//!
//! Repositories provide an abstraction over data persistence; the rest
//! of the application depends only on the traits defined here.

pub(crate) mod entities;
mod memory;
mod product_repository;
mod user_repository;

pub use memory::{InMemoryProductRepository, InMemoryUserRepository};
pub use product_repository::{ProductRepository, ProductStore};
pub use user_repository::{UserRepository, UserStore};
