//! Application services layer.
//!
//! Services orchestrate domain logic and infrastructure behind traits,
//! keeping handlers decoupled from concrete implementations.

mod auth_service;

pub use auth_service::{AuthResponse, AuthService, Authenticator, Claims};
