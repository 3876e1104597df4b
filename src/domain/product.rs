//! Product domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::errors::{AppError, AppResult};

/// Product domain entity
///
/// The id is generated at construction and never changes; name and price
/// can only be replaced together through [`Product::replace`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub price: f64,
    pub created_at: DateTime<Utc>,
}

impl Product {
    /// Create a new product with a fresh id.
    ///
    /// # Errors
    /// Returns a validation error if the name is empty or the price is
    /// not strictly positive.
    pub fn new(name: impl Into<String>, price: f64) -> AppResult<Self> {
        let name = name.into();
        Self::validate(&name, price)?;

        Ok(Self {
            id: Uuid::new_v4(),
            name,
            price,
            created_at: Utc::now(),
        })
    }

    /// Replace name and price as a full-record update.
    ///
    /// The id and creation timestamp are immutable.
    pub fn replace(&mut self, name: impl Into<String>, price: f64) -> AppResult<()> {
        let name = name.into();
        Self::validate(&name, price)?;

        self.name = name;
        self.price = price;
        Ok(())
    }

    // Price policy: strictly positive. Zero-priced products are rejected.
    fn validate(name: &str, price: f64) -> AppResult<()> {
        if name.is_empty() {
            return Err(AppError::validation("Name is required"));
        }
        if price <= 0.0 {
            return Err(AppError::validation("Price must be greater than zero"));
        }
        Ok(())
    }
}

/// Product creation/update data transfer object
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateProductInput {
    /// Product name
    #[validate(length(min = 1, message = "Name is required"))]
    #[schema(example = "Pen")]
    pub name: String,
    /// Product price, must be greater than zero
    #[schema(example = 1.5)]
    pub price: f64,
}

/// Product response (safe to return to client)
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ProductResponse {
    /// Unique product identifier
    #[schema(example = "550e8400-e29b-41d4-a716-446655440000")]
    pub id: Uuid,
    /// Product name
    #[schema(example = "Pen")]
    pub name: String,
    /// Product price
    #[schema(example = 1.5)]
    pub price: f64,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            price: product.price,
            created_at: product.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_product() {
        let product = Product::new("Pen", 1.5).unwrap();

        assert_eq!(product.name, "Pen");
        assert_eq!(product.price, 1.5);
        assert!(!product.id.is_nil());
    }

    #[test]
    fn test_ids_are_unique_across_calls() {
        let first = Product::new("Pen", 1.5).unwrap();
        let second = Product::new("Pen", 1.5).unwrap();

        assert_ne!(first.id, second.id);
    }

    #[test]
    fn test_empty_name_is_rejected() {
        let result = Product::new("", 1.5);
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[test]
    fn test_non_positive_price_is_rejected() {
        assert!(matches!(Product::new("Pen", 0.0), Err(AppError::Validation(_))));
        assert!(matches!(Product::new("Pen", -1.0), Err(AppError::Validation(_))));
    }

    #[test]
    fn test_replace_keeps_id() {
        let mut product = Product::new("Pen", 1.5).unwrap();
        let id = product.id;

        product.replace("Pencil", 0.5).unwrap();

        assert_eq!(product.id, id);
        assert_eq!(product.name, "Pencil");
        assert_eq!(product.price, 0.5);
    }

    #[test]
    fn test_replace_validates() {
        let mut product = Product::new("Pen", 1.5).unwrap();

        assert!(product.replace("", 1.0).is_err());
        assert!(product.replace("Pen", 0.0).is_err());
        // Failed replace leaves the record untouched
        assert_eq!(product.name, "Pen");
        assert_eq!(product.price, 1.5);
    }
}
