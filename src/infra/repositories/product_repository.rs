//! Product repository contract and SeaORM-backed store.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryOrder};
use uuid::Uuid;

use super::entities::product::{ActiveModel, Column, Entity as ProductEntity};
use crate::config::SORT_DESC;
use crate::domain::Product;
use crate::errors::{AppError, AppResult};

/// Persistence contract for products.
///
/// `page`/`limit` of zero mean "no pagination"; positive values page
/// 1-based. The `sort` hint is interpreted by the implementation:
/// `"desc"` (case-insensitive) orders newest first, anything else
/// oldest first. Absence is reported as `Ok(None)`, lookup failures as
/// `Err`; callers map the two differently.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Persist a new product
    async fn create(&self, product: &Product) -> AppResult<()>;

    /// List products, optionally paginated and sorted
    async fn find_all(&self, page: u64, limit: u64, sort: &str) -> AppResult<Vec<Product>>;

    /// Find a product by id
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Product>>;

    /// Replace a stored product record
    async fn update(&self, product: &Product) -> AppResult<()>;

    /// Delete a product by id
    async fn delete(&self, id: Uuid) -> AppResult<()>;
}

/// SeaORM-backed product repository
pub struct ProductStore {
    db: DatabaseConnection,
}

impl ProductStore {
    /// Create a new product store
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn ordered(sort: &str) -> sea_orm::Select<ProductEntity> {
        if sort.eq_ignore_ascii_case(SORT_DESC) {
            ProductEntity::find().order_by_desc(Column::CreatedAt)
        } else {
            ProductEntity::find().order_by_asc(Column::CreatedAt)
        }
    }
}

#[async_trait]
impl ProductRepository for ProductStore {
    async fn create(&self, product: &Product) -> AppResult<()> {
        ActiveModel::from(product)
            .insert(&self.db)
            .await
            .map_err(AppError::from)?;
        Ok(())
    }

    async fn find_all(&self, page: u64, limit: u64, sort: &str) -> AppResult<Vec<Product>> {
        let query = Self::ordered(sort);

        let models = if page > 0 && limit > 0 {
            query
                .paginate(&self.db, limit)
                .fetch_page(page - 1)
                .await
                .map_err(AppError::from)?
        } else {
            query.all(&self.db).await.map_err(AppError::from)?
        };

        Ok(models.into_iter().map(Product::from).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Product>> {
        let model = ProductEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(model.map(Product::from))
    }

    async fn update(&self, product: &Product) -> AppResult<()> {
        ActiveModel::from(product)
            .update(&self.db)
            .await
            .map_err(AppError::from)?;
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = ProductEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound);
        }

        Ok(())
    }
}
