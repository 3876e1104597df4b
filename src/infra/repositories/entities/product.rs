//! SeaORM entity for the products table.

use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue::Set;

use crate::domain::Product;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub price: f64,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Product {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            price: model.price,
            created_at: model.created_at,
        }
    }
}

impl From<&Product> for ActiveModel {
    fn from(product: &Product) -> Self {
        Self {
            id: Set(product.id),
            name: Set(product.name.clone()),
            price: Set(product.price),
            created_at: Set(product.created_at),
        }
    }
}
