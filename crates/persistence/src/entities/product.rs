//! Product entity (database row mapping).

use domain::models::Product;
use sqlx::FromRow;

/// Database row mapping for the products table.
#[derive(Debug, Clone, FromRow)]
pub struct ProductEntity {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
}

impl From<ProductEntity> for Product {
    fn from(entity: ProductEntity) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
            price: entity.price,
        }
    }
}
