//! Product repository for database operations.

use sqlx::PgPool;

use crate::metrics::QueryTimer;

/// Repository for product rows.
#[derive(Clone)]
pub struct ProductRepository {
    pool: PgPool,
}

impl ProductRepository {
    /// Creates a new ProductRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a product. Fails if the id already exists (the source store's
    /// document `create` semantics, as opposed to the signup upsert).
    pub async fn create(
        &self,
        id: &str,
        name: &str,
        description: &str,
        price: f64,
    ) -> Result<(), sqlx::Error> {
        let timer = QueryTimer::new("create_product");
        sqlx::query(
            r#"
            INSERT INTO products (id, name, description, price)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(id)
        .bind(name)
        .bind(description)
        .bind(price)
        .execute(&self.pool)
        .await?;
        timer.record();
        Ok(())
    }
}
