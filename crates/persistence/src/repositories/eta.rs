//! ETA repository for database operations.

use sqlx::PgPool;

use crate::entities::EtaEntity;
use crate::metrics::QueryTimer;

/// Repository for per-bus travel estimates.
#[derive(Clone)]
pub struct EtaRepository {
    pool: PgPool,
}

impl EtaRepository {
    /// Creates a new EtaRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Store the estimate for a bus, replacing any previous record wholesale.
    pub async fn upsert(&self, bus_id: &str, eta: &str, distance: f64) -> Result<(), sqlx::Error> {
        let timer = QueryTimer::new("upsert_eta");
        sqlx::query(
            r#"
            INSERT INTO etas (bus_id, eta, distance)
            VALUES ($1, $2, $3)
            ON CONFLICT (bus_id) DO UPDATE
            SET eta = EXCLUDED.eta,
                distance = EXCLUDED.distance,
                updated_at = NOW()
            "#,
        )
        .bind(bus_id)
        .bind(eta)
        .bind(distance)
        .execute(&self.pool)
        .await?;
        timer.record();
        Ok(())
    }

    /// Find the stored estimate for a bus.
    pub async fn find_by_id(&self, bus_id: &str) -> Result<Option<EtaEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_eta_by_id");
        let result = sqlx::query_as::<_, EtaEntity>(
            r#"
            SELECT bus_id, eta, distance, updated_at
            FROM etas
            WHERE bus_id = $1
            "#,
        )
        .bind(bus_id)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }
}
