//! ETA entity (database row mapping).

use chrono::{DateTime, Utc};
use domain::models::EtaRecord;
use sqlx::FromRow;

/// Database row mapping for the etas table.
#[derive(Debug, Clone, FromRow)]
pub struct EtaEntity {
    pub bus_id: String,
    /// Minutes, stored as a two-decimal string.
    pub eta: String,
    /// Meters.
    pub distance: f64,
    pub updated_at: DateTime<Utc>,
}

impl From<EtaEntity> for EtaRecord {
    fn from(entity: EtaEntity) -> Self {
        Self {
            bus_id: entity.bus_id,
            eta: entity.eta,
            distance: entity.distance,
        }
    }
}
