//! Bus group entity (database row mapping).

use chrono::{DateTime, Utc};
use domain::models::BusGroup;
use sqlx::FromRow;

/// Database row mapping for the bus_groups table.
#[derive(Debug, Clone, FromRow)]
pub struct BusGroupEntity {
    pub bus_id: String,
    pub document_ids: Vec<String>,
    pub location: String,
    pub pickup_time: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<BusGroupEntity> for BusGroup {
    fn from(entity: BusGroupEntity) -> Self {
        Self {
            bus_id: entity.bus_id,
            document_ids: entity.document_ids,
            location: entity.location,
            time: entity.pickup_time,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_to_bus_group() {
        let entity = BusGroupEntity {
            bus_id: "bus1".to_string(),
            document_ids: vec!["s1-GateA".to_string(), "s2-GateA".to_string()],
            location: "GateA".to_string(),
            pickup_time: "08:00".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        let group: BusGroup = entity.into();
        assert_eq!(group.bus_id, "bus1");
        assert_eq!(group.document_ids.len(), 2);
        assert_eq!(group.time, "08:00");
    }
}
