//! Signup entity (database row mapping).

use chrono::{DateTime, NaiveDate, Utc};
use domain::models::signup::{Signup, SignupSummary};
use sqlx::FromRow;

/// Database row mapping for the signups table.
///
/// Rows are keyed by `(day, doc_id)`: the day column plays the role of the
/// date-named collection in the source data model.
#[derive(Debug, Clone, FromRow)]
pub struct SignupEntity {
    pub day: NaiveDate,
    pub doc_id: String,
    pub firstname: String,
    pub lastname: String,
    pub location: String,
    pub pickup_time: String,
    /// NULL when never grouped, the sentinel "None" after ungrouping.
    pub group_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<SignupEntity> for Signup {
    fn from(entity: SignupEntity) -> Self {
        Self {
            id: entity.doc_id,
            firstname: entity.firstname,
            lastname: entity.lastname,
            location: entity.location,
            time: entity.pickup_time,
            group: entity.group_id,
        }
    }
}

impl From<SignupEntity> for SignupSummary {
    fn from(entity: SignupEntity) -> Self {
        Self {
            id: entity.doc_id,
            firstname: entity.firstname,
            lastname: entity.lastname,
            location: entity.location,
            time: entity.pickup_time,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entity() -> SignupEntity {
        SignupEntity {
            day: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            doc_id: "s1-GateA".to_string(),
            firstname: "A".to_string(),
            lastname: "B".to_string(),
            location: "GateA".to_string(),
            pickup_time: "08:00".to_string(),
            group_id: Some("bus1".to_string()),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_entity_to_signup() {
        let signup: Signup = entity().into();
        assert_eq!(signup.id, "s1-GateA");
        assert_eq!(signup.time, "08:00");
        assert_eq!(signup.group.as_deref(), Some("bus1"));
    }

    #[test]
    fn test_entity_to_summary_drops_group() {
        let summary: SignupSummary = entity().into();
        assert_eq!(summary.id, "s1-GateA");
        let json = serde_json::to_value(&summary).unwrap();
        assert!(json.get("group").is_none());
    }
}
