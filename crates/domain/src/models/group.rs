//! Bus group domain models.
//!
//! A group assigns a set of signup document ids to a bus. Membership lists
//! are replaced wholesale on update; there are no incremental add/remove
//! semantics.

use serde::{Deserialize, Serialize};

/// An assignment of signups to a specific bus.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusGroup {
    pub bus_id: String,
    pub document_ids: Vec<String>,
    pub location: String,
    pub time: String,
}

/// Request payload for creating or updating a bus group.
///
/// Location and time are optional at the serde layer so that missing fields
/// surface as a presence-check failure (400) rather than a body rejection.
/// A missing member list is treated as empty.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupRequest {
    #[serde(default)]
    pub document_ids: Vec<String>,
    pub location: Option<String>,
    pub time: Option<String>,
}

impl GroupRequest {
    /// Presence check mirroring the required-field validation of the API:
    /// location and time must be present and non-empty.
    pub fn has_required_fields(&self) -> bool {
        fn present(value: &Option<String>) -> bool {
            value.as_deref().is_some_and(|s| !s.is_empty())
        }
        present(&self.location) && present(&self.time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_request_camel_case_fields() {
        let req: GroupRequest = serde_json::from_str(
            r#"{"documentIds":["s1-GateA"],"location":"GateA","time":"08:00"}"#,
        )
        .unwrap();
        assert_eq!(req.document_ids, vec!["s1-GateA".to_string()]);
        assert!(req.has_required_fields());
    }

    #[test]
    fn test_group_request_missing_member_list_defaults_empty() {
        let req: GroupRequest =
            serde_json::from_str(r#"{"location":"GateA","time":"08:00"}"#).unwrap();
        assert!(req.document_ids.is_empty());
        assert!(req.has_required_fields());
    }

    #[test]
    fn test_group_request_missing_location_fails_presence() {
        let req: GroupRequest = serde_json::from_str(r#"{"time":"08:00"}"#).unwrap();
        assert!(!req.has_required_fields());
    }

    #[test]
    fn test_group_request_empty_time_fails_presence() {
        let req: GroupRequest =
            serde_json::from_str(r#"{"location":"GateA","time":""}"#).unwrap();
        assert!(!req.has_required_fields());
    }

    #[test]
    fn test_bus_group_serializes_camel_case() {
        let group = BusGroup {
            bus_id: "bus1".to_string(),
            document_ids: vec!["s1-GateA".to_string()],
            location: "GateA".to_string(),
            time: "08:00".to_string(),
        };
        let json = serde_json::to_value(&group).unwrap();
        assert!(json.get("busId").is_some());
        assert!(json.get("documentIds").is_some());
    }
}
