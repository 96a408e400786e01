//! ETA domain models.
//!
//! An ETA record is keyed by bus id and has a lifecycle independent of the
//! bus group: updating one never touches the other.

use serde::{Deserialize, Serialize};

/// A coordinate pair in `[longitude, latitude]` order, as the routing
/// service expects.
pub type Coordinate = [f64; 2];

/// Stored travel estimate for a bus.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EtaRecord {
    pub bus_id: String,
    /// Minutes, formatted with two decimal places.
    pub eta: String,
    /// Meters.
    pub distance: f64,
}

/// Request payload for computing and storing an ETA.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEtaRequest {
    pub bus_id: String,
    pub start_coords: Coordinate,
    pub end_coords: Coordinate,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_eta_request_camel_case_fields() {
        let req: UpdateEtaRequest = serde_json::from_str(
            r#"{"busId":"bus1","startCoords":[-86.9,40.4],"endCoords":[-86.8,40.5]}"#,
        )
        .unwrap();
        assert_eq!(req.bus_id, "bus1");
        assert_eq!(req.start_coords, [-86.9, 40.4]);
        assert_eq!(req.end_coords, [-86.8, 40.5]);
    }

    #[test]
    fn test_eta_record_round_trip() {
        let record = EtaRecord {
            bus_id: "bus1".to_string(),
            eta: "12.50".to_string(),
            distance: 15000.0,
        };
        let json = serde_json::to_string(&record).unwrap();
        let back: EtaRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back.eta, "12.50");
        assert_eq!(back.distance, 15000.0);
    }
}
