//! Travel-time lookup against an OSRM-compatible routing service.
//!
//! A single Route API request per call; there is no retry or backoff. A
//! transport failure or a non-`Ok` service code surfaces as a
//! [`RoutingError`] for the handler to map.

use std::time::Duration;

use domain::models::eta::Coordinate;
use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::config::RoutingConfig;

/// Errors that can occur during a travel-time lookup.
#[derive(Debug, Error)]
pub enum RoutingError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid response from routing service: {0}")]
    InvalidResponse(String),

    #[error("Routing service error: {0}")]
    ServiceError(String),
}

/// A computed travel estimate.
#[derive(Debug, Clone, PartialEq)]
pub struct TravelEstimate {
    /// Minutes, formatted with two decimal places.
    pub eta_minutes: String,
    /// Meters.
    pub distance_meters: f64,
}

/// OSRM Route API response structure.
#[derive(Debug, Deserialize)]
struct OsrmRouteResponse {
    code: String,
    routes: Option<Vec<OsrmRoute>>,
    #[serde(default)]
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OsrmRoute {
    /// Seconds.
    duration: f64,
    /// Meters.
    distance: f64,
}

/// Formats a duration in seconds as minutes with two decimal places.
fn eta_minutes_from_secs(duration_secs: f64) -> String {
    format!("{:.2}", duration_secs / 60.0)
}

fn estimate_from_response(response: OsrmRouteResponse) -> Result<TravelEstimate, RoutingError> {
    if response.code != "Ok" {
        return Err(RoutingError::ServiceError(
            response.message.unwrap_or(response.code),
        ));
    }

    let route = response
        .routes
        .as_deref()
        .and_then(|routes| routes.first())
        .ok_or_else(|| RoutingError::InvalidResponse("no routes in response".to_string()))?;

    Ok(TravelEstimate {
        eta_minutes: eta_minutes_from_secs(route.duration),
        distance_meters: route.distance,
    })
}

/// Client for the external routing service.
pub struct RoutingClient {
    client: Client,
    base_url: String,
}

impl RoutingClient {
    /// Creates a client from configuration. The underlying HTTP client and
    /// its timeout are built once at startup.
    pub fn new(config: &RoutingConfig) -> Result<Self, RoutingError> {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()?;

        Ok(Self {
            client,
            base_url: config.url.trim_end_matches('/').to_string(),
        })
    }

    /// Look up driving duration and distance between two coordinates.
    ///
    /// Coordinates are `[longitude, latitude]` pairs as the Route API
    /// expects.
    pub async fn estimate_travel(
        &self,
        start: Coordinate,
        end: Coordinate,
    ) -> Result<TravelEstimate, RoutingError> {
        let url = format!(
            "{}/route/v1/driving/{},{};{},{}?overview=false",
            self.base_url, start[0], start[1], end[0], end[1]
        );

        debug!(url = %url, "Requesting route");

        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(RoutingError::ServiceError(format!(
                "status {}",
                response.status()
            )));
        }

        let body: OsrmRouteResponse = response.json().await?;
        estimate_from_response(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eta_minutes_formatting() {
        assert_eq!(eta_minutes_from_secs(750.0), "12.50");
        assert_eq!(eta_minutes_from_secs(60.0), "1.00");
        assert_eq!(eta_minutes_from_secs(0.0), "0.00");
        assert_eq!(eta_minutes_from_secs(100.0), "1.67");
    }

    #[test]
    fn test_estimate_from_ok_response() {
        let response: OsrmRouteResponse = serde_json::from_str(
            r#"{"code":"Ok","routes":[{"duration":750.0,"distance":15000.0,"legs":[]}],"waypoints":[]}"#,
        )
        .unwrap();
        let estimate = estimate_from_response(response).unwrap();
        assert_eq!(estimate.eta_minutes, "12.50");
        assert_eq!(estimate.distance_meters, 15000.0);
    }

    #[test]
    fn test_estimate_uses_first_route() {
        let response: OsrmRouteResponse = serde_json::from_str(
            r#"{"code":"Ok","routes":[{"duration":60.0,"distance":100.0},{"duration":120.0,"distance":200.0}]}"#,
        )
        .unwrap();
        let estimate = estimate_from_response(response).unwrap();
        assert_eq!(estimate.eta_minutes, "1.00");
        assert_eq!(estimate.distance_meters, 100.0);
    }

    #[test]
    fn test_estimate_from_error_code() {
        let response: OsrmRouteResponse = serde_json::from_str(
            r#"{"code":"NoRoute","message":"Impossible route between points"}"#,
        )
        .unwrap();
        let err = estimate_from_response(response).unwrap_err();
        match err {
            RoutingError::ServiceError(msg) => {
                assert_eq!(msg, "Impossible route between points")
            }
            _ => panic!("Expected ServiceError"),
        }
    }

    #[test]
    fn test_estimate_from_error_code_without_message() {
        let response: OsrmRouteResponse =
            serde_json::from_str(r#"{"code":"InvalidQuery"}"#).unwrap();
        let err = estimate_from_response(response).unwrap_err();
        match err {
            RoutingError::ServiceError(msg) => assert_eq!(msg, "InvalidQuery"),
            _ => panic!("Expected ServiceError"),
        }
    }

    #[test]
    fn test_estimate_from_empty_routes() {
        let response: OsrmRouteResponse =
            serde_json::from_str(r#"{"code":"Ok","routes":[]}"#).unwrap();
        let err = estimate_from_response(response).unwrap_err();
        assert!(matches!(err, RoutingError::InvalidResponse(_)));
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let config = RoutingConfig {
            url: "http://localhost:5000/".to_string(),
            timeout_ms: 1000,
        };
        let client = RoutingClient::new(&config).unwrap();
        assert_eq!(client.base_url, "http://localhost:5000");
    }
}
