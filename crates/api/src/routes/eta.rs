//! ETA routes.

use axum::{extract::State, Json};
use domain::models::eta::UpdateEtaRequest;
use persistence::repositories::EtaRepository;
use serde::Serialize;
use tracing::info;

use crate::app::AppState;
use crate::error::ApiError;
use crate::middleware::metrics::record_eta_updated;

/// Response body for a successful ETA update.
#[derive(Debug, Serialize)]
pub struct UpdateEtaResponse {
    pub message: String,
    /// Minutes, formatted with two decimal places.
    pub eta: String,
    /// Meters.
    pub distance: f64,
}

/// Compute a travel estimate for a bus and store it.
///
/// POST /api/update-eta
///
/// A single lookup attempt against the routing service; the stored record is
/// replaced wholesale. Lookup and store failures both surface as 500 with
/// the underlying message.
pub async fn update_eta(
    State(state): State<AppState>,
    Json(request): Json<UpdateEtaRequest>,
) -> Result<Json<UpdateEtaResponse>, ApiError> {
    let estimate = state
        .routing
        .estimate_travel(request.start_coords, request.end_coords)
        .await?;

    let repo = EtaRepository::new(state.pool.clone());
    repo.upsert(
        &request.bus_id,
        &estimate.eta_minutes,
        estimate.distance_meters,
    )
    .await?;

    record_eta_updated();
    info!(
        bus_id = %request.bus_id,
        eta_minutes = %estimate.eta_minutes,
        distance_meters = estimate.distance_meters,
        "ETA updated"
    );

    Ok(Json(UpdateEtaResponse {
        message: "ETA updated successfully".to_string(),
        eta: estimate.eta_minutes,
        distance: estimate.distance_meters,
    }))
}
