//! Bus group routes.
//!
//! These handlers drive the group-consistency manager in the persistence
//! layer: membership lists on the group row and the group field on signup
//! rows change together or not at all.

use axum::{
    extract::{Path, State},
    Json,
};
use domain::models::group::GroupRequest;
use domain::models::signup::current_day;
use persistence::repositories::GroupRepository;
use tracing::info;

use crate::app::AppState;
use crate::error::ApiError;
use crate::middleware::metrics::record_group_assigned;
use crate::routes::MessageResponse;

const REQUIRED_FIELDS_MESSAGE: &str = "Invalid input. Bus ID, location, and time are required.";

/// Assign signups to a bus, creating the group if needed.
///
/// POST /api/group/:bus_id
///
/// Member ids are not validated against existing signups.
pub async fn create_group(
    State(state): State<AppState>,
    Path(bus_id): Path<String>,
    Json(request): Json<GroupRequest>,
) -> Result<&'static str, ApiError> {
    if bus_id.is_empty() || !request.has_required_fields() {
        return Err(ApiError::InvalidInput(REQUIRED_FIELDS_MESSAGE.into()));
    }
    let location = request.location.as_deref().unwrap_or_default();
    let time = request.time.as_deref().unwrap_or_default();
    let day = current_day();

    let repo = GroupRepository::new(state.pool.clone());
    repo.assign_group(day, &bus_id, &request.document_ids, location, time)
        .await?;

    record_group_assigned(request.document_ids.len());
    info!(
        day = %day,
        bus_id = %bus_id,
        member_count = request.document_ids.len(),
        "Group assigned"
    );

    Ok("Grouping confirmed!")
}

/// Replace an existing group's membership wholesale.
///
/// PUT /api/group/:bus_id
///
/// Ids dropped from the list are not reset to ungrouped; only group deletion
/// resets members.
pub async fn update_group(
    State(state): State<AppState>,
    Path(bus_id): Path<String>,
    Json(request): Json<GroupRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    if bus_id.is_empty() || !request.has_required_fields() {
        return Err(ApiError::InvalidInput(REQUIRED_FIELDS_MESSAGE.into()));
    }
    let location = request.location.as_deref().unwrap_or_default();
    let time = request.time.as_deref().unwrap_or_default();
    let day = current_day();

    let repo = GroupRepository::new(state.pool.clone());
    repo.reassign_group(day, &bus_id, &request.document_ids, location, time)
        .await?;

    record_group_assigned(request.document_ids.len());
    info!(
        day = %day,
        bus_id = %bus_id,
        member_count = request.document_ids.len(),
        "Group membership replaced"
    );

    Ok(Json(MessageResponse::new(
        "Sign-up information updated successfully",
    )))
}

/// Delete a group and reset every member signup to ungrouped.
///
/// DELETE /api/group/:bus_id
pub async fn delete_group(
    State(state): State<AppState>,
    Path(bus_id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    if bus_id.is_empty() {
        return Err(ApiError::InvalidInput(
            "Missing required busId parameter".into(),
        ));
    }
    let day = current_day();

    let repo = GroupRepository::new(state.pool.clone());
    let document_ids = repo.clear_group(day, &bus_id).await?;

    info!(
        day = %day,
        bus_id = %bus_id,
        member_count = document_ids.len(),
        "Group deleted"
    );

    Ok(Json(MessageResponse::new(format!(
        "Group deleted and student signups updated successfully {}",
        document_ids.join(",")
    ))))
}
