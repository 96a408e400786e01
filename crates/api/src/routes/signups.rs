//! Signup routes for shuttle pickup registrations.
//!
//! All operations are scoped to the server's current UTC date at request
//! receipt; the client never supplies the day.

use axum::{
    extract::{Path, State},
    Json,
};
use domain::models::signup::{
    current_day, signup_doc_id, CreateSignupRequest, EditSignupRequest, SignupSummary,
};
use persistence::repositories::SignupRepository;
use tracing::info;

use crate::app::AppState;
use crate::error::ApiError;
use crate::middleware::metrics::record_signup_created;
use crate::routes::MessageResponse;

/// Register a student for a shuttle pickup.
///
/// POST /api/signup
///
/// The document id is derived from the student id and location, so a second
/// registration for the same pair overwrites the first.
pub async fn create_signup(
    State(state): State<AppState>,
    Json(request): Json<CreateSignupRequest>,
) -> Result<&'static str, ApiError> {
    let day = current_day();
    let doc_id = signup_doc_id(&request.id, &request.location);

    let repo = SignupRepository::new(state.pool.clone());
    repo.create(
        day,
        &doc_id,
        &request.firstname,
        &request.lastname,
        &request.location,
        &request.time,
    )
    .await?;

    record_signup_created();
    info!(
        day = %day,
        doc_id = %doc_id,
        location = %request.location,
        "Signup created"
    );

    Ok("Sign up confirmed!")
}

/// List every signup registered today.
///
/// GET /api/get-signups
///
/// The group field is intentionally omitted from the returned view.
pub async fn get_signups(
    State(state): State<AppState>,
) -> Result<Json<Vec<SignupSummary>>, ApiError> {
    let day = current_day();

    let repo = SignupRepository::new(state.pool.clone());
    let signups = repo.list_for_day(day).await?;

    let response: Vec<SignupSummary> = signups.into_iter().map(Into::into).collect();

    info!(day = %day, count = response.len(), "Listed signups");

    Ok(Json(response))
}

/// Update a signup's location and time.
///
/// PUT /api/edit-signup/:doc_id
pub async fn edit_signup(
    State(state): State<AppState>,
    Path(doc_id): Path<String>,
    Json(request): Json<EditSignupRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    let day = current_day();

    let repo = SignupRepository::new(state.pool.clone());
    let affected = repo
        .update(day, &doc_id, &request.location, &request.time)
        .await?;

    if affected == 0 {
        return Err(ApiError::NotFound("Student sign-up not found".into()));
    }

    info!(day = %day, doc_id = %doc_id, "Signup updated");

    Ok(Json(MessageResponse::new(
        "Sign-up information updated successfully",
    )))
}

/// Delete a signup.
///
/// DELETE /api/delete-signup/:doc_id
pub async fn delete_signup(
    State(state): State<AppState>,
    Path(doc_id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let day = current_day();

    let repo = SignupRepository::new(state.pool.clone());
    let affected = repo.delete(day, &doc_id).await?;

    if affected == 0 {
        return Err(ApiError::NotFound("Student sign-up not found".into()));
    }

    info!(day = %day, doc_id = %doc_id, "Signup deleted");

    Ok(Json(MessageResponse::new("Sign-up deleted successfully")))
}
