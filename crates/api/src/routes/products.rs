//! Product routes.

use axum::{extract::State, http::StatusCode, Json};
use domain::models::product::CreateProductRequest;
use persistence::repositories::ProductRepository;
use tracing::info;

use crate::app::AppState;
use crate::error::ApiError;

/// Create a product.
///
/// POST /api/create
///
/// Returns an empty 200 on success; creating an existing id fails.
pub async fn create_product(
    State(state): State<AppState>,
    Json(request): Json<CreateProductRequest>,
) -> Result<StatusCode, ApiError> {
    let repo = ProductRepository::new(state.pool.clone());
    repo.create(
        &request.id,
        &request.name,
        &request.description,
        request.price,
    )
    .await?;

    info!(product_id = %request.id, "Product created");

    Ok(StatusCode::OK)
}
