use crate::handlers::ServiceError;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    Json,
};
use database::models::Listing;

/// One listing by id. Store failures are logged and reported exactly like
/// not-found; the caller cannot tell them apart.
pub async fn get_listing(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Listing>, ServiceError> {
    let listing = match state.listings.find_by_id(&id).await {
        Ok(listing) => listing,
        Err(e) => {
            tracing::error!("Error fetching listing {}: {}", id, e);
            None
        }
    };

    listing
        .map(Json)
        .ok_or_else(|| ServiceError::NotFound("listing not found".to_string()))
}
