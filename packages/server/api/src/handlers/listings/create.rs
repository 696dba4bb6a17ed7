use crate::handlers::ServiceError;
use crate::state::AppState;
use axum::{extract::State, Json};
use database::models::{Listing, NewListing};
use database::repositories::RepositoryError;
use shared::dto::CreateListingRequest;

/// Create one listing. Validation failures are reported before any store
/// call; store failures are raised so the form can offer a retry.
pub async fn create_listing(
    State(state): State<AppState>,
    Json(payload): Json<CreateListingRequest>,
) -> Result<Json<Listing>, ServiceError> {
    payload
        .validate()
        .map_err(|msg| ServiceError::BadRequest(msg.to_string()))?;

    let new = NewListing {
        title: payload.title,
        description: payload.description,
        price: payload.price,
        category: payload.category,
        seller_email: payload.seller_email,
        image_url: payload.image_url,
        location: payload.location,
    };

    let listing = state.listings.create(&new).await.map_err(|e| match e {
        RepositoryError::Invalid(msg) => ServiceError::BadRequest(msg.to_string()),
        RepositoryError::Database(e) => {
            tracing::error!("Error creating listing: {}", e);
            ServiceError::DatabaseError("failed to create listing".to_string())
        }
    })?;

    Ok(Json(listing))
}
