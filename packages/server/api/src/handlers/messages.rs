use crate::handlers::ServiceError;
use crate::state::AppState;
use axum::{extract::State, routing::post, Json, Router};
use database::models::{Message, NewMessage};
use database::repositories::RepositoryError;
use shared::dto::SendMessageRequest;

pub fn router() -> Router<AppState> {
    Router::new().route("/v1/messages", post(send_message))
}

/// Forward a buyer inquiry to a listing's seller.
pub async fn send_message(
    State(state): State<AppState>,
    Json(payload): Json<SendMessageRequest>,
) -> Result<Json<Message>, ServiceError> {
    // Resolve the listing first; the seller address is copied from the
    // stored row, never taken from the client.
    let listing = match state.listings.find_by_id(&payload.listing_id).await {
        Ok(listing) => listing,
        Err(e) => {
            tracing::error!("Error loading listing {}: {}", payload.listing_id, e);
            None
        }
    }
    .ok_or_else(|| ServiceError::NotFound("listing not found".to_string()))?;

    let new = NewMessage {
        listing_id: listing.id,
        buyer_email: payload.buyer_email,
        seller_email: listing.seller_email.clone(),
        body: payload.body,
    };

    let message = state.messages.create(&new).await.map_err(|e| match e {
        RepositoryError::Invalid(msg) => ServiceError::BadRequest(msg.to_string()),
        RepositoryError::Database(e) => {
            tracing::error!("Error sending message: {}", e);
            ServiceError::DatabaseError("failed to send message".to_string())
        }
    })?;

    // Notifying the seller by email would happen here; not implemented.

    Ok(Json(message))
}
