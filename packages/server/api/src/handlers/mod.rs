use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

pub mod listings;
pub mod media;
pub mod messages;

/// Error surface shared by every handler group. Reads collapse store
/// failures before reaching this type; writes surface them loudly so the
/// client can offer a retry.
pub enum ServiceError {
    BadRequest(String),
    NotFound(String),
    PayloadTooLarge(String),
    DatabaseError(String),
    InternalError(String),
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let (status, msg) = match self {
            ServiceError::BadRequest(e) => (StatusCode::BAD_REQUEST, e),
            ServiceError::NotFound(e) => (StatusCode::NOT_FOUND, e),
            ServiceError::PayloadTooLarge(e) => (StatusCode::PAYLOAD_TOO_LARGE, e),
            ServiceError::DatabaseError(e) => (StatusCode::INTERNAL_SERVER_ERROR, e),
            ServiceError::InternalError(e) => (StatusCode::INTERNAL_SERVER_ERROR, e),
        };

        (status, Json(json!({ "error": msg }))).into_response()
    }
}
