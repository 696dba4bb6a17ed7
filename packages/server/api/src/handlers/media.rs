use crate::handlers::ServiceError;
use crate::services::storage::UploadError;
use crate::state::AppState;
use axum::{
    extract::{multipart::MultipartError, Multipart, State},
    http::StatusCode,
    routing::post,
    Json, Router,
};
use serde::Serialize;

pub fn router() -> Router<AppState> {
    Router::new().route("/v1/images", post(upload_image))
}

#[derive(Serialize)]
pub struct UploadResponse {
    pub url: String,
}

/// Accept one image as the multipart field `file`, run it through the
/// gatekeeper, and respond with the stored object's public URL.
pub async fn upload_image(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, ServiceError> {
    let mut upload: Option<(String, String, Vec<u8>)> = None;

    while let Some(field) = multipart.next_field().await.map_err(body_error)? {
        if field.name() != Some("file") {
            continue;
        }
        let file_name = field.file_name().unwrap_or("").to_string();
        let content_type = field.content_type().unwrap_or("").to_string();
        let data = field.bytes().await.map_err(body_error)?;
        upload = Some((file_name, content_type, data.to_vec()));
    }

    let (file_name, content_type, bytes) =
        upload.ok_or_else(|| ServiceError::BadRequest("Missing 'file' field".to_string()))?;

    let url = state
        .storage
        .upload_image(&file_name, &content_type, bytes)
        .await
        .map_err(|e| match e {
            UploadError::TooLarge => ServiceError::PayloadTooLarge(e.to_string()),
            UploadError::UnsupportedType => ServiceError::BadRequest(e.to_string()),
            UploadError::Store(_) => ServiceError::InternalError(e.to_string()),
        })?;

    Ok(Json(UploadResponse { url }))
}

/// The web layer aborts bodies over its own limit before the gatekeeper
/// sees them; surface that as the same user-facing size-limit error.
fn body_error(err: MultipartError) -> ServiceError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        ServiceError::PayloadTooLarge(UploadError::TooLarge.to_string())
    } else {
        ServiceError::BadRequest(err.to_string())
    }
}
