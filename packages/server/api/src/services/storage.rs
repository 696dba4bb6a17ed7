//! S3-backed storage for listing images.
//!
//! The gatekeeper validates size and declared media type before anything
//! touches the store, writes under a collision-resistant key, and resolves
//! the stable public URL the listing record will carry. Uploads are a
//! single best-effort operation: no retries, no chunking, no rollback.

use aws_sdk_s3::error::ProvideErrorMetadata;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::Client;
use rand::{distributions::Alphanumeric, Rng};
use thiserror::Error;

/// Hard cap on accepted image payloads (8 MiB).
pub const MAX_IMAGE_BYTES: usize = 8 * 1024 * 1024;

/// Media types the gatekeeper lets through.
pub const ALLOWED_IMAGE_TYPES: &[&str] =
    &["image/jpeg", "image/png", "image/gif", "image/webp"];

#[derive(Debug, Error)]
pub enum UploadError {
    #[error("image exceeds the maximum allowed size of {} MiB", MAX_IMAGE_BYTES / (1024 * 1024))]
    TooLarge,
    #[error("only JPEG, PNG, GIF and WebP images are allowed")]
    UnsupportedType,
    #[error("failed to store image: {0}")]
    Store(String),
}

pub struct ObjectStorage {
    client: Client,
    bucket: String,
    public_base_url: String,
}

impl ObjectStorage {
    pub fn new(
        client: Client,
        bucket: impl Into<String>,
        public_base_url: impl Into<String>,
    ) -> Self {
        Self {
            client,
            bucket: bucket.into(),
            public_base_url: public_base_url.into(),
        }
    }

    /// Create object storage from environment configuration.
    pub async fn from_env() -> anyhow::Result<Self> {
        let config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
        let client = Client::new(&config);

        let bucket =
            std::env::var("MEDIA_BUCKET").unwrap_or_else(|_| "listing-images".to_string());
        let public_base_url = std::env::var("MEDIA_PUBLIC_URL")
            .unwrap_or_else(|_| format!("https://{bucket}.s3.amazonaws.com"));

        Ok(Self::new(client, bucket, public_base_url))
    }

    /// Validate, store, and resolve the public URL of one listing image.
    pub async fn upload_image(
        &self,
        file_name: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<String, UploadError> {
        validate_image(content_type, bytes.len())?;

        let suffix: String = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(8)
            .map(char::from)
            .collect();
        let key = object_key(file_name, chrono::Utc::now().timestamp_millis(), &suffix);

        tracing::info!("Uploading image {} ({} bytes)", key, bytes.len());

        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(&key)
            .body(ByteStream::from(bytes))
            .content_type(content_type)
            .cache_control("max-age=3600")
            .if_none_match("*") // reject if the key already exists
            .send()
            .await
            .map_err(|err| {
                let service = err.into_service_error();
                let message = service.message().unwrap_or_default().to_string();
                if is_payload_too_large(service.code(), &message) {
                    UploadError::TooLarge
                } else {
                    tracing::error!("Error uploading image {}: {}", key, service);
                    UploadError::Store(service.to_string())
                }
            })?;

        Ok(self.public_url(&key))
    }

    /// Stable public URL for an uploaded key.
    pub fn public_url(&self, key: &str) -> String {
        format!("{}/{}", self.public_base_url.trim_end_matches('/'), key)
    }
}

/// Media type first: a disallowed type is a type error at any size.
fn validate_image(content_type: &str, size: usize) -> Result<(), UploadError> {
    if !ALLOWED_IMAGE_TYPES.contains(&content_type) {
        return Err(UploadError::UnsupportedType);
    }
    if size > MAX_IMAGE_BYTES {
        return Err(UploadError::TooLarge);
    }
    Ok(())
}

/// Collision-resistant object key: upload time in millis, a random
/// suffix, and the original extension (`jpg` when absent).
fn object_key(original_name: &str, timestamp_millis: i64, suffix: &str) -> String {
    let ext = original_name
        .rsplit_once('.')
        .map(|(_, ext)| ext)
        .filter(|ext| !ext.is_empty())
        .unwrap_or("jpg");
    format!("{timestamp_millis}-{suffix}.{ext}")
}

/// The store reports an oversized payload as an EntityTooLarge code or a
/// 413/size-limit message; all of them become the user-facing size error.
fn is_payload_too_large(code: Option<&str>, message: &str) -> bool {
    code == Some("EntityTooLarge") || message.contains("size limit") || message.contains("413")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn an_image_of_exactly_the_cap_is_accepted() {
        assert!(validate_image("image/png", MAX_IMAGE_BYTES).is_ok());
    }

    #[test]
    fn one_byte_over_the_cap_is_a_size_error() {
        assert!(matches!(
            validate_image("image/png", MAX_IMAGE_BYTES + 1),
            Err(UploadError::TooLarge)
        ));
    }

    #[test]
    fn disallowed_types_are_rejected_regardless_of_size() {
        assert!(matches!(
            validate_image("application/pdf", 10),
            Err(UploadError::UnsupportedType)
        ));
        // Even an oversized file of the wrong type reports the type error.
        assert!(matches!(
            validate_image("image/svg+xml", MAX_IMAGE_BYTES * 2),
            Err(UploadError::UnsupportedType)
        ));
    }

    #[test]
    fn every_allowed_type_passes() {
        for ty in ALLOWED_IMAGE_TYPES {
            assert!(validate_image(ty, 1024).is_ok(), "{ty} should be allowed");
        }
    }

    #[test]
    fn object_keys_keep_the_original_extension() {
        assert_eq!(object_key("photo.PNG", 1700000000000, "a1b2c3d4"), "1700000000000-a1b2c3d4.PNG");
        assert_eq!(object_key("archive.tar.gz", 1, "s"), "1-s.gz");
    }

    #[test]
    fn object_keys_default_to_jpg() {
        assert_eq!(object_key("photo", 42, "xyz"), "42-xyz.jpg");
        assert_eq!(object_key("trailing.", 42, "xyz"), "42-xyz.jpg");
        assert_eq!(object_key("", 42, "xyz"), "42-xyz.jpg");
    }

    #[test]
    fn transport_size_limits_translate_to_the_size_error() {
        assert!(is_payload_too_large(Some("EntityTooLarge"), ""));
        assert!(is_payload_too_large(None, "413 Payload Too Large"));
        assert!(is_payload_too_large(None, "object exceeded the size limit"));
        assert!(!is_payload_too_large(Some("AccessDenied"), "forbidden"));
    }
}
