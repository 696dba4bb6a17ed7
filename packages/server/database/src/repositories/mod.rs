pub mod listing_repo;
pub mod message_repo;

pub use listing_repo::ListingRepository;
pub use message_repo::MessageRepository;

use thiserror::Error;

/// Failure surface of repository writes. Reads return `sqlx::Result`
/// directly; the HTTP boundary decides how much of this to expose.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("{0}")]
    Invalid(&'static str),
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}
