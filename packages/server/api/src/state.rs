use crate::services::search::SearchEngine;
use crate::services::storage::ObjectStorage;
use database::repositories::{ListingRepository, MessageRepository};
use database::Database;
use std::sync::Arc;

/// Shared handles for every request: one store client, one object-store
/// client, constructed at startup and never rebuilt per request.
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<Database>,
    pub listings: ListingRepository,
    pub messages: MessageRepository,
    pub search_engine: Arc<SearchEngine>,
    pub storage: Arc<ObjectStorage>,
}
