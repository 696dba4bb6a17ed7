use crate::state::AppState;
use axum::{
    extract::{Query, State},
    Json,
};
use database::models::Listing;
use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
}

#[derive(Serialize)]
pub struct SearchResponse {
    pub results: Vec<Listing>,
}

/// Search never errors: an empty term yields an empty result, and a failed
/// pass degrades inside the engine.
pub async fn search_listings(
    State(state): State<AppState>,
    Query(params): Query<SearchQuery>,
) -> Json<SearchResponse> {
    let results = state.search_engine.search(&state.db.pool, &params.q).await;

    Json(SearchResponse { results })
}
