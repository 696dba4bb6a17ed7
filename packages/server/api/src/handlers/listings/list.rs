use crate::state::AppState;
use axum::{
    extract::{Query, State},
    Json,
};
use database::models::{Listing, CATEGORIES};
use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
pub struct ListingsQuery {
    pub category: Option<String>,
}

#[derive(Serialize)]
pub struct ListingsResponse {
    pub listings: Vec<Listing>,
}

/// Browse listings newest-first, optionally restricted to one category.
/// Store failures degrade to an empty page; browsing never errors.
pub async fn list_listings(
    State(state): State<AppState>,
    Query(params): Query<ListingsQuery>,
) -> Json<ListingsResponse> {
    let category = params.category.as_deref().filter(|c| !c.is_empty());

    let listings = match state.listings.list(category).await {
        Ok(listings) => listings,
        Err(e) => {
            tracing::error!("Error fetching listings: {}", e);
            Vec::new()
        }
    };

    Json(ListingsResponse { listings })
}

#[derive(Serialize)]
pub struct CategoriesResponse {
    pub categories: &'static [&'static str],
}

/// The fixed category catalog, served so clients do not hardcode it.
pub async fn list_categories() -> Json<CategoriesResponse> {
    Json(CategoriesResponse {
        categories: CATEGORIES,
    })
}
