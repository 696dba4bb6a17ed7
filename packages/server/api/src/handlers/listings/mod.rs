use axum::{routing::get, Router};

pub mod create;
pub mod detail;
pub mod list;
pub mod search;

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/v1/listings",
            get(list::list_listings).post(create::create_listing),
        )
        .route("/v1/listings/:id", get(detail::get_listing))
        .route("/v1/categories", get(list::list_categories))
        .route("/v1/search", get(search::search_listings))
}
