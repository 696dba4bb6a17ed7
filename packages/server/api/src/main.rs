use axum::{http, routing::get, Json, Router};
use database::Database;
use dotenv::dotenv;
use serde_json::json;
use std::net::SocketAddr;
use std::sync::Arc;

mod handlers;
mod services;
mod state;

use database::repositories::{ListingRepository, MessageRepository};
use services::search::SearchEngine;
use services::storage::{ObjectStorage, MAX_IMAGE_BYTES};
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load Config
    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    // Connect to Database
    let db = Database::connect(&database_url).await?;
    db.migrate().await?;

    // Initialize Object Storage
    let storage = Arc::new(ObjectStorage::from_env().await?);

    // Initialize Search Engine
    let search_engine = Arc::new(SearchEngine::new());

    // Create AppState
    let app_state = AppState {
        db: db.clone(),
        listings: ListingRepository::new(db.pool.clone()),
        messages: MessageRepository::new(db.pool.clone()),
        search_engine,
        storage,
    };

    // Setup CORS for the storefront
    let frontend_origin =
        std::env::var("FRONTEND_ORIGIN").unwrap_or_else(|_| "http://localhost:3000".to_string());
    let cors = tower_http::cors::CorsLayer::new()
        .allow_origin(frontend_origin.parse::<http::HeaderValue>()?)
        .allow_methods([http::Method::GET, http::Method::POST])
        .allow_headers([http::header::CONTENT_TYPE, http::header::ACCEPT]);

    // Setup Router using handlers. The body limit leaves headroom over the
    // image cap so the gatekeeper, not the transport, normally rejects
    // oversized uploads.
    let app = Router::new()
        .route("/health", get(health_check))
        .merge(handlers::listings::router())
        .merge(handlers::messages::router())
        .merge(handlers::media::router())
        .layer(axum::extract::DefaultBodyLimit::max(MAX_IMAGE_BYTES + 1024 * 1024))
        .layer(tower_http::trace::TraceLayer::new_for_http())
        .layer(cors)
        .with_state(app_state);

    // Start Server
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(4000);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Marketplace API listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn health_check() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}
