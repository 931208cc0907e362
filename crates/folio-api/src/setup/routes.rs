//! Route configuration and setup.

use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method},
    routing::{get, post},
    Router,
};
use folio_core::Config;
use tower::limit::ConcurrencyLimitLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Setup all application routes
pub fn setup_routes(config: &Config, state: Arc<AppState>) -> Result<Router, anyhow::Error> {
    let cors = setup_cors(config)?;

    // A dataset submission can carry a thumbnail and a raw data file in one
    // request; the body limit covers the largest legal combination.
    let body_limit = config.max_cover_size_bytes()
        + config.max_thumbnail_size_bytes()
        + config.max_dataset_file_size_bytes()
        + 64 * 1024;

    let http_concurrency_limit = std::env::var("HTTP_CONCURRENCY_LIMIT")
        .ok()
        .and_then(|s| s.parse::<usize>().ok())
        .unwrap_or(10_000)
        .max(1);

    let app = Router::new()
        .route("/api/v0/books", post(handlers::book_submit::upload_book))
        .route(
            "/api/v0/books/{id}",
            get(handlers::book_get::get_book).put(handlers::book_submit::update_book),
        )
        .route(
            "/api/v0/journals",
            post(handlers::journal_submit::upload_journal),
        )
        .route(
            "/api/v0/datasets",
            post(handlers::dataset_submit::upload_dataset),
        )
        .route(
            "/api/v0/me/publications",
            get(handlers::dashboard::my_publications),
        )
        .route(
            "/api/v0/publishers",
            get(handlers::publishers::list_publishers),
        )
        .route(
            "/api/v0/publishers/{slug}/books",
            get(handlers::publisher_books::list_publisher_books),
        )
        .route("/health", get(handlers::health::health_check))
        .with_state(state)
        .layer(ConcurrencyLimitLayer::new(http_concurrency_limit))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(RequestBodyLimitLayer::new(body_limit))
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    Ok(app)
}

fn setup_cors(config: &Config) -> Result<CorsLayer, anyhow::Error> {
    let cors = if config.cors_origins().contains(&"*".to_string()) {
        tracing::warn!("CORS configured to allow all origins - not recommended for production");
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([Method::GET, Method::POST, Method::PUT, Method::OPTIONS])
            .allow_headers(Any)
    } else {
        let origins: Result<Vec<HeaderValue>, _> =
            config.cors_origins().iter().map(|o| o.parse()).collect();
        CorsLayer::new()
            .allow_origin(origins.unwrap_or_default())
            .allow_methods([Method::GET, Method::POST, Method::PUT, Method::OPTIONS])
            .allow_headers(Any)
    };
    Ok(cors)
}
