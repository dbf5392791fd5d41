use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;
pub mod utils;

use models::storage::Backend;
use routes::{
    categories::list_categories, health::health_check, recommendations::recommend_books,
    search::search_books,
};

pub fn app(backend: Backend) -> Router {
    Router::new()
        .route("/status", get(health_check))
        .route("/search", get(search_books))
        .route("/categories", get(list_categories))
        .route("/recommendations", post(recommend_books))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(backend)
}
