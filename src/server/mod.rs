pub mod routes;

use crate::scrapers::PriceSource;
use axum::routing::get;
use axum::Router;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub source: Arc<dyn PriceSource>,
}

/// Build the HTTP router around a price source
pub fn build_app(source: Arc<dyn PriceSource>) -> Router {
    Router::new()
        .route("/price", get(routes::price_handler))
        .route("/health", get(routes::health_handler))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(AppState { source })
}
