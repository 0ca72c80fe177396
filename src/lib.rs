//! Fare pricing and cancellation refund engine for the campus carpool app.
//!
//! The mobile client calls this service over HTTP/JSON to suggest seat
//! prices, apply group discounts and preview cancellation refunds.

pub mod cache;
pub mod config;
pub mod error;
pub mod pricing;
pub mod refunds;

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

use crate::cache::{AppCache, CacheStats};
use crate::config::Config;
use crate::error::AppError;
use crate::pricing::DistanceClient;

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub cache: AppCache,
    pub distance: DistanceClient,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            cache: AppCache::new(),
            distance: DistanceClient::new(
                config.google_maps_api_key.clone(),
                config.distance_matrix_url.clone(),
            ),
        }
    }
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    quotes_enabled: bool,
    cache: CacheStats,
}

async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        quotes_enabled: state.distance.api_key().is_some(),
        cache: state.cache.stats(),
    })
}

async fn not_found() -> AppError {
    AppError::NotFound
}

/// Build the application router
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .nest("/api/pricing", pricing::router())
        .nest("/api/refunds", refunds::router())
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
