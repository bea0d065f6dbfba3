//! API handlers for the Gîte Pricing REST endpoints

pub mod concierge;
pub mod health;
pub mod openapi;
pub mod pricing;
pub mod settings;
pub mod sync;

use axum::{
    http::Uri,
    routing::{get, post},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{error::AppError, AppState};

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // API v1 routes
    let api_v1 = Router::new()
        // Health check
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        // Direct pricing
        .route("/pricing/compute", post(pricing::compute))
        .route("/pricing/report", post(pricing::report))
        .route("/pricing/export", post(pricing::export_csv))
        // Concierge
        .route("/concierge/compute", post(concierge::compute))
        .route("/concierge/report", post(concierge::report))
        .route("/concierge/allocation", post(concierge::allocation))
        // Settings
        .route("/settings/pricing", get(settings::get_pricing).put(settings::update_pricing))
        .route("/settings/pricing/reset", post(settings::reset_pricing))
        .route("/settings/concierge", get(settings::get_concierge).put(settings::update_concierge))
        .route("/settings/concierge/reset", post(settings::reset_concierge))
        // Sync between tools
        .route("/sync/pricing-to-concierge", post(sync::pricing_to_concierge))
        .route("/sync/concierge-to-pricing", post(sync::concierge_to_pricing))
        .with_state(state);

    Router::new()
        .nest("/api/v1", api_v1)
        .merge(openapi::create_openapi_router())
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(cors)
}
