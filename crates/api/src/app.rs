//! Router construction

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::routes;
use crate::state::AppState;

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(routes::health::root))
        .route("/health", get(routes::health::health))
        // Calculator
        .route("/api/factors", get(routes::calculate::factors))
        .route("/api/calculate/transport", post(routes::calculate::transport))
        .route("/api/calculate/energy", post(routes::calculate::energy))
        .route("/api/calculate/food", post(routes::calculate::food))
        .route("/api/calculate/footprint", post(routes::calculate::footprint))
        // Accounts
        .route("/api/auth/register", post(routes::accounts::register))
        .route("/api/auth/login", post(routes::accounts::login))
        // Catalog
        .route("/api/tips", get(routes::catalog::tips))
        .route("/api/tips/:id", get(routes::catalog::tip))
        .route("/api/missions", get(routes::catalog::missions))
        .route("/api/missions/:id", get(routes::catalog::mission))
        // Own profile
        .route("/api/me", get(routes::me::profile))
        .route("/api/me/stats", get(routes::me::stats))
        .route("/api/me/emissions", get(routes::me::emissions))
        .route("/api/me/footprint", post(routes::me::record_footprint))
        .route(
            "/api/me/missions/:id/start",
            post(routes::me::start_mission),
        )
        .route(
            "/api/me/missions/:id/complete",
            post(routes::me::complete_mission),
        )
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}
