//! avalia-server
//!
//! HTTP host for one assessment session: field edits, chart data, and the
//! analyze-and-render flow.

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

use axum::middleware as axum_mw;
use axum::routing::{get, put};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};

use state::AppState;

pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(routes::health::health_check))
        .route("/assessment", get(routes::assessment::get_assessment))
        .route("/assessment/chart", get(routes::assessment::get_chart))
        .route("/assessment/prompt", get(routes::assessment::get_prompt))
        .route(
            "/assessment/{group}/{field}",
            put(routes::assessment::update_field),
        )
        .route(
            "/analysis",
            get(routes::analysis::get_analysis).post(routes::analysis::run_analysis),
        )
        .route_layer(axum_mw::from_fn(middleware::request_log::log_request))
        .layer(cors)
        .with_state(state)
}
