pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::keywords::handlers as reports;
use crate::profile::handlers as profile;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Profile API
        .route(
            "/api/v1/profile/extract",
            post(profile::handle_extract_profile),
        )
        // Report API
        .route("/api/v1/reports", post(reports::handle_generate_report))
        .route(
            "/api/v1/reports/from-pages",
            post(reports::handle_generate_report_from_pages),
        )
        .with_state(state)
}
