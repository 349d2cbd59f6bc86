pub mod health;
pub mod score;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::state::AppState;
use crate::view::handlers;

pub fn build_router(state: AppState) -> Router {
    let max_upload_bytes = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/score", post(score::handle_score))
        // HTML view
        .route("/", get(handlers::handle_index))
        .route("/analyze", post(handlers::handle_analyze))
        .route("/new", get(handlers::handle_new))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .with_state(state)
}
