pub mod documents;
pub mod health;
pub mod themes;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Theme registry
        .route("/api/v1/themes", get(themes::handle_list_themes))
        .route("/api/v1/themes/:id", get(themes::handle_get_theme))
        .route("/api/v1/themes/:id/css", get(themes::handle_theme_css))
        // Document pipeline
        .route("/api/v1/detect", post(documents::handle_detect))
        .route("/api/v1/validate", post(documents::handle_validate))
        .route("/api/v1/preview", post(documents::handle_preview))
        .route(
            "/api/v1/export/markdown",
            post(documents::handle_export_markdown),
        )
        .with_state(state)
}
