use axum::{
    routing::{get, post},
    Router,
};

use crate::server::AppState;

use super::assets::upload_image;
use super::health::health;
use super::metrics::prometheus_metrics;
use super::render::render_layout;
use super::templates::{list_templates, save_template};

pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Health & metrics
        .route("/health", get(health))
        .route("/metrics", get(prometheus_metrics))
        // Template, render, and asset endpoints
        .nest(
            "/api/v1",
            Router::new()
                .route("/templates", post(save_template).get(list_templates))
                .route("/render", post(render_layout))
                .route("/assets/images", post(upload_image)),
        )
}
