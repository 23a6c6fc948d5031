//! API layer - HTTP endpoint handlers organized by domain.

mod assets;
mod health;
mod metrics;
mod render;
mod routes;
mod templates;

// Re-export all handlers for use in server/app.rs
pub use assets::upload_image;
pub use health::health;
pub use metrics::prometheus_metrics;
pub use render::{render_layout, RenderRequest};
pub use routes::api_routes;
pub use templates::{list_templates, save_template, ListTemplatesQuery};
