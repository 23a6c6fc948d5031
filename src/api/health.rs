//! Health check endpoint.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::server::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
    pub storage: StorageHealthResponse,
    pub assets: AssetRelayHealthResponse,
}

#[derive(Debug, Serialize)]
pub struct StorageHealthResponse {
    pub backend: String,
    pub available: bool,
    pub templates_stored: usize,
}

#[derive(Debug, Serialize)]
pub struct AssetRelayHealthResponse {
    pub enabled: bool,
}

pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let uptime_seconds = state.start_time.elapsed().as_secs();

    let (available, templates_stored) = match state.template_store.count().await {
        Ok(count) => (true, count),
        Err(e) => {
            tracing::warn!(error = %e, "Template store unavailable during health check");
            (false, 0)
        }
    };

    let status = if available { "healthy" } else { "degraded" };

    Json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds,
        storage: StorageHealthResponse {
            backend: state.template_store.backend_name().to_string(),
            available,
            templates_stored,
        },
        assets: AssetRelayHealthResponse {
            enabled: state.asset_relay.is_enabled(),
        },
    })
}
