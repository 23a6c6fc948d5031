use std::sync::Arc;
use std::time::{Duration, Instant};

use sqlx::postgres::PgPoolOptions;

use crate::assets::{create_asset_relay, AssetRelay};
use crate::config::Settings;
use crate::error::AppError;
use crate::template::{create_template_store, TemplateStore};

#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<Settings>,
    pub template_store: Arc<dyn TemplateStore>,
    pub asset_relay: Arc<dyn AssetRelay>,
    pub start_time: Instant,
}

impl AppState {
    pub async fn new(settings: Settings) -> Result<Self, AppError> {
        let postgres_pool = if settings.storage.backend == "postgres" {
            let pool = PgPoolOptions::new()
                .max_connections(settings.storage.pool_size)
                .acquire_timeout(Duration::from_secs(settings.storage.connect_timeout_seconds))
                .connect(&settings.storage.url)
                .await
                .map_err(|e| AppError::Store(e.into()))?;

            tracing::info!(
                pool_size = settings.storage.pool_size,
                "PostgreSQL connection pool created"
            );
            Some(pool)
        } else {
            None
        };

        let template_store = create_template_store(&settings.storage, postgres_pool);
        let asset_relay = create_asset_relay(&settings.assets)?;

        Ok(Self {
            settings: Arc::new(settings),
            template_store,
            asset_relay,
            start_time: Instant::now(),
        })
    }
}
