//! Template store factory.

use std::sync::Arc;

use sqlx::PgPool;

use crate::config::StorageConfig;

use super::memory_store::MemoryTemplateStore;
use super::postgres_store::PostgresTemplateStore;
use super::store::TemplateStore;

/// Create a template store based on configuration.
///
/// Returns the implementation selected by the `backend` setting:
/// - `"postgres"`: a `PostgresTemplateStore` if a connection pool is provided
/// - `"memory"` (default): a `MemoryTemplateStore`
pub fn create_template_store(
    settings: &StorageConfig,
    postgres_pool: Option<PgPool>,
) -> Arc<dyn TemplateStore> {
    match settings.backend.as_str() {
        "postgres" => {
            if let Some(pool) = postgres_pool {
                tracing::info!(backend = "postgres", "Creating PostgreSQL template store");
                Arc::new(PostgresTemplateStore::new(pool))
            } else {
                tracing::warn!(
                    "PostgreSQL backend requested but no pool provided, falling back to memory"
                );
                Arc::new(MemoryTemplateStore::new())
            }
        }
        _ => {
            tracing::info!(backend = "memory", "Creating memory template store");
            Arc::new(MemoryTemplateStore::new())
        }
    }
}
