//! Stored layout templates.
//!
//! This module provides:
//! - The `Template` entity and its listing category partition
//! - The `TemplateStore` persistence trait consumed by the API layer
//! - In-memory (DashMap) and PostgreSQL (sqlx) store backends
//! - A config-driven factory selecting the backend at startup
//!
//! Storage sits strictly above the render engine in the call graph; the
//! engine only ever consumes fragments the caller hands it.

mod factory;
mod memory_store;
mod postgres_store;
mod store;
mod types;

pub use factory::create_template_store;
pub use memory_store::MemoryTemplateStore;
pub use postgres_store::PostgresTemplateStore;
pub use store::TemplateStore;
pub use types::{
    NewTemplate, Template, TemplateCategory, TemplateFilter, TemplateListResponse, TemplateResult,
    TemplateStoreError, TemplateSummary,
};
