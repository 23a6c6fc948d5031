//! PostgreSQL-backed template store.
//!
//! Persistent implementation of the `TemplateStore` trait. Fragments are
//! stored as plain text and example variables as JSONB.
//!
//! Table structure:
//!
//! ```sql
//! CREATE TABLE email_templates (
//!     id          UUID PRIMARY KEY,
//!     name        TEXT NOT NULL,
//!     markup_body TEXT NOT NULL,
//!     style_rules TEXT NOT NULL DEFAULT '',
//!     script_body TEXT NOT NULL DEFAULT '',
//!     variables   JSONB NOT NULL DEFAULT '{}',
//!     category    TEXT NOT NULL DEFAULT 'custom',
//!     created_at  TIMESTAMPTZ NOT NULL DEFAULT NOW()
//! );
//! ```

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::metrics::{StoreMetrics, TEMPLATES_SAVED_TOTAL};

use super::store::TemplateStore;
use super::types::{NewTemplate, Template, TemplateFilter, TemplateResult, TemplateSummary};

type TemplateRow = (
    Uuid,
    String,
    String,
    String,
    String,
    serde_json::Value,
    String,
    DateTime<Utc>,
);

/// PostgreSQL template store.
pub struct PostgresTemplateStore {
    pool: PgPool,
}

impl PostgresTemplateStore {
    /// Create a store over an existing connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn row_to_template(row: TemplateRow) -> Template {
    let (id, name, markup_body, style_rules, script_body, variables, category, created_at) = row;

    let variables = match variables {
        serde_json::Value::Object(map) => map,
        _ => serde_json::Map::new(),
    };

    Template {
        id,
        name,
        markup_body,
        style_rules,
        script_body,
        variables,
        // Unknown category values read back as the default partition.
        category: category.parse().unwrap_or_default(),
        created_at,
    }
}

#[async_trait]
impl TemplateStore for PostgresTemplateStore {
    async fn save(&self, template: NewTemplate) -> TemplateResult<Template> {
        let _timer = StoreMetrics::operation_timer("postgres", "save");

        template.validate()?;
        let template = template.into_template();
        let variables = serde_json::Value::Object(template.variables.clone());

        sqlx::query(
            r#"
            INSERT INTO email_templates
                (id, name, markup_body, style_rules, script_body, variables, category, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(template.id)
        .bind(&template.name)
        .bind(&template.markup_body)
        .bind(&template.style_rules)
        .bind(&template.script_body)
        .bind(&variables)
        .bind(template.category.as_str())
        .bind(template.created_at)
        .execute(&self.pool)
        .await
        .inspect_err(|_| StoreMetrics::record_error("postgres", "save"))?;

        TEMPLATES_SAVED_TOTAL
            .with_label_values(&[template.category.as_str()])
            .inc();

        tracing::debug!(
            template_id = %template.id,
            name = %template.name,
            category = template.category.as_str(),
            "Template saved"
        );

        Ok(template)
    }

    async fn find(&self, filter: TemplateFilter) -> TemplateResult<Vec<Template>> {
        let _timer = StoreMetrics::operation_timer("postgres", "find");

        let rows: Vec<TemplateRow> = match filter.category {
            Some(category) => {
                sqlx::query_as(
                    r#"
                    SELECT id, name, markup_body, style_rules, script_body, variables, category, created_at
                    FROM email_templates
                    WHERE category = $1
                    ORDER BY created_at, id
                    "#,
                )
                .bind(category.as_str())
                .fetch_all(&self.pool)
                .await
            }
            None => {
                sqlx::query_as(
                    r#"
                    SELECT id, name, markup_body, style_rules, script_body, variables, category, created_at
                    FROM email_templates
                    ORDER BY created_at, id
                    "#,
                )
                .fetch_all(&self.pool)
                .await
            }
        }
        .inspect_err(|_| StoreMetrics::record_error("postgres", "find"))?;

        Ok(rows.into_iter().map(row_to_template).collect())
    }

    async fn summaries(&self, filter: TemplateFilter) -> TemplateResult<Vec<TemplateSummary>> {
        let _timer = StoreMetrics::operation_timer("postgres", "summaries");

        let rows: Vec<(String, String)> = match filter.category {
            Some(category) => {
                sqlx::query_as(
                    r#"
                    SELECT name, markup_body
                    FROM email_templates
                    WHERE category = $1
                    ORDER BY created_at, id
                    "#,
                )
                .bind(category.as_str())
                .fetch_all(&self.pool)
                .await
            }
            None => {
                sqlx::query_as(
                    r#"
                    SELECT name, markup_body
                    FROM email_templates
                    ORDER BY created_at, id
                    "#,
                )
                .fetch_all(&self.pool)
                .await
            }
        }
        .inspect_err(|_| StoreMetrics::record_error("postgres", "summaries"))?;

        Ok(rows
            .into_iter()
            .map(|(name, markup_body)| TemplateSummary { name, markup_body })
            .collect())
    }

    async fn count(&self) -> TemplateResult<usize> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM email_templates")
            .fetch_one(&self.pool)
            .await
            .inspect_err(|_| StoreMetrics::record_error("postgres", "count"))?;

        Ok(count as usize)
    }

    fn backend_name(&self) -> &'static str {
        "postgres"
    }
}
