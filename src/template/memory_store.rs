//! In-memory template store backed by DashMap.
//!
//! Templates are lost on service restart; this backend exists for
//! development setups and tests.

use async_trait::async_trait;
use dashmap::DashMap;
use uuid::Uuid;

use crate::metrics::{StoreMetrics, TEMPLATES_SAVED_TOTAL};

use super::store::TemplateStore;
use super::types::{NewTemplate, Template, TemplateFilter, TemplateResult, TemplateSummary};

/// In-memory template store.
pub struct MemoryTemplateStore {
    templates: DashMap<Uuid, Template>,
}

impl Default for MemoryTemplateStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryTemplateStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            templates: DashMap::new(),
        }
    }

    /// Matching templates ordered by creation time, then id so listings
    /// stay deterministic for same-timestamp saves.
    fn collect_ordered(&self, filter: TemplateFilter) -> Vec<Template> {
        let mut matching: Vec<Template> = self
            .templates
            .iter()
            .filter(|entry| filter.matches(entry.value()))
            .map(|entry| entry.value().clone())
            .collect();

        matching.sort_by(|a, b| (a.created_at, a.id).cmp(&(b.created_at, b.id)));
        matching
    }
}

#[async_trait]
impl TemplateStore for MemoryTemplateStore {
    async fn save(&self, template: NewTemplate) -> TemplateResult<Template> {
        let _timer = StoreMetrics::operation_timer("memory", "save");

        template.validate()?;

        let template = template.into_template();
        TEMPLATES_SAVED_TOTAL
            .with_label_values(&[template.category.as_str()])
            .inc();

        tracing::debug!(
            template_id = %template.id,
            name = %template.name,
            category = template.category.as_str(),
            "Template saved"
        );

        self.templates.insert(template.id, template.clone());
        Ok(template)
    }

    async fn find(&self, filter: TemplateFilter) -> TemplateResult<Vec<Template>> {
        let _timer = StoreMetrics::operation_timer("memory", "find");
        Ok(self.collect_ordered(filter))
    }

    async fn summaries(&self, filter: TemplateFilter) -> TemplateResult<Vec<TemplateSummary>> {
        let _timer = StoreMetrics::operation_timer("memory", "summaries");
        Ok(self
            .collect_ordered(filter)
            .iter()
            .map(TemplateSummary::from)
            .collect())
    }

    async fn count(&self) -> TemplateResult<usize> {
        Ok(self.templates.len())
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::types::{TemplateCategory, TemplateStoreError};
    use serde_json::json;

    fn draft(name: &str, category: TemplateCategory) -> NewTemplate {
        let mut variables = serde_json::Map::new();
        variables.insert("name".to_string(), json!("Ada"));

        NewTemplate {
            name: name.to_string(),
            markup_body: format!("<p>{} {{{{name}}}}</p>", name),
            style_rules: "p{margin:0}".to_string(),
            script_body: String::new(),
            variables,
            category,
        }
    }

    #[tokio::test]
    async fn test_save_and_find() {
        let store = MemoryTemplateStore::new();

        let saved = store
            .save(draft("Welcome", TemplateCategory::Custom))
            .await
            .unwrap();
        assert_eq!(saved.name, "Welcome");

        let all = store.find(TemplateFilter::default()).await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].id, saved.id);
    }

    #[tokio::test]
    async fn test_save_rejects_invalid_draft() {
        let store = MemoryTemplateStore::new();

        let mut invalid = draft("Welcome", TemplateCategory::Custom);
        invalid.markup_body.clear();

        let result = store.save(invalid).await;
        assert!(matches!(
            result,
            Err(TemplateStoreError::InvalidTemplate(_))
        ));
        assert_eq!(store.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_find_filters_by_category() {
        let store = MemoryTemplateStore::new();
        store
            .save(draft("Base", TemplateCategory::Constant))
            .await
            .unwrap();
        store
            .save(draft("Mine", TemplateCategory::Custom))
            .await
            .unwrap();

        let constants = store
            .find(TemplateFilter::by_category(TemplateCategory::Constant))
            .await
            .unwrap();
        assert_eq!(constants.len(), 1);
        assert_eq!(constants[0].name, "Base");

        let all = store.find(TemplateFilter::default()).await.unwrap();
        assert_eq!(all.len(), 2);
    }

    #[tokio::test]
    async fn test_find_unmatched_category_is_empty() {
        let store = MemoryTemplateStore::new();
        store
            .save(draft("Mine", TemplateCategory::Custom))
            .await
            .unwrap();

        let constants = store
            .find(TemplateFilter::by_category(TemplateCategory::Constant))
            .await
            .unwrap();
        assert!(constants.is_empty());
    }

    #[tokio::test]
    async fn test_summaries_project_name_and_markup() {
        let store = MemoryTemplateStore::new();
        store
            .save(draft("Welcome", TemplateCategory::Custom))
            .await
            .unwrap();

        let summaries = store.summaries(TemplateFilter::default()).await.unwrap();
        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].name, "Welcome");
        assert!(summaries[0].markup_body.contains("{{name}}"));
    }

    #[tokio::test]
    async fn test_count() {
        let store = MemoryTemplateStore::new();
        for i in 0..3 {
            store
                .save(draft(&format!("Template {}", i), TemplateCategory::Custom))
                .await
                .unwrap();
        }

        assert_eq!(store.count().await.unwrap(), 3);
    }
}
