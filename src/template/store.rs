//! Template store abstraction.

use async_trait::async_trait;

use super::types::{NewTemplate, Template, TemplateFilter, TemplateResult, TemplateSummary};

/// Persistence interface consumed by the API layer.
///
/// The render engine never reaches into storage; it only consumes the
/// fragment strings the caller already holds. This trait sits strictly
/// above the engine in the call graph.
#[async_trait]
pub trait TemplateStore: Send + Sync {
    /// Persist a draft, assigning identity and creation time.
    ///
    /// Returns the stored entity.
    async fn save(&self, template: NewTemplate) -> TemplateResult<Template>;

    /// Fetch full templates matching the filter, in creation order.
    ///
    /// An empty result is an empty vector, not an error.
    async fn find(&self, filter: TemplateFilter) -> TemplateResult<Vec<Template>>;

    /// Fetch the `{name, markup_body}` listing projection for templates
    /// matching the filter, in creation order.
    async fn summaries(&self, filter: TemplateFilter) -> TemplateResult<Vec<TemplateSummary>>;

    /// Number of stored templates.
    async fn count(&self) -> TemplateResult<usize>;

    /// Backend name for health reporting and metric labels.
    fn backend_name(&self) -> &'static str;
}
