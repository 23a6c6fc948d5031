//! Template entity, category, and filter types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Template store error type.
#[derive(Debug, Error)]
pub enum TemplateStoreError {
    #[error("Invalid template: {0}")]
    InvalidTemplate(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Result type for template store operations.
pub type TemplateResult<T> = Result<T, TemplateStoreError>;

/// Listing partition for stored templates.
///
/// `constant` marks built-in/curated layouts, `custom` user-authored ones.
/// The category only scopes listings; it has no rendering semantics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateCategory {
    Constant,
    #[default]
    Custom,
}

impl TemplateCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateCategory::Constant => "constant",
            TemplateCategory::Custom => "custom",
        }
    }
}

impl std::str::FromStr for TemplateCategory {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "constant" => Ok(TemplateCategory::Constant),
            "custom" => Ok(TemplateCategory::Custom),
            _ => Err(()),
        }
    }
}

/// A stored layout template.
///
/// Identity and creation time are assigned by the store on save. Rendering
/// never mutates the stored record; the engine only consumes the fragment
/// strings it is handed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Template {
    /// Store-assigned identifier.
    pub id: Uuid,

    /// Display name.
    pub name: String,

    /// Markup fragment; the only fragment subject to substitution.
    pub markup_body: String,

    /// Style fragment, copied verbatim at render time.
    #[serde(default)]
    pub style_rules: String,

    /// Script fragment, copied verbatim at render time.
    #[serde(default)]
    pub script_body: String,

    /// Default/example variable values captured by the editor.
    #[serde(default)]
    pub variables: serde_json::Map<String, serde_json::Value>,

    /// Listing partition.
    #[serde(default)]
    pub category: TemplateCategory,

    /// Creation timestamp, assigned by the store.
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

/// A template draft as submitted by the editor, before the store assigns
/// identity.
#[derive(Debug, Clone, Deserialize)]
pub struct NewTemplate {
    pub name: String,

    pub markup_body: String,

    #[serde(default)]
    pub style_rules: String,

    #[serde(default)]
    pub script_body: String,

    #[serde(default)]
    pub variables: serde_json::Map<String, serde_json::Value>,

    #[serde(default)]
    pub category: TemplateCategory,
}

impl NewTemplate {
    /// Validate the draft before persisting.
    pub fn validate(&self) -> TemplateResult<()> {
        if self.name.is_empty() || self.name.len() > 256 {
            return Err(TemplateStoreError::InvalidTemplate(
                "name must be 1-256 characters".to_string(),
            ));
        }

        if self.markup_body.is_empty() {
            return Err(TemplateStoreError::InvalidTemplate(
                "markup body must be non-empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Promote the draft to a stored entity with fresh identity.
    pub(crate) fn into_template(self) -> Template {
        Template {
            id: Uuid::new_v4(),
            name: self.name,
            markup_body: self.markup_body,
            style_rules: self.style_rules,
            script_body: self.script_body,
            variables: self.variables,
            category: self.category,
            created_at: Utc::now(),
        }
    }
}

/// Exact-match filter over stored templates.
#[derive(Debug, Clone, Copy, Default)]
pub struct TemplateFilter {
    pub category: Option<TemplateCategory>,
}

impl TemplateFilter {
    pub fn by_category(category: TemplateCategory) -> Self {
        Self {
            category: Some(category),
        }
    }

    pub fn matches(&self, template: &Template) -> bool {
        self.category.map_or(true, |c| template.category == c)
    }
}

/// Listing projection: the fields the editor's gallery needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateSummary {
    pub name: String,
    pub markup_body: String,
}

impl From<&Template> for TemplateSummary {
    fn from(template: &Template) -> Self {
        Self {
            name: template.name.clone(),
            markup_body: template.markup_body.clone(),
        }
    }
}

/// Response for listing templates.
#[derive(Debug, Serialize)]
pub struct TemplateListResponse {
    /// Listing projections in creation order.
    pub templates: Vec<TemplateSummary>,

    /// Total count.
    pub total: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str, markup: &str) -> NewTemplate {
        NewTemplate {
            name: name.to_string(),
            markup_body: markup.to_string(),
            style_rules: String::new(),
            script_body: String::new(),
            variables: serde_json::Map::new(),
            category: TemplateCategory::default(),
        }
    }

    #[test]
    fn test_validate_accepts_minimal_draft() {
        assert!(draft("Welcome", "<p>hi</p>").validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_name() {
        let result = draft("", "<p>hi</p>").validate();
        assert!(matches!(
            result,
            Err(TemplateStoreError::InvalidTemplate(_))
        ));
    }

    #[test]
    fn test_validate_rejects_empty_markup() {
        let result = draft("Welcome", "").validate();
        assert!(matches!(
            result,
            Err(TemplateStoreError::InvalidTemplate(_))
        ));
    }

    #[test]
    fn test_into_template_assigns_identity() {
        let first = draft("Welcome", "<p>hi</p>").into_template();
        let second = draft("Welcome", "<p>hi</p>").into_template();
        assert_ne!(first.id, second.id);
        assert_eq!(first.category, TemplateCategory::Custom);
    }

    #[test]
    fn test_filter_matches_category() {
        let mut template = draft("Welcome", "<p>hi</p>").into_template();
        template.category = TemplateCategory::Constant;

        assert!(TemplateFilter::default().matches(&template));
        assert!(TemplateFilter::by_category(TemplateCategory::Constant).matches(&template));
        assert!(!TemplateFilter::by_category(TemplateCategory::Custom).matches(&template));
    }

    #[test]
    fn test_category_serde_names() {
        assert_eq!(
            serde_json::to_string(&TemplateCategory::Constant).unwrap(),
            "\"constant\""
        );
        assert_eq!("custom".parse::<TemplateCategory>().unwrap(), TemplateCategory::Custom);
        assert!("builtin".parse::<TemplateCategory>().is_err());
    }

    #[test]
    fn test_summary_projection() {
        let mut template = draft("Welcome", "<p>hi</p>").into_template();
        template.style_rules = "p{}".to_string();

        let summary = TemplateSummary::from(&template);
        assert_eq!(summary.name, "Welcome");
        assert_eq!(summary.markup_body, "<p>hi</p>");
    }
}
