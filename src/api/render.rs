//! Layout render endpoint.

use axum::{response::Html, Json};
use serde::Deserialize;

use crate::error::{AppError, Result};
use crate::metrics::RenderMetrics;
use crate::render::{render, LayoutFragments, VariableMap};

/// Render-input contract: markup is required, everything else defaults.
#[derive(Debug, Deserialize)]
pub struct RenderRequest {
    #[serde(default)]
    pub markup_body: Option<String>,

    #[serde(default)]
    pub style_rules: String,

    #[serde(default)]
    pub script_body: String,

    /// JSON object of placeholder values. Key order is preserved through
    /// deserialization and becomes the substitution order.
    #[serde(default)]
    pub variables: serde_json::Map<String, serde_json::Value>,
}

/// Coerce a JSON value to the replacement text inserted into markup.
fn value_to_string(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Number(n) => n.to_string(),
        serde_json::Value::Bool(b) => b.to_string(),
        serde_json::Value::Null => String::new(),
        // Arrays and objects fall back to their JSON representation
        _ => value.to_string(),
    }
}

fn to_variable_map(object: &serde_json::Map<String, serde_json::Value>) -> VariableMap {
    object
        .iter()
        .map(|(name, value)| (name.clone(), value_to_string(value)))
        .collect()
}

/// POST /api/v1/render - Compose a standalone document from fragments
///
/// The engine itself is pure; this handler owns required-field validation
/// and serves the composed document as `text/html`.
#[tracing::instrument(
    name = "http.render_layout",
    skip(request),
    fields(variable_count = request.variables.len())
)]
pub async fn render_layout(Json(request): Json<RenderRequest>) -> Result<Html<String>> {
    let _timer = RenderMetrics::duration_timer();

    let markup_body = match request.markup_body {
        Some(markup) if !markup.is_empty() => markup,
        _ => {
            RenderMetrics::record_failure();
            return Err(AppError::Validation("markup_body is required".to_string()));
        }
    };

    let fragments = LayoutFragments {
        markup_body,
        style_rules: request.style_rules,
        script_body: request.script_body,
    };
    let variables = to_variable_map(&request.variables);

    let document = match render(&fragments, &variables) {
        Ok(document) => document,
        Err(e) => {
            RenderMetrics::record_failure();
            return Err(e.into());
        }
    };

    RenderMetrics::record_success(variables.len(), document.len());

    Ok(Html(document))
}
