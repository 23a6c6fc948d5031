//! Template persistence endpoints.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

use crate::error::Result;
use crate::metrics::TEMPLATE_LISTINGS_TOTAL;
use crate::server::AppState;
use crate::template::{
    NewTemplate, Template, TemplateCategory, TemplateFilter, TemplateListResponse,
};

#[derive(Debug, Deserialize)]
pub struct ListTemplatesQuery {
    pub category: Option<TemplateCategory>,
}

/// POST /api/v1/templates - Save a template
#[tracing::instrument(
    name = "http.save_template",
    skip(state, request),
    fields(name = %request.name, category = request.category.as_str())
)]
pub async fn save_template(
    State(state): State<AppState>,
    Json(request): Json<NewTemplate>,
) -> Result<(StatusCode, Json<Template>)> {
    let saved = state.template_store.save(request).await?;
    Ok((StatusCode::CREATED, Json(saved)))
}

/// GET /api/v1/templates - List stored templates, optionally by category
///
/// Returns the `{name, markup_body}` listing projection; no substitution
/// happens here. An empty listing is an empty array, not an error.
#[tracing::instrument(name = "http.list_templates", skip(state))]
pub async fn list_templates(
    State(state): State<AppState>,
    Query(query): Query<ListTemplatesQuery>,
) -> Result<Json<TemplateListResponse>> {
    let filter = TemplateFilter {
        category: query.category,
    };

    let templates = state.template_store.summaries(filter).await?;
    TEMPLATE_LISTINGS_TOTAL.inc();

    let total = templates.len();
    Ok(Json(TemplateListResponse { templates, total }))
}
