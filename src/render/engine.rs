//! The render entry point: substitution followed by document assembly.

use super::compose::compose_document;
use super::substitute::substitute_variables;
use super::types::{LayoutFragments, RenderError, RenderResult, VariableMap};

/// Render layout fragments into a single self-contained HTML document.
///
/// Substitutes `{{name}}` tokens in the markup body (and only there), then
/// wraps the result together with the verbatim style and script fragments
/// into the fixed document skeleton.
///
/// # Errors
///
/// Returns [`RenderError::MissingMarkup`] when the markup body is empty.
/// This is a caller contract violation — required-field validation belongs
/// in the layer above — and the only error the engine can produce.
pub fn render(fragments: &LayoutFragments, variables: &VariableMap) -> RenderResult<String> {
    if fragments.markup_body.is_empty() {
        return Err(RenderError::MissingMarkup);
    }

    let body = substitute_variables(&fragments.markup_body, variables);

    Ok(compose_document(
        &body,
        &fragments.style_rules,
        &fragments.script_body,
    ))
}
