//! Fragment and variable types for the render engine.

use thiserror::Error;

/// Render-specific error type.
///
/// The engine has exactly one failure mode: an absent markup body. Missing
/// variable keys and cascading substitution are defined behaviors, not
/// errors, and the caller layer is expected to validate required fields
/// before invoking the engine.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RenderError {
    #[error("markup body is required and must be non-empty")]
    MissingMarkup,
}

/// Result type for render operations.
pub type RenderResult<T> = Result<T, RenderError>;

/// The three raw fragment strings that define a layout before substitution.
///
/// Fragments are independent, opaque text blobs. The engine never parses
/// them as a markup tree: the markup body is scanned only for `{{name}}`
/// tokens, while styles and script are copied into the output verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LayoutFragments {
    /// Markup body placed inside `<body>`; the only fragment subject to
    /// variable substitution. Required, must be non-empty.
    pub markup_body: String,

    /// Style rules inlined verbatim into a `<style>` element. May be empty.
    pub style_rules: String,

    /// Script body inlined verbatim into a trailing `<script>` element.
    /// May be empty; absence is treated as empty, never as an error.
    pub script_body: String,
}

impl LayoutFragments {
    /// Create fragments from a markup body with empty styles and script.
    pub fn new(markup_body: impl Into<String>) -> Self {
        Self {
            markup_body: markup_body.into(),
            style_rules: String::new(),
            script_body: String::new(),
        }
    }

    /// Attach style rules.
    pub fn with_styles(mut self, style_rules: impl Into<String>) -> Self {
        self.style_rules = style_rules.into();
        self
    }

    /// Attach a script body.
    pub fn with_script(mut self, script_body: impl Into<String>) -> Self {
        self.script_body = script_body.into();
        self
    }
}

/// An insertion-ordered mapping from placeholder name to replacement text.
///
/// Substitution order is observable (see [`substitute_variables`] for the
/// cascading behavior), so the map is an explicit `Vec` of pairs rather
/// than a hash map whose iteration order would vary.
///
/// [`substitute_variables`]: super::substitute_variables
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VariableMap {
    entries: Vec<(String, String)>,
}

impl VariableMap {
    /// Create an empty variable map.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Append an entry. Duplicate names are kept; each occurrence runs as
    /// its own substitution pass in insertion order.
    pub fn push(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.entries.push((name.into(), value.into()));
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, String)> for VariableMap {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<'a, const N: usize> From<[(&'a str, &'a str); N]> for VariableMap {
    fn from(pairs: [(&'a str, &'a str); N]) -> Self {
        pairs
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }
}
