//! Layout composition and variable substitution engine.
//!
//! This module is the core of the service:
//! - [`LayoutFragments`] — the three raw fragment strings (markup, styles, script)
//! - [`VariableMap`] — an explicitly ordered list of `(name, value)` pairs
//! - [`render`] — pure function producing one self-contained HTML document
//!
//! The engine performs no I/O and holds no state; every call is independent
//! and may run concurrently with any number of other calls.
//!
//! # Example
//!
//! ```ignore
//! let fragments = LayoutFragments::new("<p>Hello {{name}}</p>")
//!     .with_styles("p { color: red }");
//!
//! let mut variables = VariableMap::new();
//! variables.push("name", "Ada");
//!
//! let document = render(&fragments, &variables)?;
//! assert!(document.contains("<p>Hello Ada</p>"));
//! ```

mod compose;
mod engine;
mod substitute;
mod types;

pub use compose::compose_document;
pub use engine::render;
pub use substitute::substitute_variables;
pub use types::{LayoutFragments, RenderError, RenderResult, VariableMap};
