//! Raw failure records produced by a validation engine.
//!
//! A [`FailureItem`] is the only input shape the resolver and formatter
//! understand: a path, a dotted failure kind, and a context map of named
//! values used to fill template placeholders.

use indexmap::IndexMap;
use serde_json::Value;

use crate::path::FieldPath;

/// A single failure reported by the validation engine.
///
/// # Example
///
/// ```rust
/// use errata::{FailureItem, FieldPath};
///
/// let item = FailureItem::new(FieldPath::from_field("name"), "string.min")
///     .with_context("limit", 5);
///
/// assert_eq!(item.field_key(), "name");
/// assert_eq!(item.kind, "string.min");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct FailureItem {
    /// Where the failing value lives.
    pub path: FieldPath,
    /// Failure category, e.g. `string.min`.
    pub kind: String,
    /// Placeholder values, keyed by placeholder name.
    pub context: IndexMap<String, Value>,
}

impl FailureItem {
    /// Creates a failure with an empty context.
    pub fn new(path: FieldPath, kind: impl Into<String>) -> Self {
        Self {
            path,
            kind: kind.into(),
            context: IndexMap::new(),
        }
    }

    /// Adds a context value and returns self for chaining.
    pub fn with_context(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.context.insert(key.into(), value.into());
        self
    }

    /// Returns the flat, dot-joined field key for this failure.
    pub fn field_key(&self) -> String {
        self.path.key()
    }

    /// Returns the rendered context value for `key`, if the key is present.
    pub fn context_text(&self, key: &str) -> Option<String> {
        self.context.get(key).map(render_value)
    }
}

/// Renders a context value the way it appears inside a message.
///
/// Strings are inserted verbatim, `null` becomes the empty string, arrays
/// are rendered element-wise and joined with `", "`.
pub fn render_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(items) => items
            .iter()
            .map(render_value)
            .collect::<Vec<_>>()
            .join(", "),
        Value::Object(_) => value.to_string(),
    }
}
