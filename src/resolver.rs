//! Message template resolution.
//!
//! Resolution is a layered lookup against a [`MessageTable`]:
//!
//! 1. `"{field_key}.{kind}"`, a field-specific override
//! 2. `"{kind}"`, the kind-level default
//! 3. a generated `"{field_key} is invalid."` fallback
//!
//! Resolution is total and never touches the table beyond reading it.

use std::borrow::Cow;

use crate::messages::MessageTable;

/// Template used when neither an override nor a default exists.
pub const FALLBACK_TEMPLATE: &str = "{#label} is invalid.";

/// Which layer of the table satisfied a lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution<'a> {
    /// A `field.kind` entry matched.
    Override(&'a str),
    /// A bare `kind` entry matched.
    Default(&'a str),
    /// Nothing matched.
    Fallback,
}

impl<'a> Resolution<'a> {
    /// Returns the template text, using [`FALLBACK_TEMPLATE`] for a miss.
    pub fn template(&self) -> &'a str {
        match self {
            Resolution::Override(t) | Resolution::Default(t) => t,
            Resolution::Fallback => FALLBACK_TEMPLATE,
        }
    }

    /// Returns true if the template came from the table.
    pub fn is_from_table(&self) -> bool {
        !matches!(self, Resolution::Fallback)
    }
}

/// Looks up the template layer that applies to `field_key` and `kind`.
///
/// An empty `field_key` skips the override layer, since `".{kind}"` can
/// never be a meaningful override.
pub fn lookup<'a>(field_key: &str, kind: &str, table: &'a MessageTable) -> Resolution<'a> {
    let overridden = if field_key.is_empty() {
        None
    } else {
        table.get(&format!("{}.{}", field_key, kind))
    };

    let resolution = match (overridden, table.get(kind)) {
        (Some(template), _) => Resolution::Override(template),
        (None, Some(template)) => Resolution::Default(template),
        (None, None) => Resolution::Fallback,
    };

    tracing::trace!(
        field = field_key,
        kind,
        layer = ?resolution,
        "resolved message template"
    );
    resolution
}

/// Resolves the template string for `field_key` and `kind`.
///
/// # Example
///
/// ```rust
/// use errata::{resolve, MessageTable};
///
/// let table = MessageTable::from_iter([
///     ("name.string.min", "A"),
///     ("string.min", "B"),
/// ]);
///
/// assert_eq!(resolve("name", "string.min", &table), "A");
/// assert_eq!(resolve("title", "string.min", &table), "B");
/// assert_eq!(resolve("age", "number.base", &table), "age is invalid.");
/// ```
pub fn resolve<'a>(field_key: &str, kind: &str, table: &'a MessageTable) -> Cow<'a, str> {
    match lookup(field_key, kind, table) {
        Resolution::Override(t) | Resolution::Default(t) => Cow::Borrowed(t),
        Resolution::Fallback => Cow::Owned(format!("{} is invalid.", field_key)),
    }
}
