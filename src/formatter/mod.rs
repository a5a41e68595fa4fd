//! Turning failure items into formatted errors.
//!
//! For each [`FailureItem`], in order, the formatter:
//!
//! 1. joins the path into a field key
//! 2. looks up the template (override, default, fallback)
//! 3. strips a leading echo of the field name from a table template
//! 4. substitutes `{#name}` placeholders from the item's context
//! 5. uppercases the first character
//! 6. appends a period when the message has no terminal punctuation
//!
//! Formatting never fails and never drops or merges items: N items in,
//! N errors out, same order.
//!
//! # Example
//!
//! ```rust
//! use errata::{format, FailureItem, FieldPath, MessageTable};
//!
//! let items = vec![
//!     FailureItem::new(FieldPath::from_field("name"), "string.min").with_context("limit", 5),
//!     FailureItem::new(FieldPath::from_field("age"), "number.base"),
//! ];
//!
//! let errors = format(&items, &MessageTable::defaults());
//! assert_eq!(errors[0].message, "Name must have at least 5 characters.");
//! assert_eq!(errors[1].message, "Age must be a number.");
//! ```

mod normalize;
mod options;

use rayon::prelude::*;

use crate::error::FormattedError;
use crate::failure::FailureItem;
use crate::messages::MessageTable;
use crate::resolver::lookup;

pub use normalize::{ensure_terminal_punctuation, sentence_case, strip_field_echo, substitute};
pub use options::FormatOptions;

/// Name of the implicit placeholder carrying the field's display name.
pub const LABEL_PLACEHOLDER: &str = "label";

/// Label used for `{#label}` when the failure sits at the root.
const ROOT_LABEL: &str = "value";

/// Formats every item against `table` using default options.
///
/// `{#label}` renders as the field key unless a display label applies. A
/// failure at the root has an empty field key, so its `{#label}` renders as
/// `value` ("Value is invalid.") rather than as the empty string. The
/// `field` of the resulting error is still the empty key.
pub fn format(items: &[FailureItem], table: &MessageTable) -> Vec<FormattedError> {
    let options = FormatOptions::default();
    let errors: Vec<FormattedError> = items
        .iter()
        .map(|item| format_item(item, table, &options))
        .collect();
    tracing::debug!(count = errors.len(), "formatted validation failures");
    errors
}

/// Formats a single item.
///
/// Root failures label themselves `value`; see [`format`].
pub fn format_item(
    item: &FailureItem,
    table: &MessageTable,
    options: &FormatOptions,
) -> FormattedError {
    let field = item.field_key();
    let configured = options.label_for(&field);
    let resolution = lookup(&field, &item.kind, table);

    let template = if resolution.is_from_table() {
        let engine_label = item.context_text(LABEL_PLACEHOLDER);
        strip_echoes(
            resolution.template(),
            &[Some(field.as_str()), configured, engine_label.as_deref()],
        )
    } else {
        resolution.template()
    };

    let message = substitute(template, |name| {
        if name == LABEL_PLACEHOLDER {
            Some(display_label(item, &field, configured))
        } else {
            item.context_text(name)
        }
    });

    let message = sentence_case(message.trim_start());
    let message = if options.adds_terminal_punctuation() {
        ensure_terminal_punctuation(&message)
    } else {
        message
    };

    FormattedError::new(field, item.kind.clone(), message)
}

/// Configured label, then the engine's own `label`, then the field key.
fn display_label(item: &FailureItem, field: &str, configured: Option<&str>) -> String {
    if let Some(label) = configured {
        return label.to_string();
    }
    if let Some(label) = item.context_text(LABEL_PLACEHOLDER) {
        return label;
    }
    if field.is_empty() {
        ROOT_LABEL.to_string()
    } else {
        field.to_string()
    }
}

/// Strips the first of `names` that the template echoes.
fn strip_echoes<'a>(template: &'a str, names: &[Option<&str>]) -> &'a str {
    names
        .iter()
        .flatten()
        .map(|name| strip_field_echo(template, name))
        .find(|stripped| stripped.len() != template.len())
        .unwrap_or(template)
}

/// A formatter bound to one effective message table and one set of options.
///
/// # Example
///
/// ```rust
/// use errata::{ErrorFormatter, FailureItem, FieldPath, FormatOptions, MessageTable};
///
/// let formatter = ErrorFormatter::new(MessageTable::defaults())
///     .with_options(FormatOptions::new().label("dob", "Date of birth"));
///
/// let errors = formatter.format(&[FailureItem::new(FieldPath::from_field("dob"), "date.base")]);
/// assert_eq!(errors[0].message, "Date of birth must be a valid date.");
/// ```
#[derive(Debug, Clone, Default)]
pub struct ErrorFormatter {
    table: MessageTable,
    options: FormatOptions,
}

impl ErrorFormatter {
    /// Creates a formatter over `table` with default options.
    pub fn new(table: MessageTable) -> Self {
        Self {
            table,
            options: FormatOptions::default(),
        }
    }

    /// Replaces the formatting options.
    pub fn with_options(mut self, options: FormatOptions) -> Self {
        self.options = options;
        self
    }

    /// Returns the effective message table.
    pub fn table(&self) -> &MessageTable {
        &self.table
    }

    /// Returns the formatting options.
    pub fn options(&self) -> &FormatOptions {
        &self.options
    }

    /// Formats every item, preserving input order.
    pub fn format(&self, items: &[FailureItem]) -> Vec<FormattedError> {
        let errors: Vec<FormattedError> = items
            .iter()
            .map(|item| format_item(item, &self.table, &self.options))
            .collect();
        tracing::debug!(count = errors.len(), "formatted validation failures");
        errors
    }

    /// Formats every item on the rayon pool.
    ///
    /// Produces exactly what [`ErrorFormatter::format`] produces, in the
    /// same order.
    pub fn format_par(&self, items: &[FailureItem]) -> Vec<FormattedError> {
        items
            .par_iter()
            .map(|item| format_item(item, &self.table, &self.options))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::FieldPath;

    fn item(field: &str, kind: &str) -> FailureItem {
        FailureItem::new(FieldPath::from_key(field), kind)
    }

    #[test]
    fn test_placeholder_substitution() {
        let table =
            MessageTable::from_iter([("string.min", "{#label} must have at least {#limit} characters.")]);
        let errors = format(&[item("name", "string.min").with_context("limit", 5)], &table);

        assert_eq!(errors[0].field, "name");
        assert_eq!(errors[0].kind, "string.min");
        assert_eq!(errors[0].message, "Name must have at least 5 characters.");
    }

    #[test]
    fn test_fallback_is_sentence_cased() {
        let errors = format(&[item("age", "number.base")], &MessageTable::new());
        assert_eq!(errors[0].message, "Age is invalid.");
    }

    #[test]
    fn test_fallback_uses_configured_label() {
        let formatter = ErrorFormatter::new(MessageTable::new())
            .with_options(FormatOptions::new().label("age", "Your age"));
        let errors = formatter.format(&[item("age", "number.base")]);
        assert_eq!(errors[0].message, "Your age is invalid.");
    }

    #[test]
    fn test_duplicate_field_name_stripped() {
        let table = MessageTable::from_iter([("string.empty", "name must not be empty")]);
        let errors = format(&[item("name", "string.empty")], &table);
        assert_eq!(errors[0].message, "Must not be empty.");
    }

    #[test]
    fn test_echo_before_label_is_stripped() {
        let table = MessageTable::from_iter([("string.base", "name {#label} must be text")]);
        let errors = format(&[item("name", "string.base")], &table);
        assert_eq!(errors[0].message, "Name must be text.");
    }

    #[test]
    fn test_label_echo_is_stripped() {
        let table = MessageTable::from_iter([("date.base", "Date of birth is not a date")]);
        let formatter = ErrorFormatter::new(table)
            .with_options(FormatOptions::new().label("dob", "date of birth"));
        let errors = formatter.format(&[item("dob", "date.base")]);
        assert_eq!(errors[0].message, "Is not a date.");
    }

    #[test]
    fn test_template_of_only_the_field_name_is_kept() {
        let table = MessageTable::from_iter([("any.invalid", "name ")]);
        let errors = format(&[item("name", "any.invalid")], &table);
        assert_eq!(errors[0].message, "Name.");
    }

    #[test]
    fn test_engine_label_echo_is_stripped() {
        let table = MessageTable::from_iter([("string.email", "email must be a real address")]);
        let errors = format(
            &[item("user.email", "string.email").with_context("label", "email")],
            &table,
        );
        assert_eq!(errors[0].message, "Must be a real address.");
    }

    #[test]
    fn test_context_key_with_space() {
        let table = MessageTable::from_iter([("x.k", "{#first name} needs {#limit}")]);
        let errors = format(
            &[item("a", "x.k")
                .with_context("first name", "Ada")
                .with_context("limit", 2)],
            &table,
        );
        assert_eq!(errors[0].message, "Ada needs 2.");
    }

    #[test]
    fn test_override_precedence() {
        let table = MessageTable::from_iter([("name.string.min", "A"), ("string.min", "B")]);
        let errors = format(
            &[item("name", "string.min"), item("title", "string.min")],
            &table,
        );
        assert_eq!(errors[0].message, "A.");
        assert_eq!(errors[1].message, "B.");
    }

    #[test]
    fn test_unmatched_placeholder_left_literal() {
        let table = MessageTable::from_iter([("number.min", "{#label} must be at least {#limit}.")]);
        let errors = format(&[item("qty", "number.min")], &table);
        assert_eq!(errors[0].message, "Qty must be at least {#limit}.");
    }

    #[test]
    fn test_null_context_renders_empty() {
        let table = MessageTable::from_iter([("any.only", "{#label} must be [{#valids}].")]);
        let errors = format(
            &[item("role", "any.only").with_context("valids", serde_json::Value::Null)],
            &table,
        );
        assert_eq!(errors[0].message, "Role must be [].");
    }

    #[test]
    fn test_context_label_used_without_configuration() {
        let errors = format(
            &[item("user.email", "string.email").with_context("label", "email")],
            &MessageTable::defaults(),
        );
        assert_eq!(errors[0].field, "user.email");
        assert_eq!(errors[0].message, "Email must be a valid email address.");
    }

    #[test]
    fn test_root_failure_uses_value_label() {
        let errors = format(&[FailureItem::new(FieldPath::root(), "object.base")], &MessageTable::defaults());
        assert_eq!(errors[0].field, "");
        assert_eq!(errors[0].message, "Value must be an object.");
    }

    #[test]
    fn test_terminal_punctuation_can_be_disabled() {
        let table = MessageTable::from_iter([("string.min", "Too short")]);
        let formatter =
            ErrorFormatter::new(table).with_options(FormatOptions::new().terminal_punctuation(false));
        let errors = formatter.format(&[item("name", "string.min")]);
        assert_eq!(errors[0].message, "Too short");
    }

    #[test]
    fn test_empty_input() {
        assert!(format(&[], &MessageTable::defaults()).is_empty());
        assert!(ErrorFormatter::default().format_par(&[]).is_empty());
    }

    #[test]
    fn test_format_par_matches_format() {
        let formatter = ErrorFormatter::new(MessageTable::defaults());
        let items: Vec<FailureItem> = (0..200)
            .map(|i| {
                FieldPath::root()
                    .push_field("rows")
                    .push_index(i)
                    .push_field("qty")
            })
            .map(|path| FailureItem::new(path, "number.min").with_context("limit", 1))
            .collect();

        assert_eq!(formatter.format_par(&items), formatter.format(&items));
    }
}
