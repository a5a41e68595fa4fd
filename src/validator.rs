//! Wrapping a validation engine so it reports readable errors.
//!
//! This module provides the [`FailureSource`] seam behind which any
//! validation engine sits, and [`HumanValidator`], which pairs a source
//! with an effective message table and formats whatever the source reports.

use serde_json::Value;
use stillwater::Validation;

use crate::error::ErrorReport;
use crate::failure::FailureItem;
use crate::formatter::{ErrorFormatter, FormatOptions};
use crate::messages::MessageTable;

/// Anything that can check an input and report failures as [`FailureItem`]s.
///
/// Implemented for closures, so adapting an engine is usually a single
/// mapping function from its error type to failure items.
///
/// # Example
///
/// ```rust
/// use errata::{FailureItem, FailureSource, FieldPath};
/// use serde_json::{json, Value};
///
/// let source = |input: &Value| -> Result<Value, Vec<FailureItem>> {
///     if input.get("name").is_some() {
///         Ok(input.clone())
///     } else {
///         Err(vec![FailureItem::new(FieldPath::from_field("name"), "any.required")])
///     }
/// };
///
/// assert!(source.check(&json!({"name": "Ada"})).is_ok());
/// ```
pub trait FailureSource: Send + Sync {
    /// Checks `input`, returning the (possibly coerced) value on success or
    /// the failures in the order the engine found them.
    fn check(&self, input: &Value) -> Result<Value, Vec<FailureItem>>;
}

impl<F> FailureSource for F
where
    F: Fn(&Value) -> Result<Value, Vec<FailureItem>> + Send + Sync,
{
    fn check(&self, input: &Value) -> Result<Value, Vec<FailureItem>> {
        self(input)
    }
}

/// A validation engine paired with the messages used to explain its failures.
///
/// The effective table is built once, when the validator is configured,
/// and never changes afterwards. Validators can be shared across threads.
///
/// # Example
///
/// ```rust
/// use errata::{FailureItem, FieldPath, HumanValidator, MessageTable};
/// use serde_json::{json, Value};
///
/// let validator = HumanValidator::new(|input: &Value| {
///     match input["name"].as_str() {
///         Some(name) if name.len() >= 3 => Ok(input.clone()),
///         _ => Err(vec![
///             FailureItem::new(FieldPath::from_field("name"), "string.min").with_context("limit", 3),
///         ]),
///     }
/// })
/// .with_messages(&MessageTable::from_iter([("string.min", "{#label} is too short")]));
///
/// assert!(validator.validate(&json!({"name": "Ada"})).is_success());
///
/// let report = validator.validate(&json!({"name": "Al"})).into_result().unwrap_err();
/// assert_eq!(report.first().message, "Name is too short.");
/// ```
pub struct HumanValidator<S> {
    source: S,
    formatter: ErrorFormatter,
}

impl<S: FailureSource> HumanValidator<S> {
    /// Creates a validator that explains failures with the default table.
    pub fn new(source: S) -> Self {
        Self {
            source,
            formatter: ErrorFormatter::new(MessageTable::defaults()),
        }
    }

    /// Layers caller messages over the current table.
    ///
    /// Caller keys win; everything else is kept.
    pub fn with_messages(self, messages: &MessageTable) -> Self {
        let table = self.formatter.table().merge(messages);
        let options = self.formatter.options().clone();
        Self {
            source: self.source,
            formatter: ErrorFormatter::new(table).with_options(options),
        }
    }

    /// Replaces the table outright, without the defaults underneath.
    pub fn with_table(self, table: MessageTable) -> Self {
        let options = self.formatter.options().clone();
        Self {
            source: self.source,
            formatter: ErrorFormatter::new(table).with_options(options),
        }
    }

    /// Replaces the formatting options.
    pub fn with_options(self, options: FormatOptions) -> Self {
        Self {
            source: self.source,
            formatter: self.formatter.with_options(options),
        }
    }

    /// Returns the effective message table.
    pub fn table(&self) -> &MessageTable {
        self.formatter.table()
    }

    /// Validates `input`, formatting every reported failure.
    ///
    /// A source that fails without reporting any items is treated as a
    /// success, since there is nothing to explain.
    pub fn validate(&self, input: &Value) -> Validation<Value, ErrorReport> {
        match self.source.check(input) {
            Ok(value) => Validation::Success(value),
            Err(items) => match ErrorReport::from_vec(self.formatter.format(&items)) {
                Some(report) => Validation::Failure(report),
                None => {
                    tracing::debug!("failure source reported no items; treating input as valid");
                    Validation::Success(input.clone())
                }
            },
        }
    }
}
