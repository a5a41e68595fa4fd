//! Formatted, human-readable validation errors.
//!
//! This module provides [`FormattedError`] for a single rendered failure and
//! [`ErrorReport`] for accumulating several of them.

use std::fmt::{self, Display};

use indexmap::IndexMap;
use stillwater::prelude::*;

/// A single failure rendered into a readable message.
///
/// - **field**: flat, dot-joined field key
/// - **kind**: the upstream failure kind, unchanged
/// - **message**: the substituted, normalized message
///
/// # Example
///
/// ```rust
/// use errata::FormattedError;
///
/// let error = FormattedError::new("name", "string.min", "Name is too short.");
/// assert_eq!(error.to_string(), "name: Name is too short.");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedError {
    /// Dot-joined key of the failing field.
    pub field: String,
    /// The failure kind reported by the engine.
    pub kind: String,
    /// Final human-readable message.
    pub message: String,
}

impl FormattedError {
    /// Creates a formatted error.
    pub fn new(
        field: impl Into<String>,
        kind: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            kind: kind.into(),
            message: message.into(),
        }
    }
}

impl Display for FormattedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.field.is_empty() {
            write!(f, "(root): {}", self.message)
        } else {
            write!(f, "{}: {}", self.field, self.message)
        }
    }
}

impl std::error::Error for FormattedError {}

const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<FormattedError>();
    assert_sync::<FormattedError>();
};

/// A non-empty, ordered collection of formatted errors.
///
/// `ErrorReport` is the failure side of
/// [`HumanValidator::validate`](crate::HumanValidator::validate). Order
/// follows the order in which the engine reported its failures.
///
/// # Combining Reports
///
/// ```rust
/// use errata::{ErrorReport, FormattedError};
/// use stillwater::prelude::*;
///
/// let a = ErrorReport::single(FormattedError::new("name", "string.empty", "Name is required."));
/// let b = ErrorReport::single(FormattedError::new("age", "number.base", "Age must be a number."));
///
/// let combined = a.combine(b);
/// assert_eq!(combined.len(), 2);
/// assert_eq!(combined.first().field, "name");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorReport(NonEmptyVec<FormattedError>);

impl ErrorReport {
    /// Creates a report containing a single error.
    pub fn single(error: FormattedError) -> Self {
        Self(NonEmptyVec::singleton(error))
    }

    /// Creates a report from a `NonEmptyVec` of errors.
    pub fn from_non_empty(errors: NonEmptyVec<FormattedError>) -> Self {
        Self(errors)
    }

    /// Creates a report from formatter output, or `None` if it is empty.
    pub fn from_vec(errors: Vec<FormattedError>) -> Option<Self> {
        NonEmptyVec::from_vec(errors).map(Self)
    }

    /// Returns the number of errors in the report.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; a report holds at least one error.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns an iterator over the errors in order.
    pub fn iter(&self) -> impl Iterator<Item = &FormattedError> {
        self.0.iter()
    }

    /// Returns the first error.
    pub fn first(&self) -> &FormattedError {
        self.0.head()
    }

    /// Returns every error reported for `field`.
    pub fn at_field(&self, field: &str) -> Vec<&FormattedError> {
        self.0.iter().filter(|e| e.field == field).collect()
    }

    /// Returns every error of the given failure kind.
    pub fn with_kind(&self, kind: &str) -> Vec<&FormattedError> {
        self.0.iter().filter(|e| e.kind == kind).collect()
    }

    /// Returns the distinct field keys, in first-seen order.
    pub fn fields(&self) -> Vec<&str> {
        self.by_field_ref().into_keys().collect()
    }

    /// Groups messages by field key.
    ///
    /// Fields appear in first-seen order and each field's messages keep
    /// their report order.
    ///
    /// ```rust
    /// use errata::{ErrorReport, FormattedError};
    ///
    /// let report = ErrorReport::from_vec(vec![
    ///     FormattedError::new("name", "string.min", "Too short."),
    ///     FormattedError::new("age", "number.base", "Age must be a number."),
    ///     FormattedError::new("name", "string.alphanum", "Letters only."),
    /// ]).unwrap();
    ///
    /// let grouped = report.by_field();
    /// assert_eq!(grouped["name"], vec!["Too short.", "Letters only."]);
    /// assert_eq!(grouped.keys().collect::<Vec<_>>(), vec!["name", "age"]);
    /// ```
    pub fn by_field(&self) -> IndexMap<String, Vec<String>> {
        self.by_field_ref()
            .into_iter()
            .map(|(field, messages)| {
                (
                    field.to_string(),
                    messages.into_iter().map(str::to_string).collect(),
                )
            })
            .collect()
    }

    fn by_field_ref(&self) -> IndexMap<&str, Vec<&str>> {
        let mut grouped: IndexMap<&str, Vec<&str>> = IndexMap::new();
        for error in self.0.iter() {
            grouped
                .entry(error.field.as_str())
                .or_default()
                .push(error.message.as_str());
        }
        grouped
    }

    /// Converts this report into a `Vec<FormattedError>`.
    pub fn into_vec(self) -> Vec<FormattedError> {
        self.0.into_vec()
    }

    /// Returns a reference to the underlying `NonEmptyVec`.
    pub fn as_non_empty_vec(&self) -> &NonEmptyVec<FormattedError> {
        &self.0
    }
}

impl Semigroup for ErrorReport {
    fn combine(self, other: Self) -> Self {
        ErrorReport(self.0.combine(other.0))
    }
}

impl Display for ErrorReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Validation failed with {} error(s):", self.len())?;
        for (i, error) in self.iter().enumerate() {
            writeln!(f, "  {}. {}", i + 1, error)?;
        }
        Ok(())
    }
}

impl std::error::Error for ErrorReport {}

impl IntoIterator for ErrorReport {
    type Item = FormattedError;
    type IntoIter = std::vec::IntoIter<FormattedError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_vec().into_iter()
    }
}

impl<'a> IntoIterator for &'a ErrorReport {
    type Item = &'a FormattedError;
    type IntoIter = Box<dyn Iterator<Item = &'a FormattedError> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.0.iter())
    }
}

const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<ErrorReport>();
    assert_sync::<ErrorReport>();
};
