//! # Errata
//!
//! Turns the structured failure records a validation engine produces into
//! human-readable, per-field error messages.
//!
//! ## Overview
//!
//! Each failure names a field path, a dotted failure kind (`string.min`),
//! and a context of placeholder values. Errata picks a message template for
//! it from a layered table (field-specific override, then kind default, then
//! a generic fallback), fills in `{#name}` placeholders, and normalizes the
//! result. Formatting is total: every failure produces exactly one message,
//! in input order, and nothing in this crate panics or returns an error on
//! bad templates or missing context.
//!
//! ## Core Types
//!
//! - [`FailureItem`]: one failure reported by the engine (path, kind, context)
//! - [`MessageTable`]: immutable lookup key → template table, with defaults and merging
//! - [`resolve`]: the layered template lookup
//! - [`format`] / [`ErrorFormatter`]: substitution, normalization, assembly
//! - [`FormattedError`] / [`ErrorReport`]: the output
//! - [`HumanValidator`]: wraps any [`FailureSource`] and explains its failures
//!
//! ## Example
//!
//! ```rust
//! use errata::{format, FailureItem, FieldPath, MessageTable};
//!
//! let table = MessageTable::defaults()
//!     .merge(&MessageTable::from_iter([("password.string.min", "{#label} needs {#limit}+ characters")]));
//!
//! let errors = format(
//!     &[
//!         FailureItem::new(FieldPath::from_field("password"), "string.min").with_context("limit", 12),
//!         FailureItem::new(FieldPath::from_field("email"), "string.email"),
//!     ],
//!     &table,
//! );
//!
//! assert_eq!(errors[0].message, "Password needs 12+ characters.");
//! assert_eq!(errors[1].message, "Email must be a valid email address.");
//! ```

pub mod error;
pub mod failure;
pub mod formatter;
pub mod interop;
pub mod messages;
pub mod path;
pub mod resolver;
pub mod validator;

#[cfg(feature = "effect")]
pub mod effect;

pub use error::{ErrorReport, FormattedError};
pub use failure::{render_value, FailureItem};
pub use formatter::{format, ErrorFormatter, FormatOptions};
pub use interop::{failures_from_json, DetailError, ToJson};
pub use messages::{MessageTable, TableError};
pub use path::{FieldPath, PathSegment};
pub use resolver::{lookup, resolve, Resolution, FALLBACK_TEMPLATE};
pub use validator::{FailureSource, HumanValidator};

/// Type alias for validation results carrying a formatted report.
pub type ValidationResult<T> = stillwater::Validation<T, ErrorReport>;
