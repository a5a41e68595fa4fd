//! JSON adapters.
//!
//! Engines that report failures as JSON records of the shape
//!
//! ```json
//! { "path": ["items", 0, "sku"], "type": "string.empty", "context": { "label": "sku" } }
//! ```
//!
//! can be plugged in with [`failures_from_json`]. The output side renders
//! formatted errors through the [`ToJson`] trait.

use indexmap::IndexMap;
use serde_json::{json, Map, Value};

use crate::error::{ErrorReport, FormattedError};
use crate::failure::FailureItem;
use crate::path::{FieldPath, PathSegment};

/// Trait for rendering output types as JSON.
pub trait ToJson {
    /// Converts this value into a `serde_json::Value`.
    fn to_json(&self) -> Value;
}

impl ToJson for FormattedError {
    fn to_json(&self) -> Value {
        json!({
            "field": self.field,
            "kind": self.kind,
            "message": self.message,
        })
    }
}

impl ToJson for [FormattedError] {
    fn to_json(&self) -> Value {
        Value::Array(self.iter().map(ToJson::to_json).collect())
    }
}

/// Renders the grouped `{ field: [messages] }` form.
///
/// ```rust
/// use errata::{ErrorReport, FormattedError, ToJson};
/// use serde_json::json;
///
/// let report = ErrorReport::single(FormattedError::new("name", "string.empty", "Name is required."));
/// assert_eq!(report.to_json(), json!({ "name": ["Name is required."] }));
/// ```
impl ToJson for ErrorReport {
    fn to_json(&self) -> Value {
        let grouped: Map<String, Value> = self
            .by_field()
            .into_iter()
            .map(|(field, messages)| (field, json!(messages)))
            .collect();
        Value::Object(grouped)
    }
}

/// Errors that can occur while adapting JSON failure records.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DetailError {
    /// The root was neither an array nor an object with a `details` array.
    #[error("expected an array of failure records or an object with 'details'")]
    NotAList,

    /// A record was not a JSON object.
    #[error("failure record {0} is not an object")]
    NotAnObject(usize),

    /// A record had no string `type`.
    #[error("failure record {0} has no 'type'")]
    MissingKind(usize),

    /// A record's `path` was not an array.
    #[error("failure record {0} has a 'path' that is not an array")]
    InvalidPath(usize),

    /// A path segment was neither a string nor a non-negative integer.
    #[error("failure record {index} has an invalid path segment: {segment}")]
    InvalidSegment {
        /// Position of the record.
        index: usize,
        /// The offending segment, as JSON.
        segment: String,
    },

    /// A record's `context` was not an object.
    #[error("failure record {0} has a 'context' that is not an object")]
    InvalidContext(usize),
}

/// Adapts JSON failure records into [`FailureItem`]s, preserving order.
///
/// Accepts either a bare array of records or an object carrying them under
/// `details`. A record without `path` sits at the root; a record without
/// `context` has an empty context.
///
/// # Errors
///
/// Returns a [`DetailError`] naming the first malformed record.
///
/// # Example
///
/// ```rust
/// use errata::failures_from_json;
/// use serde_json::json;
///
/// let items = failures_from_json(&json!({
///     "details": [
///         { "path": ["tags", 1], "type": "string.max", "context": { "limit": 10 } }
///     ]
/// })).unwrap();
///
/// assert_eq!(items[0].field_key(), "tags.1");
/// assert_eq!(items[0].kind, "string.max");
/// ```
pub fn failures_from_json(json: &Value) -> Result<Vec<FailureItem>, DetailError> {
    let records = match json {
        Value::Array(records) => records,
        Value::Object(obj) => obj
            .get("details")
            .and_then(Value::as_array)
            .ok_or(DetailError::NotAList)?,
        _ => return Err(DetailError::NotAList),
    };

    records
        .iter()
        .enumerate()
        .map(|(index, record)| parse_record(index, record))
        .collect()
}

fn parse_record(index: usize, record: &Value) -> Result<FailureItem, DetailError> {
    let obj = record
        .as_object()
        .ok_or(DetailError::NotAnObject(index))?;

    let kind = obj
        .get("type")
        .and_then(Value::as_str)
        .ok_or(DetailError::MissingKind(index))?;

    let path = match obj.get("path") {
        None | Some(Value::Null) => FieldPath::root(),
        Some(Value::Array(segments)) => segments
            .iter()
            .map(|segment| parse_segment(index, segment))
            .collect::<Result<FieldPath, _>>()?,
        Some(_) => return Err(DetailError::InvalidPath(index)),
    };

    let context = match obj.get("context") {
        None | Some(Value::Null) => IndexMap::new(),
        Some(Value::Object(ctx)) => ctx
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect(),
        Some(_) => return Err(DetailError::InvalidContext(index)),
    };

    Ok(FailureItem {
        path,
        kind: kind.to_string(),
        context,
    })
}

fn parse_segment(index: usize, segment: &Value) -> Result<PathSegment, DetailError> {
    match segment {
        Value::String(name) => Ok(PathSegment::field(name.clone())),
        Value::Number(n) => n
            .as_u64()
            .and_then(|i| usize::try_from(i).ok())
            .map(PathSegment::index)
            .ok_or_else(|| DetailError::InvalidSegment {
                index,
                segment: segment.to_string(),
            }),
        _ => Err(DetailError::InvalidSegment {
            index,
            segment: segment.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_bare_array() {
        let items = failures_from_json(&json!([
            { "path": ["name"], "type": "string.min", "context": { "limit": 3, "label": "name" } },
            { "path": ["age"], "type": "number.base" }
        ]))
        .unwrap();

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].context_text("limit"), Some("3".to_string()));
        assert!(items[1].context.is_empty());
    }

    #[test]
    fn test_missing_path_is_root() {
        let items = failures_from_json(&json!([{ "type": "object.base" }])).unwrap();
        assert!(items[0].path.is_root());
    }

    #[test]
    fn test_rejects_bad_records() {
        assert_eq!(
            failures_from_json(&json!("nope")).unwrap_err(),
            DetailError::NotAList
        );
        assert_eq!(
            failures_from_json(&json!([1])).unwrap_err(),
            DetailError::NotAnObject(0)
        );
        assert_eq!(
            failures_from_json(&json!([{ "path": ["a"] }])).unwrap_err(),
            DetailError::MissingKind(0)
        );
        assert_eq!(
            failures_from_json(&json!([{ "type": "x", "path": "a.b" }])).unwrap_err(),
            DetailError::InvalidPath(0)
        );
        assert_eq!(
            failures_from_json(&json!([{ "type": "x", "context": [] }])).unwrap_err(),
            DetailError::InvalidContext(0)
        );
    }

    #[test]
    fn test_rejects_negative_index() {
        let err = failures_from_json(&json!([
            { "type": "x", "path": ["ok"] },
            { "type": "x", "path": ["items", -1] }
        ]))
        .unwrap_err();

        assert_eq!(
            err,
            DetailError::InvalidSegment {
                index: 1,
                segment: "-1".to_string()
            }
        );
    }

    #[test]
    fn test_formatted_error_json() {
        let error = FormattedError::new("name", "string.min", "Too short.");
        assert_eq!(
            error.to_json(),
            json!({ "field": "name", "kind": "string.min", "message": "Too short." })
        );

        let errors = vec![error];
        assert_eq!(errors.as_slice().to_json()[0]["field"], "name");
    }

    #[test]
    fn test_report_json_groups_by_field() {
        let report = ErrorReport::from_vec(vec![
            FormattedError::new("name", "string.min", "Too short."),
            FormattedError::new("name", "string.alphanum", "Letters only."),
            FormattedError::new("age", "number.base", "Age must be a number."),
        ])
        .unwrap();

        assert_eq!(
            report.to_json(),
            json!({
                "name": ["Too short.", "Letters only."],
                "age": ["Age must be a number."]
            })
        );
    }
}
