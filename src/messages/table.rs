//! The message template table.

use indexmap::IndexMap;
use serde_json::Value;

use super::defaults::DEFAULT_MESSAGES;

/// An immutable mapping from lookup key to message template.
///
/// A lookup key is either a bare failure kind (`string.min`) or a
/// field-qualified kind (`name.string.min`). Both live side by side in the
/// same flat map. Templates may contain `{#name}` placeholders.
///
/// Nothing in this crate mutates a table after construction. Layering is
/// done with [`MessageTable::merge`], which returns a new table.
///
/// # Example
///
/// ```rust
/// use errata::MessageTable;
///
/// let table = MessageTable::defaults()
///     .merge(&MessageTable::from_iter([("string.min", "Too short")]));
///
/// assert_eq!(table.get("string.min"), Some("Too short"));
/// assert_eq!(table.get("string.max"), MessageTable::defaults().get("string.max"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageTable {
    entries: IndexMap<String, String>,
}

impl MessageTable {
    /// Creates an empty table. Every lookup against it falls back.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a table holding the built-in default templates.
    pub fn defaults() -> Self {
        DEFAULT_MESSAGES.iter().copied().collect()
    }

    /// Returns the template stored under `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Returns true if the table holds a template for `key`.
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Returns the number of templates in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the table holds no templates.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(key, template)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Returns a new table with every entry of `overrides` layered on top.
    ///
    /// This is a flat key-wise union: keys present in `overrides` replace
    /// ours, keys absent from it survive unchanged. Neither input is
    /// modified. Replaced keys keep their original position.
    pub fn merge(&self, overrides: &MessageTable) -> MessageTable {
        let mut entries = self.entries.clone();
        for (key, template) in &overrides.entries {
            entries.insert(key.clone(), template.clone());
        }
        MessageTable { entries }
    }

    /// Builds a table from a JSON object of string templates.
    ///
    /// # Errors
    ///
    /// Returns `TableError::NotAnObject` if `json` is not an object and
    /// `TableError::NonStringTemplate` for the first entry whose value is
    /// not a string.
    ///
    /// # Example
    ///
    /// ```rust
    /// use errata::MessageTable;
    /// use serde_json::json;
    ///
    /// let table = MessageTable::from_json(&json!({
    ///     "email.string.email": "Please enter a real email address."
    /// })).unwrap();
    ///
    /// assert_eq!(table.len(), 1);
    /// assert!(MessageTable::from_json(&json!(["nope"])).is_err());
    /// ```
    pub fn from_json(json: &Value) -> Result<Self, TableError> {
        let object = json.as_object().ok_or(TableError::NotAnObject)?;

        let mut entries = IndexMap::with_capacity(object.len());
        for (key, value) in object {
            let template = value
                .as_str()
                .ok_or_else(|| TableError::NonStringTemplate(key.clone()))?;
            entries.insert(key.clone(), template.to_string());
        }
        Ok(Self { entries })
    }
}

impl<K, V> FromIterator<(K, V)> for MessageTable
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Errors that can occur when building a table from JSON.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TableError {
    /// The root value was not a JSON object.
    #[error("message table must be a JSON object")]
    NotAnObject,

    /// An entry held something other than a string.
    #[error("template for '{0}' must be a string")]
    NonStringTemplate(String),
}
