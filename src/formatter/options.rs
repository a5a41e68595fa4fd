//! Formatting options.

use indexmap::IndexMap;

/// Knobs that shape how messages are rendered.
///
/// # Example
///
/// ```rust
/// use errata::FormatOptions;
///
/// let options = FormatOptions::new()
///     .label("dob", "Date of birth")
///     .terminal_punctuation(false);
///
/// assert_eq!(options.label_for("dob"), Some("Date of birth"));
/// assert!(!options.adds_terminal_punctuation());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatOptions {
    labels: IndexMap<String, String>,
    terminal_punctuation: bool,
}

impl FormatOptions {
    /// Creates the default options: no display labels, terminal punctuation on.
    pub fn new() -> Self {
        Self {
            labels: IndexMap::new(),
            terminal_punctuation: true,
        }
    }

    /// Sets the display label used for `{#label}` on `field_key`.
    pub fn label(mut self, field_key: impl Into<String>, display: impl Into<String>) -> Self {
        self.labels.insert(field_key.into(), display.into());
        self
    }

    /// Controls whether a period is appended to messages lacking one.
    pub fn terminal_punctuation(mut self, enabled: bool) -> Self {
        self.terminal_punctuation = enabled;
        self
    }

    /// Returns the configured display label for `field_key`.
    pub fn label_for(&self, field_key: &str) -> Option<&str> {
        self.labels.get(field_key).map(String::as_str)
    }

    /// Returns true if terminal punctuation is enforced.
    pub fn adds_terminal_punctuation(&self) -> bool {
        self.terminal_punctuation
    }
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self::new()
    }
}
