//! Placeholder substitution and message normalization.
//!
//! Every function here is total: malformed templates and missing context
//! degrade to literal text, never to an error.

use std::sync::OnceLock;

use regex::{Captures, Regex};

fn placeholder_regex() -> &'static Regex {
    static PLACEHOLDER: OnceLock<Regex> = OnceLock::new();
    PLACEHOLDER.get_or_init(|| Regex::new(r"\{#([^{}]+)\}").expect("placeholder pattern is valid"))
}

/// Replaces every `{#name}` placeholder for which `lookup` yields a value.
///
/// The template is scanned once, so substituted values are never themselves
/// treated as placeholders. Placeholders `lookup` does not know stay in the
/// output verbatim.
///
/// # Example
///
/// ```rust
/// use errata::formatter::substitute;
///
/// let out = substitute("{#label} needs {#limit}, not {#got}", |name| match name {
///     "label" => Some("name".to_string()),
///     "limit" => Some("5".to_string()),
///     _ => None,
/// });
/// assert_eq!(out, "name needs 5, not {#got}");
/// ```
pub fn substitute<F>(template: &str, lookup: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    placeholder_regex()
        .replace_all(template, |caps: &Captures<'_>| {
            lookup(&caps[1]).unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}

/// Removes a leading echo of `name` followed by whitespace.
///
/// Matching is case-insensitive and anchored at the start. An empty name
/// never matches, and nothing is removed if it would leave the message empty.
///
/// ```rust
/// use errata::formatter::strip_field_echo;
///
/// assert_eq!(strip_field_echo("name must not be empty", "name"), "must not be empty");
/// assert_eq!(strip_field_echo("Name  is taken", "name"), "is taken");
/// assert_eq!(strip_field_echo("names are listed", "name"), "names are listed");
/// assert_eq!(strip_field_echo("name ", "name"), "name ");
/// ```
pub fn strip_field_echo<'a>(message: &'a str, name: &str) -> &'a str {
    if name.is_empty() {
        return message;
    }

    let mut expected = name.chars();
    let mut end = 0;
    for (idx, ch) in message.char_indices() {
        match expected.next() {
            Some(want) if ch.to_lowercase().eq(want.to_lowercase()) => end = idx + ch.len_utf8(),
            Some(_) => return message,
            None => break,
        }
    }
    if expected.next().is_some() {
        return message;
    }

    let rest = &message[end..];
    if !rest.starts_with(char::is_whitespace) {
        return message;
    }
    match rest.trim_start() {
        "" => message,
        remainder => remainder,
    }
}

/// Uppercases the first character and leaves the rest unchanged.
///
/// ```rust
/// use errata::formatter::sentence_case;
///
/// assert_eq!(sentence_case("must not be empty."), "Must not be empty.");
/// assert_eq!(sentence_case(&sentence_case("über")), "Über");
/// ```
pub fn sentence_case(message: &str) -> String {
    let mut chars = message.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Appends a period unless the message already ends in `.`, `!` or `?`.
///
/// Trailing whitespace is dropped first. An empty message stays empty.
pub fn ensure_terminal_punctuation(message: &str) -> String {
    let trimmed = message.trim_end();
    if trimmed.is_empty() || trimmed.ends_with(['.', '!', '?']) {
        trimmed.to_string()
    } else {
        format!("{}.", trimmed)
    }
}
