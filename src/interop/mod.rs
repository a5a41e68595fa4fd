//! Interoperability with validation engines and response bodies.
//!
//! This module adapts engine failure records expressed as JSON into
//! [`FailureItem`](crate::FailureItem)s, and renders formatted errors back
//! out as JSON.

pub mod json;

pub use json::{failures_from_json, DetailError, ToJson};
