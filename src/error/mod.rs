//! Formatted error types.
//!
//! This module provides the output side of the pipeline: one
//! [`FormattedError`] per upstream failure, and [`ErrorReport`] for carrying
//! a non-empty, ordered batch of them.

mod formatted_error;

pub use formatted_error::{ErrorReport, FormattedError};
