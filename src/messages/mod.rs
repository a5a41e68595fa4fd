//! Message template tables.
//!
//! This module provides [`MessageTable`], the immutable lookup table the
//! resolver reads from, together with the built-in default catalog and the
//! flat merge used to layer caller messages over it.

mod defaults;
mod table;

pub use table::{MessageTable, TableError};
