//! Effect integration for loading message tables.
//!
//! This module provides dependency-injected loading of caller message files.
//! The crate itself never touches the filesystem; callers supply a
//! [`FileSystem`] through a [`MessageEnv`], which keeps loading testable with
//! an in-memory implementation.
//!
//! # Feature Flag
//!
//! This module is only available when the `effect` feature is enabled.
//!
//! # Example
//!
//! ```rust,ignore
//! use errata::MessageTable;
//! use errata::effect::{FileSystem, MessageEnv};
//!
//! struct AppEnv {
//!     fs: MyFileSystem,
//! }
//!
//! impl MessageEnv for AppEnv {
//!     type Fs = MyFileSystem;
//!     fn filesystem(&self) -> &Self::Fs { &self.fs }
//! }
//!
//! // Every *.json file in ./messages, layered over the defaults
//! let table = MessageTable::load_dir_with_env("./messages", &env)?;
//! ```

pub mod loading;

pub use loading::{FileSystem, MessageEnv, MessageLoadError};
