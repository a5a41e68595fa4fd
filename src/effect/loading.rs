//! Message table loading through an injected filesystem.
//!
//! Message files are JSON objects mapping lookup keys to templates. Each
//! file is merged over the built-in defaults with the usual flat policy:
//! keys in the file win, everything else is kept.

use serde_json::Value;
use std::path::{Path, PathBuf};

use crate::messages::{MessageTable, TableError};

/// Environment trait for message loading.
pub trait MessageEnv: Send + Sync {
    /// The filesystem implementation type
    type Fs: FileSystem;

    /// Returns a reference to the filesystem
    fn filesystem(&self) -> &Self::Fs;
}

/// Abstraction for filesystem operations.
pub trait FileSystem: Send + Sync {
    /// The error type for filesystem operations
    type Error: std::error::Error + Send + Sync + 'static;

    /// Reads the contents of a file as a string.
    fn read_file(&self, path: &Path) -> Result<String, Self::Error>;

    /// Lists all entries in a directory.
    fn read_dir(&self, path: &Path) -> Result<Vec<PathBuf>, Self::Error>;
}

/// Errors that can occur while loading message files.
#[derive(Debug, thiserror::Error)]
pub enum MessageLoadError {
    /// IO error reading a file or directory
    #[error("IO error reading {0}: {1}")]
    Io(PathBuf, Box<dyn std::error::Error + Send + Sync>),

    /// JSON parsing error
    #[error("Parse error in {0}: {1}")]
    Parse(PathBuf, serde_json::Error),

    /// The file parsed but is not a valid message table
    #[error("Invalid message table in {0}: {1}")]
    Table(PathBuf, TableError),

    /// Multiple errors occurred
    #[error("Multiple errors: {0:?}")]
    Multiple(Vec<MessageLoadError>),
}

impl MessageTable {
    /// Loads one message file and merges it over the defaults.
    ///
    /// # Errors
    ///
    /// Returns `MessageLoadError::Io`, `Parse` or `Table` describing why the
    /// file could not be used.
    pub fn load_file_with_env<E: MessageEnv>(
        path: impl AsRef<Path>,
        env: &E,
    ) -> Result<MessageTable, MessageLoadError> {
        let custom = read_table(path.as_ref(), env.filesystem())?;
        Ok(MessageTable::defaults().merge(&custom))
    }

    /// Loads every `.json` file in a directory and merges them over the defaults.
    ///
    /// Files are applied in sorted path order, so a later file wins over an
    /// earlier one for the same key. Every unreadable or malformed file is
    /// reported; none of them is partially applied.
    ///
    /// # Errors
    ///
    /// Returns `MessageLoadError::Io` if the directory cannot be listed and
    /// `MessageLoadError::Multiple` collecting every per-file failure.
    pub fn load_dir_with_env<E: MessageEnv>(
        path: impl AsRef<Path>,
        env: &E,
    ) -> Result<MessageTable, MessageLoadError> {
        let path = path.as_ref();
        let fs = env.filesystem();
        let mut files = fs
            .read_dir(path)
            .map_err(|e| MessageLoadError::Io(path.to_path_buf(), Box::new(e)))?;
        files.sort();

        let mut table = MessageTable::defaults();
        let mut errors = Vec::new();

        for file in files {
            if file.extension().and_then(|s| s.to_str()) != Some("json") {
                continue;
            }
            match read_table(&file, fs) {
                Ok(custom) => {
                    tracing::debug!(file = %file.display(), entries = custom.len(), "loaded message file");
                    table = table.merge(&custom);
                }
                Err(e) => errors.push(e),
            }
        }

        if errors.is_empty() {
            Ok(table)
        } else {
            Err(MessageLoadError::Multiple(errors))
        }
    }
}

fn read_table<Fs: FileSystem>(path: &Path, fs: &Fs) -> Result<MessageTable, MessageLoadError> {
    let content = fs
        .read_file(path)
        .map_err(|e| MessageLoadError::Io(path.to_path_buf(), Box::new(e)))?;

    let json: Value = serde_json::from_str(&content)
        .map_err(|e| MessageLoadError::Parse(path.to_path_buf(), e))?;

    MessageTable::from_json(&json).map_err(|e| MessageLoadError::Table(path.to_path_buf(), e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[derive(Debug)]
    struct MockFileSystemError(String);

    impl std::fmt::Display for MockFileSystemError {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "{}", self.0)
        }
    }

    impl std::error::Error for MockFileSystemError {}

    struct MockFileSystem {
        files: HashMap<PathBuf, String>,
    }

    impl MockFileSystem {
        fn new() -> Self {
            Self {
                files: HashMap::new(),
            }
        }

        fn add_file(&mut self, path: impl Into<PathBuf>, content: impl Into<String>) {
            self.files.insert(path.into(), content.into());
        }
    }

    impl FileSystem for MockFileSystem {
        type Error = MockFileSystemError;

        fn read_file(&self, path: &Path) -> Result<String, Self::Error> {
            self.files
                .get(path)
                .cloned()
                .ok_or_else(|| MockFileSystemError(format!("File not found: {}", path.display())))
        }

        fn read_dir(&self, _path: &Path) -> Result<Vec<PathBuf>, Self::Error> {
            Ok(self.files.keys().cloned().collect())
        }
    }

    struct TestEnv {
        fs: MockFileSystem,
    }

    impl MessageEnv for TestEnv {
        type Fs = MockFileSystem;

        fn filesystem(&self) -> &Self::Fs {
            &self.fs
        }
    }

    #[test]
    fn test_load_file_merges_over_defaults() {
        let mut fs = MockFileSystem::new();
        fs.add_file("messages.json", r#"{"string.min": "Too short"}"#);
        let env = TestEnv { fs };

        let table = MessageTable::load_file_with_env("messages.json", &env).unwrap();

        assert_eq!(table.get("string.min"), Some("Too short"));
        assert_eq!(table.get("string.max"), MessageTable::defaults().get("string.max"));
    }

    #[test]
    fn test_load_missing_file() {
        let env = TestEnv {
            fs: MockFileSystem::new(),
        };
        let result = MessageTable::load_file_with_env("absent.json", &env);
        assert!(matches!(result, Err(MessageLoadError::Io(_, _))));
    }

    #[test]
    fn test_later_files_win() {
        let mut fs = MockFileSystem::new();
        fs.add_file("b.json", r#"{"string.min": "from b"}"#);
        fs.add_file("a.json", r#"{"string.min": "from a", "name.string.min": "name from a"}"#);
        fs.add_file("notes.txt", "ignored");
        let env = TestEnv { fs };

        let table = MessageTable::load_dir_with_env(".", &env).unwrap();

        assert_eq!(table.get("string.min"), Some("from b"));
        assert_eq!(table.get("name.string.min"), Some("name from a"));
    }

    #[test]
    fn test_error_accumulation() {
        let mut fs = MockFileSystem::new();
        fs.add_file("valid.json", r#"{"string.min": "ok"}"#);
        fs.add_file("broken.json", "not valid json");
        fs.add_file("wrong.json", r#"{"string.min": 5}"#);
        let env = TestEnv { fs };

        match MessageTable::load_dir_with_env(".", &env) {
            Err(MessageLoadError::Multiple(errors)) => {
                assert_eq!(errors.len(), 2);
                assert!(errors
                    .iter()
                    .any(|e| matches!(e, MessageLoadError::Parse(_, _))));
                assert!(errors
                    .iter()
                    .any(|e| matches!(e, MessageLoadError::Table(_, TableError::NonStringTemplate(_)))));
            }
            other => panic!("expected accumulated errors, got {:?}", other.map(|t| t.len())),
        }
    }
}
