//! Source file snapshots handed to the extractor.

use std::path::{Path, PathBuf};

/// Immutable snapshot of a source file, read once per scan pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    /// Path of the file as discovered.
    pub path: PathBuf,
    /// Full file contents.
    pub text: String,
}

impl SourceFile {
    /// Creates a snapshot from already-loaded text.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, text: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            text: text.into(),
        }
    }

    /// Reads a snapshot from disk.
    ///
    /// # Errors
    ///
    /// Returns the underlying IO error if the file cannot be read as UTF-8.
    pub fn read(path: &Path) -> std::io::Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(Self::new(path, text))
    }
}

/// Detects test and story files by path conventions.
///
/// Test directories (`tests`, `test`, `__tests__`) and file names containing
/// `.test.`, `.spec.` or `.stories.` count as test files.
#[must_use]
pub fn is_test_file(path: &Path) -> bool {
    for component in path.components() {
        if let std::path::Component::Normal(s) = component {
            let s = s.to_string_lossy();
            if s == "tests" || s == "test" || s == "__tests__" {
                return true;
            }
        }
    }

    if let Some(file_name) = path.file_name().and_then(|n| n.to_str()) {
        if file_name.contains(".test.")
            || file_name.contains(".spec.")
            || file_name.contains(".stories.")
        {
            return true;
        }
    }

    false
}
