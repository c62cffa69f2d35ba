//! Open entry point: validates requested names and hands out mock files.
//!
//! An [`Opener`] carries the per-scenario configuration that a real test
//! harness sets up once and consults on every open call: the set of file
//! names considered openable and the shared initial content they are
//! backed by. It replaces the hidden process-wide globals a naive mock
//! would use.

use crate::file::MockFile;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::io;
use std::path::Path;
use tracing::{debug, warn};

/// Error type for failed open attempts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OpenError {
    /// Requested name is not in the configured set of expected files.
    NotFound(String),
}

impl std::fmt::Display for OpenError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OpenError::NotFound(name) => {
                write!(f, "[Errno 2] No such file or directory: '{}'", name)
            }
        }
    }
}

impl std::error::Error for OpenError {}

/// Per-scenario open configuration.
///
/// Set up once by the test harness, read by every [`open`](Opener::open)
/// call. All expected files share the same initial content; per-name
/// content is deliberately out of scope.
///
/// Serde-serializable so harnesses can keep scenarios as JSON fixtures.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Opener {
    /// Names considered openable; anything else is rejected.
    expected_files: HashSet<String>,
    /// Initial content supplied to every opened file.
    content: String,
}

impl Opener {
    /// Creates an empty configuration: no expected files, empty content.
    pub fn new() -> Self {
        Self::default()
    }

    /// Admits `name` to the set of expected files.
    pub fn add_file(&mut self, name: impl Into<String>) {
        self.expected_files.insert(name.into());
    }

    /// Sets the shared initial content handed to opened files.
    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
    }

    /// Loads the shared content from a real file on disk.
    ///
    /// Useful on machines where disk access is available and fixtures are
    /// kept as plain files; `names` become the expected file set.
    pub fn from_fixture<S: Into<String>>(
        path: &Path,
        names: impl IntoIterator<Item = S>,
    ) -> io::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self {
            expected_files: names.into_iter().map(Into::into).collect(),
            content,
        })
    }

    /// Opens `name` for reading (mode `"r"`).
    pub fn open(&self, name: &str) -> Result<MockFile, OpenError> {
        self.open_with(name, "r")
    }

    /// Opens `name` with an explicit mode string.
    ///
    /// The mode is passed through to the file unvalidated, like a real
    /// open call forwarding whatever the caller asked for.
    pub fn open_with(&self, name: &str, mode: &str) -> Result<MockFile, OpenError> {
        if !self.expected_files.contains(name) {
            warn!(file = %name, "open rejected: name not in expected set");
            return Err(OpenError::NotFound(name.to_string()));
        }
        debug!(file = %name, mode = %mode, "open intercepted");
        Ok(MockFile::new(name, self.content.clone(), mode))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::file::FileError;
    use std::io::Write;

    fn data_txt_opener() -> Opener {
        let mut opener = Opener::new();
        opener.add_file("data.txt");
        opener.set_content("hello\nworld\n");
        opener
    }

    #[test]
    fn test_open_known_and_unknown_names() {
        let opener = data_txt_opener();
        assert!(opener.open("data.txt").is_ok());

        let err = opener.open("missing.txt").unwrap_err();
        assert_eq!(err, OpenError::NotFound("missing.txt".to_string()));
        assert_eq!(
            err.to_string(),
            "[Errno 2] No such file or directory: 'missing.txt'"
        );
    }

    #[test]
    fn test_open_defaults_to_read_mode() {
        let opener = data_txt_opener();
        let file = opener.open("data.txt").unwrap();
        assert_eq!(file.mode(), "r");
        assert_eq!(file.name(), "data.txt");
        assert_eq!(file.read_line().unwrap(), "hello\n");
        assert_eq!(file.read_line().unwrap(), "world\n");
        assert_eq!(file.read_line().unwrap(), "");
    }

    #[test]
    fn test_open_with_write_mode_truncates_shared_content() {
        let opener = data_txt_opener();
        let file = opener.open_with("data.txt", "w").unwrap();
        file.write("x").unwrap();
        assert_eq!(file.read_line().unwrap_err(), FileError::NotReadable);
    }

    #[test]
    fn test_handles_are_independent() {
        // The configuration is read-only to the files it hands out; each
        // handle gets its own copy of the shared content.
        let opener = data_txt_opener();
        let first = opener.open("data.txt").unwrap();
        let second = opener.open("data.txt").unwrap();
        assert_eq!(first.read_line().unwrap(), "hello\n");
        assert_eq!(second.read_line().unwrap(), "hello\n");
    }

    #[test]
    fn test_opener_from_json_fixture() {
        let opener: Opener = serde_json::from_str(
            r#"{"expected_files": ["report.csv"], "content": "id,qty\n1,2\n"}"#,
        )
        .unwrap();
        let file = opener.open("report.csv").unwrap();
        assert_eq!(file.read_lines().unwrap(), vec!["id,qty\n", "1,2\n"]);
    }

    #[test]
    fn test_from_fixture_reads_disk_content() {
        let mut fixture = tempfile::NamedTempFile::new().unwrap();
        fixture.write_all(b"on disk\n").unwrap();

        let opener = Opener::from_fixture(fixture.path(), ["data.txt"]).unwrap();
        let file = opener.open("data.txt").unwrap();
        assert_eq!(file.read_line().unwrap(), "on disk\n");
    }
}
