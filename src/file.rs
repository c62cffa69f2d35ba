//! In-memory mock file handle.
//!
//! `MockFile` presents the line-read/write/close contract of a real file
//! handle, backed entirely by an in-memory string buffer. It is built for
//! test environments where disk access is unavailable or undesirable.

use crate::lines::LineIter;
use std::cell::RefCell;

/// Error type for operations on a mock file handle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileError {
    /// Any operation after `close()`.
    Closed,
    /// Read attempted without a read-intent marker in the mode.
    NotReadable,
    /// Write attempted without a write- or append-intent marker in the mode.
    NotWritable,
}

impl std::fmt::Display for FileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FileError::Closed => write!(f, "I/O operation on closed file"),
            FileError::NotReadable => write!(f, "not readable"),
            FileError::NotWritable => write!(f, "not writable"),
        }
    }
}

impl std::error::Error for FileError {}

/// Mutable handle state shared with any outstanding line iterators.
#[derive(Debug)]
pub(crate) struct FileState {
    pub(crate) content: String,
    /// Byte offset of the next unconsumed character.
    pub(crate) cursor: usize,
    pub(crate) closed: bool,
}

/// An opened fake file.
///
/// Holds the full file text in memory together with a cursor tracking how
/// much of it has been consumed. The mode string selects permitted
/// operations: `'r'` allows reads, `'w'` or `'a'` allow writes, and `'w'`
/// additionally truncates any initial content at construction.
///
/// Methods take `&self`; the buffer, cursor and closed flag live behind a
/// `RefCell` so that a [`LineIter`] stays a live view over the same state.
/// Single-threaded use only.
#[derive(Debug)]
pub struct MockFile {
    name: String,
    mode: String,
    pub(crate) state: RefCell<FileState>,
}

impl MockFile {
    /// Creates a handle over `initial_content`.
    ///
    /// The mode string is not validated here; [`Opener`](crate::Opener)
    /// is responsible for what it hands out.
    pub fn new(
        name: impl Into<String>,
        initial_content: impl Into<String>,
        mode: impl Into<String>,
    ) -> Self {
        let mode = mode.into();
        let content = if mode.contains('w') {
            String::new()
        } else {
            initial_content.into()
        };
        Self {
            name: name.into(),
            mode,
            state: RefCell::new(FileState {
                content,
                cursor: 0,
                closed: false,
            }),
        }
    }

    /// Reads the next line, including its trailing newline if present.
    ///
    /// Returns an empty string once the cursor has reached the end of the
    /// content; repeated calls keep returning empty strings, not errors.
    pub fn read_line(&self) -> Result<String, FileError> {
        self.check_readable()?;
        let mut state = self.state.borrow_mut();
        if state.cursor >= state.content.len() {
            return Ok(String::new());
        }
        let line = next_line(&state.content, state.cursor).to_string();
        state.cursor += line.len();
        Ok(line)
    }

    /// Reads all remaining lines at once.
    ///
    /// The cursor jumps to the full content length afterwards, matching
    /// real bulk-read behavior.
    pub fn read_lines(&self) -> Result<Vec<String>, FileError> {
        self.check_readable()?;
        let mut state = self.state.borrow_mut();
        let mut lines = Vec::new();
        let mut pos = state.cursor;
        while pos < state.content.len() {
            let line = next_line(&state.content, pos);
            pos += line.len();
            lines.push(line.to_string());
        }
        state.cursor = state.content.len();
        Ok(lines)
    }

    /// Appends `text` to the content and advances the cursor past it.
    pub fn write(&self, text: &str) -> Result<(), FileError> {
        self.check_writable()?;
        let mut state = self.state.borrow_mut();
        state.content.push_str(text);
        state.cursor += text.len();
        Ok(())
    }

    /// Appends every element of `texts` with no separator inserted.
    pub fn write_lines<S: AsRef<str>>(
        &self,
        texts: impl IntoIterator<Item = S>,
    ) -> Result<(), FileError> {
        self.check_writable()?;
        let mut state = self.state.borrow_mut();
        let mut written = 0;
        for text in texts {
            let text = text.as_ref();
            state.content.push_str(text);
            written += text.len();
        }
        state.cursor += written;
        Ok(())
    }

    /// Closes the handle. Idempotent; every subsequent read, write or
    /// iteration step fails with [`FileError::Closed`].
    pub fn close(&self) {
        self.state.borrow_mut().closed = true;
    }

    /// The name this file was opened under. Usable even after close.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The mode string this file was opened with. Usable even after close.
    pub fn mode(&self) -> &str {
        &self.mode
    }

    /// Returns an iterator over the remaining lines, starting at the
    /// current cursor.
    ///
    /// Construction always succeeds; a closed handle surfaces as an error
    /// from the iterator's `next()` instead.
    pub fn lines(&self) -> LineIter<'_> {
        LineIter::new(self)
    }

    fn check_open(&self) -> Result<(), FileError> {
        if self.state.borrow().closed {
            return Err(FileError::Closed);
        }
        Ok(())
    }

    fn check_readable(&self) -> Result<(), FileError> {
        self.check_open()?;
        if !self.mode.contains('r') {
            return Err(FileError::NotReadable);
        }
        Ok(())
    }

    fn check_writable(&self) -> Result<(), FileError> {
        self.check_open()?;
        if !(self.mode.contains('w') || self.mode.contains('a')) {
            return Err(FileError::NotWritable);
        }
        Ok(())
    }
}

/// Slice of `content` from `start` up to and including the next `'\n'`,
/// or the remainder when no newline follows.
pub(crate) fn next_line(content: &str, start: usize) -> &str {
    match content[start..].find('\n') {
        Some(offset) => &content[start..start + offset + 1],
        None => &content[start..],
    }
}
