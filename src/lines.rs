//! Lazy line iteration over a [`MockFile`].

use crate::file::{FileError, MockFile, next_line};

/// Forward-only iterator over the remaining lines of a [`MockFile`].
///
/// A `LineIter` is a live view, not a snapshot: it shares the file's
/// cursor and content, so lines written to the file between `next()`
/// calls are produced by later `next()` calls, and a fresh iterator
/// obtained after exhaustion resumes from wherever the cursor sits.
///
/// There is no cached done flag; each step compares the cursor against
/// the current content length.
#[derive(Debug)]
pub struct LineIter<'a> {
    file: &'a MockFile,
}

impl<'a> LineIter<'a> {
    pub(crate) fn new(file: &'a MockFile) -> Self {
        Self { file }
    }
}

impl Iterator for LineIter<'_> {
    type Item = Result<String, FileError>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut state = self.file.state.borrow_mut();
        if state.closed {
            return Some(Err(FileError::Closed));
        }
        if state.cursor >= state.content.len() {
            return None;
        }
        let line = next_line(&state.content, state.cursor).to_string();
        state.cursor += line.len();
        Some(Ok(line))
    }
}
