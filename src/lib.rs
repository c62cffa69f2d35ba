//! fakefile — in-memory substitute for file I/O in test environments.
//!
//! Intercepts file-open requests and hands out [`MockFile`] handles that
//! mimic the line-read/write/close contract of a real file, backed
//! entirely by in-memory state. Intended for platforms and test setups
//! where disk access is prohibited.
//!
//! Provides:
//! - `file` — the [`MockFile`] handle: modes, cursor, close semantics
//! - `lines` — [`LineIter`], lazy forward-only line iteration
//! - `open` — [`Opener`], the allow-list + shared-content entry point
//! - `scenarios` — pre-built [`Opener`] fixtures
//!
//! # Usage
//!
//! ```
//! use fakefile::Opener;
//!
//! let mut opener = Opener::new();
//! opener.add_file("data.txt");
//! opener.set_content("hello\nworld\n");
//!
//! let file = opener.open("data.txt").unwrap();
//! assert_eq!(file.read_line().unwrap(), "hello\n");
//! assert_eq!(file.read_line().unwrap(), "world\n");
//! assert_eq!(file.read_line().unwrap(), "");
//! ```
//!
//! Single-threaded by design: a [`MockFile`] and its iterators share one
//! cursor with no locking discipline.

pub mod file;
pub mod lines;
pub mod open;
pub mod scenarios;

pub use file::{FileError, MockFile};
pub use lines::LineIter;
pub use open::{OpenError, Opener};
