//! Pre-built open configurations for consumer tests.
//!
//! These fixtures cover the content shapes line-oriented code usually
//! trips over: a plain multi-line file, a CSV-style report, a file whose
//! last line has no trailing newline, and an empty file.

use super::open::Opener;

#[allow(dead_code)]
impl Opener {
    /// A two-line greeting file, the smallest useful read fixture.
    ///
    /// Expects `data.txt`, content `"hello\nworld\n"`.
    pub fn greeting() -> Self {
        let mut opener = Self::new();
        opener.add_file("data.txt");
        opener.set_content("hello\nworld\n");
        opener
    }

    /// A small CSV report with a header row.
    ///
    /// Expects `report.csv`.
    pub fn csv_report() -> Self {
        let mut opener = Self::new();
        opener.add_file("report.csv");
        opener.set_content(
            "\
id,name,qty
1,bolt,40
2,washer,120
3,nut,64
",
        );
        opener
    }

    /// Content whose final line lacks a trailing newline.
    ///
    /// Expects `notes.txt`, content `"a\nb\nc"`.
    pub fn no_trailing_newline() -> Self {
        let mut opener = Self::new();
        opener.add_file("notes.txt");
        opener.set_content("a\nb\nc");
        opener
    }

    /// An expected file with empty content.
    ///
    /// Expects `empty.txt`.
    pub fn empty_file() -> Self {
        let mut opener = Self::new();
        opener.add_file("empty.txt");
        opener
    }
}
