//! Chapter report formatting and the `render_chapter` entry point.

use std::fmt;
use std::io::{self, Write};
use std::path::Path;

use log::debug;
use thiserror::Error;

use crate::scripture::{scan_chapter, ChapterQuery, ScanError};
use crate::width::{wrap_width, WidthSource};
use crate::wrap::wrap;

/// Abbreviations shown in the "not found" hint.
const EXAMPLE_ABBREVIATIONS: &str = "Gen, Exo, Mat";

/// How a call to [`render_chapter`] ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Rendered { verses: usize },
    NoMatch,
    FileNotFound,
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to read dataset")]
    Read(#[source] io::Error),

    #[error("failed to write output")]
    Write(#[source] io::Error),
}

/// A formatted chapter, ready to print.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub header: String,
    pub width: usize,
    pub lines: Vec<String>,
}

impl Report {
    /// Join `verses` with single spaces and wrap them at `width`.
    pub fn new(query: &ChapterQuery, verses: &[String], width: usize) -> Self {
        let header = format!(
            "--- {} CHAPTER {} ---",
            query.book.to_uppercase(),
            query.chapter
        );
        Self {
            header,
            width,
            lines: wrap(&verses.join(" "), width),
        }
    }

    fn rule(&self) -> String {
        "=".repeat(self.width)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "{:^width$}", self.header, width = self.width)?;
        writeln!(f, "{}", self.rule())?;
        for line in &self.lines {
            writeln!(f, "{}", line)?;
        }
        writeln!(f, "{}", self.rule())?;
        writeln!(f)
    }
}

/// Print the requested chapter of the dataset at `path` to `out`.
///
/// A missing dataset or a chapter with no verses is reported to `out` as a
/// short diagnostic and is not an error. Errors are reserved for reads that
/// fail part way (including invalid UTF-8) and for failed writes.
pub fn render_chapter<W: Write>(
    out: &mut W,
    path: &Path,
    book: &str,
    chapter: impl fmt::Display,
    width: &dyn WidthSource,
) -> Result<Outcome, RenderError> {
    let query = ChapterQuery::new(book, chapter);

    let verses = match scan_chapter(path, &query) {
        Ok(verses) => verses,
        Err(ScanError::FileNotFound { path }) => {
            writeln!(
                out,
                "Error: The file '{}' was not found in the current directory.",
                path.display()
            )
            .map_err(RenderError::Write)?;
            return Ok(Outcome::FileNotFound);
        }
        Err(ScanError::Io(e)) => return Err(RenderError::Read(e)),
    };

    if verses.is_empty() {
        debug!("No verses for {}", query);
        writeln!(out, "Error: Could not find {}.", query).map_err(RenderError::Write)?;
        writeln!(
            out,
            "Check if abbreviations match (e.g., {}).",
            EXAMPLE_ABBREVIATIONS
        )
        .map_err(RenderError::Write)?;
        return Ok(Outcome::NoMatch);
    }

    let report = Report::new(&query, &verses, wrap_width(width));
    write!(out, "{}", report).map_err(RenderError::Write)?;
    out.flush().map_err(RenderError::Write)?;

    Ok(Outcome::Rendered {
        verses: verses.len(),
    })
}
