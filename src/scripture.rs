use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use log::debug;
use thiserror::Error;

use crate::subscript::subscript;

/// One `book|chapter|verse|text` line of the dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Verse<'a> {
    pub book: &'a str,
    pub chapter: &'a str,
    pub verse: &'a str,
    pub text: &'a str,
}

impl<'a> Verse<'a> {
    /// Split a trimmed dataset line into its fields.
    ///
    /// Returns `None` when the line has fewer than four `|`-separated fields.
    /// Anything after a fourth `|` is not part of the verse text.
    pub fn parse(line: &'a str) -> Option<Self> {
        let mut parts = line.split('|');
        let book = parts.next()?;
        let chapter = parts.next()?;
        let verse = parts.next()?;
        let text = parts.next()?;
        Some(Self {
            book,
            chapter,
            verse,
            text,
        })
    }

    /// Verse text with the dataset's `~` markers removed and whitespace trimmed.
    pub fn clean_text(&self) -> String {
        self.text.replace('~', "").trim().to_string()
    }

    /// Subscript verse number glued to the cleaned text, e.g. `₁In the beginning`.
    pub fn display(&self) -> String {
        format!("{}{}", subscript(self.verse), self.clean_text())
    }
}

/// A book abbreviation and chapter to look up.
///
/// Matching is a literal, case-sensitive prefix comparison against each line,
/// so `"01"` and `1` are different chapters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChapterQuery {
    pub book: String,
    pub chapter: String,
}

impl ChapterQuery {
    pub fn new(book: &str, chapter: impl fmt::Display) -> Self {
        Self {
            book: book.to_string(),
            chapter: chapter.to_string(),
        }
    }

    pub fn prefix(&self) -> String {
        format!("{}|{}|", self.book, self.chapter)
    }
}

impl fmt::Display for ChapterQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.book, self.chapter)
    }
}

#[derive(Debug, Error)]
pub enum ScanError {
    #[error("dataset file '{}' not found", path.display())]
    FileNotFound { path: PathBuf },

    #[error("failed to read dataset")]
    Io(#[from] io::Error),
}

/// Collect the display strings of every verse in `query`, in input order.
///
/// Lines that match the prefix but have fewer than four fields are skipped.
pub fn scan_reader<R: BufRead>(reader: R, query: &ChapterQuery) -> io::Result<Vec<String>> {
    let prefix = query.prefix();
    let mut verses = Vec::new();

    for line in reader.lines() {
        let line = line?;
        let line = line.trim();
        if !line.starts_with(&prefix) {
            continue;
        }
        if let Some(verse) = Verse::parse(line) {
            verses.push(verse.display());
        }
    }

    Ok(verses)
}

/// Open the dataset at `path` and scan it for `query`.
pub fn scan_chapter(path: &Path, query: &ChapterQuery) -> Result<Vec<String>, ScanError> {
    let file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => ScanError::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => ScanError::Io(e),
    })?;

    let verses = scan_reader(BufReader::new(file), query)?;
    debug!(
        "Matched {} verses for {} in {}",
        verses.len(),
        query,
        path.display()
    );
    Ok(verses)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const SAMPLE: &str = "\
Gen|1|1|In the beginning God created the heaven and the earth.~
Gen|1|2|And the earth was without form, and void.~
Gen|2|1|Thus the heavens and the earth were finished.~
Exo|1|1|Now these are the names of the children of Israel.~
";

    #[test]
    fn test_parse_verse() {
        let verse = Verse::parse("Gen|1|1|In the beginning~").unwrap();
        assert_eq!(verse.book, "Gen");
        assert_eq!(verse.chapter, "1");
        assert_eq!(verse.verse, "1");
        assert_eq!(verse.text, "In the beginning~");
    }

    #[test]
    fn test_parse_rejects_short_lines() {
        assert!(Verse::parse("Gen|1|1").is_none());
        assert!(Verse::parse("").is_none());
    }

    #[test]
    fn test_parse_ignores_fields_after_text() {
        let verse = Verse::parse("Gen|1|1|first|second").unwrap();
        assert_eq!(verse.text, "first");
    }

    #[test]
    fn test_display_strips_tildes_and_whitespace() {
        let verse = Verse::parse("Gen|1|12|  And God saw ~ ").unwrap();
        assert_eq!(verse.display(), "₁₂And God saw");
    }

    #[test]
    fn test_query_prefix() {
        assert_eq!(ChapterQuery::new("Gen", 1).prefix(), "Gen|1|");
        assert_eq!(ChapterQuery::new("Jo", "3").prefix(), "Jo|3|");
    }

    #[test]
    fn test_scan_reader_filters_by_book_and_chapter() {
        let verses = scan_reader(Cursor::new(SAMPLE), &ChapterQuery::new("Gen", 1)).unwrap();
        assert_eq!(
            verses,
            vec![
                "₁In the beginning God created the heaven and the earth.",
                "₂And the earth was without form, and void.",
            ]
        );
    }

    #[test]
    fn test_scan_reader_is_case_sensitive() {
        let verses = scan_reader(Cursor::new(SAMPLE), &ChapterQuery::new("gen", 1)).unwrap();
        assert!(verses.is_empty());
    }

    #[test]
    fn test_scan_reader_does_not_match_longer_abbreviation() {
        let data = "Job|1|1|There was a man in the land of Uz~\n";
        let verses = scan_reader(Cursor::new(data), &ChapterQuery::new("Jo", 1)).unwrap();
        assert!(verses.is_empty());
    }

    #[test]
    fn test_scan_reader_skips_malformed_lines() {
        let data = "Gen|1|1\nGen|1|2|Kept~\n";
        let verses = scan_reader(Cursor::new(data), &ChapterQuery::new("Gen", 1)).unwrap();
        assert_eq!(verses, vec!["₂Kept"]);
    }

    #[test]
    fn test_scan_reader_trims_line_before_matching() {
        let data = "   Gen|1|1|Indented~  \r\n";
        let verses = scan_reader(Cursor::new(data), &ChapterQuery::new("Gen", 1)).unwrap();
        assert_eq!(verses, vec!["₁Indented"]);
    }

    #[test]
    fn test_scan_reader_keeps_file_order() {
        let data = "Gen|1|3|third~\nGen|1|1|first~\n";
        let verses = scan_reader(Cursor::new(data), &ChapterQuery::new("Gen", 1)).unwrap();
        assert_eq!(verses, vec!["₃third", "₁first"]);
    }

    #[test]
    fn test_scan_reader_rejects_invalid_utf8() {
        let data: &[u8] = b"Gen|1|1|\xff\xfe~\n";
        assert!(scan_reader(Cursor::new(data), &ChapterQuery::new("Gen", 1)).is_err());
    }

    #[test]
    fn test_scan_chapter_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.txt");
        let err = scan_chapter(&path, &ChapterQuery::new("Gen", 1)).unwrap_err();
        match err {
            ScanError::FileNotFound { path: p } => assert_eq!(p, path),
            other => panic!("unexpected error: {other}"),
        }
    }
}
