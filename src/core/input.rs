use anyhow::{Context, Result};
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;

use crate::core::error::WordlistError;

/// Marker used on the command line for the standard streams
pub const STDIO_MARKER: &str = "-";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Stdin,
    File(PathBuf),
}

impl Source {
    pub fn parse(arg: &str) -> Self {
        if arg == STDIO_MARKER {
            Source::Stdin
        } else {
            Source::File(PathBuf::from(arg))
        }
    }

    pub fn describe(&self) -> String {
        match self {
            Source::Stdin => "<stdin>".to_string(),
            Source::File(path) => path.display().to_string(),
        }
    }
}

/// Reads every non-empty line from `source`. Only the line terminator is
/// removed; any other whitespace is part of the entry.
pub fn read_lines(source: &Source) -> Result<Vec<String>> {
    match source {
        Source::Stdin => collect_lines(io::stdin().lock()),
        Source::File(path) => {
            if !path.exists() {
                return Err(WordlistError::InputNotFound(path.clone()).into());
            }
            let file = std::fs::File::open(path)
                .with_context(|| format!("Failed to open input: {}", path.display()))?;
            collect_lines(BufReader::new(file))
                .with_context(|| format!("Failed to read input: {}", path.display()))
        }
    }
}

pub fn collect_lines<R: BufRead>(reader: R) -> Result<Vec<String>> {
    let mut lines = Vec::new();

    for line in reader.lines() {
        let line = line?;

        // Skip empty lines
        if line.is_empty() {
            continue;
        }

        lines.push(line);
    }

    log::debug!("read {} non-empty lines", lines.len());
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::wordlist::{self, Mode};
    use std::io::Cursor;
    use tempfile::TempDir;

    #[test]
    fn test_source_parse() {
        assert_eq!(Source::parse("-"), Source::Stdin);
        assert_eq!(
            Source::parse("names.txt"),
            Source::File(PathBuf::from("names.txt"))
        );
    }

    #[test]
    fn test_collect_lines_strips_terminators_and_skips_empty() {
        let input = "Armour\r\n\nJohn\n\nRiya";

        let lines = collect_lines(Cursor::new(input)).unwrap();

        assert_eq!(lines, vec!["Armour", "John", "Riya"]);
    }

    #[test]
    fn test_collect_lines_keeps_inner_whitespace() {
        let input = "pass \npass\n pass\n\t\n";

        let lines = collect_lines(Cursor::new(input)).unwrap();

        assert_eq!(lines, vec!["pass ", "pass", " pass", "\t"]);
    }

    #[test]
    fn test_whitespace_distinct_lines_survive_dedupe_only() {
        let lines = collect_lines(Cursor::new("pass \npass\n pass\npass\n")).unwrap();

        let wordlist = wordlist::run(Mode::DedupeOnly, lines);

        assert_eq!(wordlist.entries, vec!["pass ", "pass", " pass"]);
        assert_eq!(wordlist.duplicates_removed(), 1);
    }

    #[test]
    fn test_collect_lines_keeps_duplicates() {
        let lines = collect_lines(Cursor::new("a\na\n")).unwrap();
        assert_eq!(lines, vec!["a", "a"]);
    }

    #[test]
    fn test_read_lines_missing_file() {
        let dir = TempDir::new().unwrap();
        let source = Source::File(dir.path().join("missing.txt"));

        let err = read_lines(&source).unwrap_err();

        assert!(matches!(
            err.downcast_ref::<WordlistError>(),
            Some(WordlistError::InputNotFound(_))
        ));
    }

    #[test]
    fn test_read_lines_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("names.txt");
        std::fs::write(&path, "John\n\nRiya\n").unwrap();

        let lines = read_lines(&Source::File(path)).unwrap();

        assert_eq!(lines, vec!["John", "Riya"]);
    }
}
