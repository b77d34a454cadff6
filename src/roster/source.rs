//! Roster file loading
//!
//! A roster file is plain text with one name per line. Blank lines and
//! lines starting with `#` are ignored; surrounding whitespace is trimmed.
//! Names must be unique since they are the keys every engine operation
//! addresses people by.

use crate::roster::models::Person;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while loading a roster file
#[derive(Debug, Error)]
pub enum SourceError {
    /// The file could not be read
    #[error("failed to read roster file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Two lines resolved to the same name
    #[error("duplicate name '{0}' in roster file")]
    DuplicateName(String),

    /// The file contained no names at all
    #[error("roster file '{0}' contains no names")]
    EmptyRoster(PathBuf),
}

/// Load a roster from a plain-text file
///
/// # Errors
///
/// Returns `SourceError` if the file cannot be read, contains a duplicate
/// name, or contains no names.
pub fn load_roster(path: impl AsRef<Path>) -> Result<Vec<Person>, SourceError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| SourceError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let mut seen = HashSet::new();
    let mut roster = Vec::new();

    for line in text.lines() {
        let name = line.trim();
        if name.is_empty() || name.starts_with('#') {
            continue;
        }

        if !seen.insert(name.to_string()) {
            return Err(SourceError::DuplicateName(name.to_string()));
        }
        roster.push(Person::new(name));
    }

    if roster.is_empty() {
        return Err(SourceError::EmptyRoster(path.to_path_buf()));
    }

    Ok(roster)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn roster_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_roster_preserves_order() {
        let file = roster_file("Ruby Mae\nJack Ryan\nIsla Faith\n");

        let roster = load_roster(file.path()).unwrap();

        assert_eq!(
            roster,
            vec![
                Person::new("Ruby Mae"),
                Person::new("Jack Ryan"),
                Person::new("Isla Faith"),
            ]
        );
    }

    #[test]
    fn test_load_roster_skips_comments_and_blanks() {
        let file = roster_file("# team A\n\n  Ruby Mae  \n\n# team B\nJack Ryan\n");

        let roster = load_roster(file.path()).unwrap();

        assert_eq!(roster.len(), 2);
        assert_eq!(roster[0].name, "Ruby Mae");
    }

    #[test]
    fn test_load_roster_rejects_duplicates() {
        let file = roster_file("Ruby Mae\nJack Ryan\nRuby Mae\n");

        let err = load_roster(file.path()).unwrap_err();

        assert!(matches!(err, SourceError::DuplicateName(name) if name == "Ruby Mae"));
    }

    #[test]
    fn test_load_roster_rejects_empty_file() {
        let file = roster_file("# only comments here\n\n");

        let err = load_roster(file.path()).unwrap_err();

        assert!(matches!(err, SourceError::EmptyRoster(_)));
    }

    #[test]
    fn test_load_roster_missing_file() {
        let err = load_roster("definitely/not/a/roster.txt").unwrap_err();

        assert!(matches!(err, SourceError::Io { .. }));
    }
}
