/// File handling utilities
///
/// This module provides utility functions for reading text sources into lines,
/// resolving source names against a base directory, and loading query options.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::{debug, error};

use crate::core::analyzer::AnalyzerError;
use crate::core::report::QueryOptions;

/// Read all lines of a file with their terminators stripped.
///
/// # Arguments
///
/// * `file_path` - Path to the file
///
/// # Returns
///
/// The lines of the file, or `SourceUnreadable` if the file is missing,
/// unreadable, or not valid UTF-8
pub fn read_lines(file_path: &Path) -> Result<Vec<String>, AnalyzerError> {
    match fs::read_to_string(file_path) {
        Ok(content) => {
            debug!("Read {} bytes from {}", content.len(), file_path.display());
            Ok(split_lines(&content))
        }
        Err(e) => {
            error!("Failed to read file: {}: {}", file_path.display(), e);
            Err(AnalyzerError::SourceUnreadable {
                path: file_path.to_path_buf(),
                source: e,
            })
        }
    }
}

/// Split text into lines.
///
/// `\n`, `\r\n` and a lone `\r` all end a line. A terminator at the very end
/// does not start another line, so `"a\n"` is one line and `""` is none.
pub fn split_lines(content: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut rest = content;

    while !rest.is_empty() {
        match rest.find(|c: char| c == '\n' || c == '\r') {
            Some(idx) => {
                lines.push(rest[..idx].to_string());
                let terminator = if rest[idx..].starts_with("\r\n") { 2 } else { 1 };
                rest = &rest[idx + terminator..];
            }
            None => {
                lines.push(rest.to_string());
                break;
            }
        }
    }

    lines
}

/// Resolve a source name against the base resource directory.
///
/// Absolute names are returned unchanged.
pub fn resolve_source(base_dir: &Path, name: &str) -> PathBuf {
    let name = Path::new(name.trim());
    if name.is_absolute() {
        name.to_path_buf()
    } else {
        base_dir.join(name)
    }
}

/// Load query options from a JSON file.
///
/// Keys that are absent from the file keep their default values.
pub fn load_query_options(config_path: &Path) -> Result<QueryOptions> {
    let config_str = fs::read_to_string(config_path)
        .context(format!("Configuration file not readable: {}", config_path.display()))?;

    let options = serde_json::from_str(&config_str)
        .context(format!("Invalid JSON in configuration file: {}", config_path.display()))?;

    Ok(options)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_lines_terminators() {
        assert_eq!(split_lines("a\nb\r\nc\rd"), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_split_lines_trailing_terminator() {
        assert_eq!(split_lines("a\n"), vec!["a"]);
        assert_eq!(split_lines("a\n\n"), vec!["a", ""]);
        assert_eq!(split_lines("\n"), vec![""]);
        assert!(split_lines("").is_empty());
    }

    #[test]
    fn test_split_lines_keeps_whitespace() {
        assert_eq!(split_lines("  x \n\t\n"), vec!["  x ", "\t"]);
    }

    #[test]
    fn test_read_lines() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("lines.txt");
        fs::write(&path, "first\r\n\nthird\n").expect("Failed to write file");

        let lines = read_lines(&path).expect("Failed to read lines");
        assert_eq!(lines, vec!["first", "", "third"]);
    }

    #[test]
    fn test_read_lines_rejects_invalid_utf8() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("binary.bin");
        fs::write(&path, [0x66u8, 0xff, 0xfe, 0x0a]).expect("Failed to write file");

        let err = read_lines(&path).unwrap_err();
        assert!(matches!(err, AnalyzerError::SourceUnreadable { .. }));
    }

    #[test]
    fn test_resolve_source() {
        let base = Path::new("resources");
        assert_eq!(resolve_source(base, "input.txt"), PathBuf::from("resources/input.txt"));
        assert_eq!(resolve_source(base, " input.txt \n"), PathBuf::from("resources/input.txt"));
        #[cfg(unix)]
        assert_eq!(resolve_source(base, "/tmp/x.txt"), PathBuf::from("/tmp/x.txt"));
    }

    #[test]
    fn test_load_query_options_partial_file() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("options.json");
        fs::write(&path, r#"{"specific_word": "rust", "top_n": 3}"#).expect("Failed to write file");

        let options = load_query_options(&path).expect("Failed to load options");
        assert_eq!(options.specific_word, "rust");
        assert_eq!(options.top_n, 3);
        assert_eq!(options.line_word, QueryOptions::default().line_word);
    }

    #[test]
    fn test_load_query_options_invalid_json() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("options.json");
        fs::write(&path, "{ not json").expect("Failed to write file");

        assert!(load_query_options(&path).is_err());
        assert!(load_query_options(&dir.path().join("missing.json")).is_err());
    }
}
