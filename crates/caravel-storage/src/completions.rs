//! Address-bar completion candidates
//!
//! A plain newline-delimited list of URLs/hosts. Read-only and optional.

use std::fs;
use std::path::Path;

/// Read candidate lines from `path`. An absent or unreadable file yields
/// no candidates.
pub fn read_candidate_lines(path: &Path) -> Vec<String> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(_) => return Vec::new(),
    };

    raw.lines()
        .map(str::trim_end)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("links.txt");
        std::fs::write(&path, "https://example.com\nrust-lang.org\n\n").unwrap();

        let lines = read_candidate_lines(&path);
        assert_eq!(lines, vec!["https://example.com", "rust-lang.org"]);
    }

    #[test]
    fn test_absent_file_has_no_candidates() {
        let dir = tempfile::tempdir().unwrap();
        assert!(read_candidate_lines(&dir.path().join("links.txt")).is_empty());
    }
}
