//! Address-bar completion suggestions

use std::path::Path;

use caravel_storage::read_candidate_lines;

pub struct Completions {
    candidates: Vec<String>,
}

impl Completions {
    /// Load candidates from the optional newline-delimited file.
    pub fn load(path: &Path) -> Self {
        Self {
            candidates: read_candidate_lines(path),
        }
    }

    pub fn from_candidates(candidates: Vec<String>) -> Self {
        Self { candidates }
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Candidates starting with `prefix`, case-insensitively.
    pub fn suggest(&self, prefix: &str) -> Vec<&str> {
        if prefix.is_empty() {
            return Vec::new();
        }

        let prefix = prefix.to_lowercase();
        self.candidates
            .iter()
            .filter(|candidate| candidate.to_lowercase().starts_with(&prefix))
            .map(String::as_str)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suggest_case_insensitive_prefix() {
        let completions = Completions::from_candidates(vec![
            "https://example.com".to_string(),
            "https://rust-lang.org".to_string(),
            "HTTPS://EXAMPLE.ORG".to_string(),
        ]);

        let suggestions = completions.suggest("https://ex");
        assert_eq!(suggestions, vec!["https://example.com", "HTTPS://EXAMPLE.ORG"]);
    }

    #[test]
    fn test_empty_prefix_suggests_nothing() {
        let completions = Completions::from_candidates(vec!["https://example.com".to_string()]);
        assert!(completions.suggest("").is_empty());
    }
}
