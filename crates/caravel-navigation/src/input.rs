//! Input resolution for the address bar
//!
//! Input shaped like a bare host (`word(.word)+`, anything after) gets an
//! `https://` prefix; everything else is percent-encoded into the search
//! engine's query URL.

/// Result of resolving address bar input
#[derive(Debug, Clone, PartialEq)]
pub enum InputResolution {
    /// Navigate to a URL
    Navigate(String),
    /// Perform a search
    Search(String),
}

pub struct InputResolver {
    /// Search engine URL template (%s replaced with the encoded query)
    search_template: String,
}

impl InputResolver {
    pub fn new() -> Self {
        Self {
            search_template: "https://www.google.com/search?q=%s".to_string(),
        }
    }

    pub fn with_search_engine(template: String) -> Self {
        Self {
            search_template: template,
        }
    }

    pub fn search_template(&self) -> &str {
        &self.search_template
    }

    /// Resolve user input into a navigation target
    pub fn resolve(&self, input: &str) -> InputResolution {
        let input = input.trim();

        if input.is_empty() {
            return InputResolution::Navigate("about:blank".to_string());
        }

        if input.starts_with("http://") || input.starts_with("https://") {
            return InputResolution::Navigate(input.to_string());
        }

        if looks_like_host(input) {
            return InputResolution::Navigate(format!("https://{}", input));
        }

        InputResolution::Search(self.build_search_url(input))
    }

    /// Build search URL from query
    fn build_search_url(&self, query: &str) -> String {
        let encoded = urlencoding::encode(query);
        self.search_template.replace("%s", &encoded)
    }
}

impl Default for InputResolver {
    fn default() -> Self {
        Self::new()
    }
}

fn is_label_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '-'
}

/// Heuristic for bare-host input: at least two dot-separated labels of
/// word characters at the front; the rest (path, port, query) is free.
fn looks_like_host(input: &str) -> bool {
    if input.contains(' ') {
        return false;
    }

    let head: &str = input
        .split(|c: char| !is_label_char(c) && c != '.')
        .next()
        .unwrap_or("");

    let labels: Vec<&str> = head.split('.').collect();

    labels.len() >= 2
        && labels
            .iter()
            .all(|label| !label.is_empty() && label.chars().all(is_label_char))
}

// Percent-encoding for search queries, RFC 3986 unreserved set.
mod urlencoding {
    pub fn encode(input: &str) -> String {
        let mut result = String::with_capacity(input.len() * 3);
        for byte in input.bytes() {
            match byte {
                b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                    result.push(byte as char);
                }
                _ => {
                    result.push_str(&format!("%{:02X}", byte));
                }
            }
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_bare_host() {
        let resolver = InputResolver::new();

        assert_eq!(
            resolver.resolve("example.com"),
            InputResolution::Navigate("https://example.com".to_string())
        );
        assert_eq!(
            resolver.resolve("openai.com"),
            InputResolution::Navigate("https://openai.com".to_string())
        );
        assert_eq!(
            resolver.resolve("docs.rs/serde/latest"),
            InputResolution::Navigate("https://docs.rs/serde/latest".to_string())
        );
    }

    #[test]
    fn test_resolve_full_url() {
        let resolver = InputResolver::new();

        assert_eq!(
            resolver.resolve("https://example.com/page"),
            InputResolution::Navigate("https://example.com/page".to_string())
        );
        assert_eq!(
            resolver.resolve("http://example.com"),
            InputResolution::Navigate("http://example.com".to_string())
        );
    }

    #[test]
    fn test_resolve_search() {
        let resolver = InputResolver::new();

        match resolver.resolve("how to boil eggs") {
            InputResolution::Search(url) => {
                assert!(url.starts_with("https://www.google.com/search?q="));
                assert!(url.ends_with("how%20to%20boil%20eggs"));
            }
            other => panic!("expected Search, got {:?}", other),
        }
    }

    #[test]
    fn test_single_word_is_a_search() {
        let resolver = InputResolver::new();

        assert!(matches!(
            resolver.resolve("localhost"),
            InputResolution::Search(_)
        ));
    }

    #[test]
    fn test_malformed_host_is_a_search() {
        let resolver = InputResolver::new();

        assert!(matches!(
            resolver.resolve("example..com"),
            InputResolution::Search(_)
        ));
    }

    #[test]
    fn test_empty_input_is_blank_page() {
        let resolver = InputResolver::new();

        assert_eq!(
            resolver.resolve("   "),
            InputResolution::Navigate("about:blank".to_string())
        );
    }

    #[test]
    fn test_custom_search_engine() {
        let resolver =
            InputResolver::with_search_engine("https://duckduckgo.com/?q=%s".to_string());

        assert_eq!(
            resolver.resolve("rust"),
            InputResolution::Search("https://duckduckgo.com/?q=rust".to_string())
        );
    }
}
