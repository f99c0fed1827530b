//! Outbound request filter
//!
//! Data-driven rule table: a list of domain substrings plus a fixed set of
//! keywords matched as case-insensitive whole words. First match blocks.
//! Runs on the hot path of every request a page issues, so the decision is
//! a linear scan with one lowercase buffer and nothing else.

use caravel_engine::{FilterDecision, UrlRequestInterceptor};

/// Advertising/tracking hosts blocked by substring match.
const BLOCKED_DOMAINS: &[&str] = &[
    "doubleclick.net",
    "googleadservices.com",
    "ads.youtube.com",
    "pagead2.googlesyndication.com",
    "adnxs.com",
    "trackcmp.net",
    "adroll.com",
    "googlesyndication.com",
    "securepubads.g.doubleclick.net",
    "ytads.youtube.com",
    "static.wolf-327b.com",
    "cdn.wolf-327b.com",
    "acdn.tsyndicate.com",
    "adservice.google.com",
];

/// Keywords blocked as whole words anywhere in the URL.
const BLOCKED_KEYWORDS: &[&str] = &["ad", "track", "analytics", "advertisement", "served"];

pub struct RequestFilter {
    blocked_domains: Vec<String>,
    keywords: Vec<String>,
}

impl RequestFilter {
    pub fn new() -> Self {
        Self::with_domains(BLOCKED_DOMAINS.iter().map(|d| d.to_string()).collect())
    }

    pub fn with_domains(blocked_domains: Vec<String>) -> Self {
        Self {
            blocked_domains,
            keywords: BLOCKED_KEYWORDS.iter().map(|k| k.to_string()).collect(),
        }
    }

    pub fn blocked_domain_count(&self) -> usize {
        self.blocked_domains.len()
    }

    /// Decide one request attempt. Each attempt is evaluated
    /// independently; a block is final for that attempt only.
    pub fn decide(&self, url: &str) -> FilterDecision {
        if self
            .blocked_domains
            .iter()
            .any(|domain| url.contains(domain.as_str()))
        {
            tracing::debug!(url = %url, "blocked request");
            return FilterDecision::Block;
        }

        let lower = url.to_ascii_lowercase();
        if self
            .keywords
            .iter()
            .any(|keyword| contains_whole_word(&lower, keyword))
        {
            tracing::debug!(url = %url, "blocked request");
            return FilterDecision::Block;
        }

        FilterDecision::Allow
    }
}

impl Default for RequestFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl UrlRequestInterceptor for RequestFilter {
    fn intercept(&self, url: &str) -> FilterDecision {
        self.decide(url)
    }
}

fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// `word` present in `haystack` with non-word (or boundary) neighbors on
/// both sides. `word` must be ASCII.
fn contains_whole_word(haystack: &str, word: &str) -> bool {
    let bytes = haystack.as_bytes();
    let mut start = 0;

    while let Some(pos) = haystack[start..].find(word) {
        let idx = start + pos;
        let end = idx + word.len();

        let before_ok = idx == 0 || !is_word_byte(bytes[idx - 1]);
        let after_ok = end >= bytes.len() || !is_word_byte(bytes[end]);
        if before_ok && after_ok {
            return true;
        }

        // The match starts with an ASCII byte, so idx + 1 stays on a char
        // boundary.
        start = idx + 1;
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blocked_domain_substring() {
        let filter = RequestFilter::new();

        assert_eq!(
            filter.decide("https://securepubads.g.doubleclick.net/gampad/ads"),
            FilterDecision::Block
        );
        assert_eq!(
            filter.decide("https://sub.adnxs.com/pixel?x=1"),
            FilterDecision::Block
        );
    }

    #[test]
    fn test_keyword_whole_word() {
        let filter = RequestFilter::with_domains(Vec::new());

        assert_eq!(
            filter.decide("https://example.com/ad/banner.js"),
            FilterDecision::Block
        );
        assert_eq!(
            filter.decide("https://example.com/js?v=ANALYTICS"),
            FilterDecision::Block
        );
        assert_eq!(
            filter.decide("https://example.com/served/script.js"),
            FilterDecision::Block
        );
    }

    #[test]
    fn test_keyword_inside_word_allowed() {
        let filter = RequestFilter::with_domains(Vec::new());

        // "ad" inside "download", "track" inside "tracker"
        assert_eq!(
            filter.decide("https://example.com/download.zip"),
            FilterDecision::Allow
        );
        assert_eq!(
            filter.decide("https://example.com/trackers-explained"),
            FilterDecision::Allow
        );
    }

    #[test]
    fn test_clean_url_allowed() {
        let filter = RequestFilter::new();

        assert_eq!(
            filter.decide("https://example.com/article"),
            FilterDecision::Allow
        );
        assert_eq!(
            filter.decide("https://rust-lang.org/learn"),
            FilterDecision::Allow
        );
    }

    #[test]
    fn test_each_attempt_evaluated_independently() {
        let filter = RequestFilter::new();
        let url = "https://adservice.google.com/ddm/fls";

        assert_eq!(filter.decide(url), FilterDecision::Block);
        assert_eq!(filter.decide(url), FilterDecision::Block);
    }
}
