//! Address-bar security indicator

use serde::{Deserialize, Serialize};
use url::Url;

/// Lock/unlock affordance shown next to the address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SecurityIndicator {
    Secure,
    Insecure,
}

impl SecurityIndicator {
    /// `https` is the only scheme shown as secure; unparseable URLs are
    /// treated as insecure.
    pub fn for_url(url: &str) -> Self {
        match Url::parse(url) {
            Ok(parsed) if parsed.scheme() == "https" => SecurityIndicator::Secure,
            _ => SecurityIndicator::Insecure,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SecurityIndicator::Secure => "secure",
            SecurityIndicator::Insecure => "insecure",
        }
    }
}

impl std::fmt::Display for SecurityIndicator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_https_is_secure() {
        assert_eq!(
            SecurityIndicator::for_url("https://example.com"),
            SecurityIndicator::Secure
        );
    }

    #[test]
    fn test_other_schemes_are_insecure() {
        assert_eq!(
            SecurityIndicator::for_url("http://example.com"),
            SecurityIndicator::Insecure
        );
        assert_eq!(
            SecurityIndicator::for_url("about:blank"),
            SecurityIndicator::Insecure
        );
        assert_eq!(
            SecurityIndicator::for_url("not a url"),
            SecurityIndicator::Insecure
        );
    }
}
