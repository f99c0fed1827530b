//! Tab data structure

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::TabError;
use crate::security::SecurityIndicator;
use crate::Result;

/// Page state of the hosted view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageStatus {
    /// A load is in flight; the label shows transient progress.
    Loading,
    /// The last load finished successfully.
    Ready,
    /// The last load failed (navigation or certificate error). The page
    /// is degraded; the shell is unaffected.
    Failed,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tab {
    /// Stable identifier, used for event routing
    pub id: String,
    /// Current URL
    pub url: String,
    /// Page title
    pub title: String,
    /// Load progress 0-100, meaningful only while loading
    pub load_progress: u8,
    /// Favicon URL if available
    pub favicon_url: Option<String>,
    /// Current page state
    pub status: PageStatus,
    /// When the tab was created
    pub created_at: DateTime<Utc>,
    /// Last modification time
    pub updated_at: DateTime<Utc>,
}

impl Tab {
    pub fn new(url: String) -> Result<Self> {
        if url.is_empty() {
            return Err(TabError::InvalidUrl("URL cannot be empty".to_string()));
        }

        let now = Utc::now();

        Ok(Self {
            id: Uuid::new_v4().to_string(),
            url,
            title: String::new(),
            load_progress: 0,
            favicon_url: None,
            status: PageStatus::Loading,
            created_at: now,
            updated_at: now,
        })
    }

    /// Update URL (navigation)
    pub fn set_url(&mut self, url: String) {
        self.url = url;
        self.updated_at = Utc::now();
    }

    /// Update page title
    pub fn set_title(&mut self, title: String) {
        self.title = title;
        self.updated_at = Utc::now();
    }

    /// Update favicon
    pub fn set_favicon(&mut self, url: Option<String>) {
        self.favicon_url = url;
        self.updated_at = Utc::now();
    }

    /// Record a progress tick; marks the tab loading.
    pub fn set_progress(&mut self, percent: u8) {
        self.load_progress = percent.min(100);
        self.status = PageStatus::Loading;
        self.updated_at = Utc::now();
    }

    /// Record the end of a load.
    pub fn finish_load(&mut self, ok: bool) {
        self.status = if ok { PageStatus::Ready } else { PageStatus::Failed };
        self.updated_at = Utc::now();

        if !ok {
            tracing::debug!(tab_id = %self.id, url = %self.url, "page load failed");
        }
    }

    pub fn is_loading(&self) -> bool {
        self.status == PageStatus::Loading
    }

    /// Label shown on the tab: transient progress while loading, then the
    /// title (falling back to the URL).
    pub fn display_label(&self) -> String {
        if self.is_loading() {
            return format!("{}% - loading...", self.load_progress);
        }

        if self.title.is_empty() {
            self.url.clone()
        } else {
            self.title.clone()
        }
    }

    pub fn security_indicator(&self) -> SecurityIndicator {
        SecurityIndicator::for_url(&self.url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_tab() {
        let tab = Tab::new("https://example.com".to_string()).unwrap();
        assert_eq!(tab.url, "https://example.com");
        assert!(tab.title.is_empty());
        assert_eq!(tab.status, PageStatus::Loading);
    }

    #[test]
    fn test_empty_url_rejected() {
        assert!(Tab::new(String::new()).is_err());
    }

    #[test]
    fn test_display_label_while_loading() {
        let mut tab = Tab::new("https://example.com".to_string()).unwrap();
        tab.set_progress(42);

        assert_eq!(tab.display_label(), "42% - loading...");
    }

    #[test]
    fn test_display_label_reverts_after_load() {
        let mut tab = Tab::new("https://example.com".to_string()).unwrap();
        tab.set_progress(80);
        tab.set_title("Example Domain".to_string());
        tab.finish_load(true);

        assert_eq!(tab.display_label(), "Example Domain");
    }

    #[test]
    fn test_display_label_falls_back_to_url() {
        let mut tab = Tab::new("https://example.com".to_string()).unwrap();
        tab.finish_load(true);

        assert_eq!(tab.display_label(), "https://example.com");
    }

    #[test]
    fn test_failed_load_is_degraded_not_loading() {
        let mut tab = Tab::new("https://broken.example".to_string()).unwrap();
        tab.set_progress(10);
        tab.finish_load(false);

        assert_eq!(tab.status, PageStatus::Failed);
        assert!(!tab.is_loading());
    }
}
