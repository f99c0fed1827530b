//! Per-tab engine binding

use std::sync::Arc;

use caravel_engine::{EngineBackend, EngineView, UrlRequestInterceptor};
use caravel_tabs::Tab;

use crate::Result;

/// One tab plus the engine view it owns.
pub struct TabSession {
    pub tab: Tab,
    view: Box<dyn EngineView>,
}

impl TabSession {
    /// Create a view bound to the shared request filter and navigate it
    /// to `url`.
    pub fn open(
        backend: &dyn EngineBackend,
        interceptor: Arc<dyn UrlRequestInterceptor>,
        url: &str,
    ) -> Result<Self> {
        let mut view = backend.create_view(interceptor);
        view.navigate(url);

        Ok(Self {
            tab: Tab::new(url.to_string())?,
            view,
        })
    }

    /// Create a sibling bound to the same underlying page, so the opener's
    /// scripts keep a live reference to the new window.
    pub fn open_sibling(&self) -> Result<Self> {
        let view = self.view.share_page();

        let mut url = view.current_url();
        if url.is_empty() {
            url = "about:blank".to_string();
        }

        Ok(Self {
            tab: Tab::new(url)?,
            view,
        })
    }

    pub fn view(&self) -> &dyn EngineView {
        self.view.as_ref()
    }

    pub fn view_mut(&mut self) -> &mut dyn EngineView {
        self.view.as_mut()
    }

    pub fn navigate(&mut self, url: String) {
        self.view.navigate(&url);
        self.tab.set_url(url);
    }

    pub fn go_back(&mut self) {
        self.view.go_back();
    }

    pub fn go_forward(&mut self) {
        self.view.go_forward();
    }

    pub fn reload(&mut self) {
        self.view.reload();
    }

    /// Tear the tab down: stop the in-flight load and park the view on a
    /// blank page before the view is released, so no late callback fires
    /// against a destroyed tab.
    pub fn close(mut self) {
        self.view.stop();
        self.view.navigate("about:blank");

        tracing::debug!(tab_id = %self.tab.id, "tab released");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use caravel_engine::{EngineCommand, FilterDecision, HeadlessBackend};

    struct AllowAll;

    impl UrlRequestInterceptor for AllowAll {
        fn intercept(&self, _url: &str) -> FilterDecision {
            FilterDecision::Allow
        }
    }

    #[test]
    fn test_open_navigates_home() {
        let backend = HeadlessBackend::default();
        let session = TabSession::open(&backend, Arc::new(AllowAll), "https://google.com").unwrap();

        assert_eq!(session.tab.url, "https://google.com");
        assert_eq!(session.view().current_url(), "https://google.com");
    }

    #[test]
    fn test_close_stops_and_parks_the_view() {
        let backend = HeadlessBackend::default();
        let session = TabSession::open(&backend, Arc::new(AllowAll), "https://google.com").unwrap();

        session.close();

        let commands = backend.commands();
        assert_eq!(
            &commands[commands.len() - 2..],
            &[
                EngineCommand::Stop,
                EngineCommand::Navigate {
                    url: "about:blank".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_sibling_shares_the_page() {
        let backend = HeadlessBackend::default();
        let mut opener =
            TabSession::open(&backend, Arc::new(AllowAll), "https://example.com").unwrap();

        let sibling = opener.open_sibling().unwrap();
        assert_eq!(sibling.tab.url, "https://example.com");

        opener.navigate("https://example.com/next".to_string());
        assert_eq!(sibling.view().current_url(), "https://example.com/next");
    }
}
