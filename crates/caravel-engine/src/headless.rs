//! Headless engine backend
//!
//! Renders nothing and emits no events of its own; every command is
//! recorded so tests can assert on what the shell instructed the engine
//! to do. Shared-page views observe each other's navigation through one
//! page cell, matching opener-linked view semantics.

use parking_lot::RwLock;
use std::path::PathBuf;
use std::sync::Arc;

use crate::backend::{EngineBackend, EngineView, UrlRequestInterceptor};
use crate::event::{Capability, DownloadId, FilterDecision, PermissionDecision};

/// A command the shell issued against the backend or one of its views.
#[derive(Debug, Clone, PartialEq)]
pub enum EngineCommand {
    Navigate { url: String },
    Stop,
    GoBack,
    GoForward,
    Reload,
    SetPermission {
        origin: String,
        capability: Capability,
        decision: PermissionDecision,
    },
    ClearCookies,
    AcceptDownload { id: DownloadId, path: PathBuf },
    CancelDownload { id: DownloadId },
}

#[derive(Debug, Default)]
struct PageState {
    url: String,
    title: String,
}

pub struct HeadlessBackend {
    commands: Arc<RwLock<Vec<EngineCommand>>>,
    media_stream_enabled: bool,
}

impl HeadlessBackend {
    pub fn new(media_stream_enabled: bool) -> Self {
        Self {
            commands: Arc::new(RwLock::new(Vec::new())),
            media_stream_enabled,
        }
    }

    pub fn media_stream_enabled(&self) -> bool {
        self.media_stream_enabled
    }

    /// Snapshot of every command recorded so far, across all views.
    pub fn commands(&self) -> Vec<EngineCommand> {
        self.commands.read().clone()
    }
}

impl Default for HeadlessBackend {
    fn default() -> Self {
        Self::new(false)
    }
}

impl EngineBackend for HeadlessBackend {
    fn create_view(&self, interceptor: Arc<dyn UrlRequestInterceptor>) -> Box<dyn EngineView> {
        Box::new(HeadlessView {
            page: Arc::new(RwLock::new(PageState::default())),
            commands: Arc::clone(&self.commands),
            interceptor,
        })
    }

    fn clear_cookies(&self) {
        self.commands.write().push(EngineCommand::ClearCookies);
    }

    fn accept_download(&self, id: DownloadId, path: &std::path::Path) {
        self.commands.write().push(EngineCommand::AcceptDownload {
            id,
            path: path.to_path_buf(),
        });
    }

    fn cancel_download(&self, id: DownloadId) {
        self.commands
            .write()
            .push(EngineCommand::CancelDownload { id });
    }
}

pub struct HeadlessView {
    page: Arc<RwLock<PageState>>,
    commands: Arc<RwLock<Vec<EngineCommand>>>,
    interceptor: Arc<dyn UrlRequestInterceptor>,
}

impl HeadlessView {
    /// Issue a subresource request through the interceptor, as the real
    /// engine would on the hot path.
    pub fn request(&self, url: &str) -> FilterDecision {
        self.interceptor.intercept(url)
    }

    /// Test hook: set the page title as a finished load would.
    pub fn set_page_title(&self, title: &str) {
        self.page.write().title = title.to_string();
    }
}

impl EngineView for HeadlessView {
    fn navigate(&mut self, url: &str) {
        self.commands.write().push(EngineCommand::Navigate {
            url: url.to_string(),
        });

        if self.interceptor.intercept(url) == FilterDecision::Block {
            tracing::debug!(url = %url, "navigation blocked by interceptor");
            return;
        }

        let mut page = self.page.write();
        page.url = url.to_string();
        page.title.clear();
    }

    fn stop(&mut self) {
        self.commands.write().push(EngineCommand::Stop);
    }

    fn go_back(&mut self) {
        self.commands.write().push(EngineCommand::GoBack);
    }

    fn go_forward(&mut self) {
        self.commands.write().push(EngineCommand::GoForward);
    }

    fn reload(&mut self) {
        self.commands.write().push(EngineCommand::Reload);
    }

    fn current_url(&self) -> String {
        self.page.read().url.clone()
    }

    fn current_title(&self) -> String {
        self.page.read().title.clone()
    }

    fn share_page(&self) -> Box<dyn EngineView> {
        Box::new(HeadlessView {
            page: Arc::clone(&self.page),
            commands: Arc::clone(&self.commands),
            interceptor: Arc::clone(&self.interceptor),
        })
    }

    fn set_permission(
        &mut self,
        origin: &str,
        capability: Capability,
        decision: PermissionDecision,
    ) {
        self.commands.write().push(EngineCommand::SetPermission {
            origin: origin.to_string(),
            capability,
            decision,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct AllowAll;

    impl UrlRequestInterceptor for AllowAll {
        fn intercept(&self, _url: &str) -> FilterDecision {
            FilterDecision::Allow
        }
    }

    struct BlockAll;

    impl UrlRequestInterceptor for BlockAll {
        fn intercept(&self, _url: &str) -> FilterDecision {
            FilterDecision::Block
        }
    }

    #[test]
    fn test_commands_recorded() {
        let backend = HeadlessBackend::default();
        let mut view = backend.create_view(Arc::new(AllowAll));

        view.navigate("https://example.com");
        view.stop();
        backend.clear_cookies();

        assert_eq!(
            backend.commands(),
            vec![
                EngineCommand::Navigate {
                    url: "https://example.com".to_string()
                },
                EngineCommand::Stop,
                EngineCommand::ClearCookies,
            ]
        );
    }

    #[test]
    fn test_shared_page_views_observe_navigation() {
        let backend = HeadlessBackend::default();
        let mut opener = backend.create_view(Arc::new(AllowAll));
        opener.navigate("https://example.com");

        let mut sibling = opener.share_page();
        assert_eq!(sibling.current_url(), "https://example.com");

        sibling.navigate("https://example.com/next");
        assert_eq!(opener.current_url(), "https://example.com/next");
    }

    #[test]
    fn test_blocked_navigation_leaves_page_unchanged() {
        let backend = HeadlessBackend::default();
        let mut view = backend.create_view(Arc::new(BlockAll));

        view.navigate("https://ads.example.com");
        assert_eq!(view.current_url(), "");
    }
}
