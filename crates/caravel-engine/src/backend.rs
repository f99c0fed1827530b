//! Backend and view traits

use std::path::Path;
use std::sync::Arc;

use crate::event::{Capability, DownloadId, FilterDecision, PermissionDecision};

/// Inline hook on the outbound request path.
///
/// Runs synchronously for every request a view issues (document,
/// subresources, XHR/fetch). Implementations must not block on user input
/// or I/O.
pub trait UrlRequestInterceptor: Send + Sync {
    fn intercept(&self, url: &str) -> FilterDecision;
}

/// One rendering surface owned by a tab.
///
/// Views are UI-thread objects; they are not `Send`. Commands are accepted
/// immediately and their effects surface later as [`EngineEvent`]s.
///
/// [`EngineEvent`]: crate::EngineEvent
pub trait EngineView {
    fn navigate(&mut self, url: &str);

    /// Abort the in-flight load, if any.
    fn stop(&mut self);

    fn go_back(&mut self);

    fn go_forward(&mut self);

    fn reload(&mut self);

    fn current_url(&self) -> String;

    fn current_title(&self) -> String;

    /// Create a view bound to the same underlying page, so scripts in the
    /// opener keep a live reference to the opened window.
    fn share_page(&self) -> Box<dyn EngineView>;

    /// Relay a permission decision. Engines key grants by origin, so the
    /// origin must be the one that issued the request.
    fn set_permission(
        &mut self,
        origin: &str,
        capability: Capability,
        decision: PermissionDecision,
    );
}

/// Process-wide engine handle: creates views and owns profile-level
/// operations (cookies, transfer accept/cancel).
pub trait EngineBackend: Send + Sync {
    fn create_view(&self, interceptor: Arc<dyn UrlRequestInterceptor>) -> Box<dyn EngineView>;

    fn clear_cookies(&self);

    /// Begin the transfer identified by `id` into `path`.
    fn accept_download(&self, id: DownloadId, path: &Path);

    /// Abort the transfer identified by `id`.
    fn cancel_download(&self, id: DownloadId);
}
