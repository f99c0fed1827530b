//! Caravel Core
//!
//! Configuration, error aggregation, and the multi-window shell. Each
//! top-level window owns a fully independent session; nothing mutable is
//! shared between windows.

mod config;
mod error;
mod shell;

pub use config::Config;
pub use error::CoreError;
pub use shell::Shell;

// Re-export core components
pub use caravel_download::{Download, DownloadController, DownloadError, DownloadState, DownloadUi};
pub use caravel_engine::{
    Capability, DownloadId, EngineBackend, EngineEvent, EngineView, FilterDecision,
    HeadlessBackend, PermissionDecision, UrlRequestInterceptor,
};
pub use caravel_navigation::{Completions, HistoryStore, InputResolution, InputResolver};
pub use caravel_privacy::{PermissionBroker, PermissionPrompt, RequestFilter};
pub use caravel_session::{CloseOutcome, SessionManager, SessionOptions};
pub use caravel_storage::{HistoryFile, StorageError};
pub use caravel_tabs::{PageStatus, SecurityIndicator, Tab, TabError};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt().with_env_filter(filter).with_target(true).init();
}
