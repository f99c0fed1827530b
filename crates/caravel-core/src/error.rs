//! Core error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Storage error: {0}")]
    Storage(#[from] caravel_storage::StorageError),

    #[error("Tab error: {0}")]
    Tab(#[from] caravel_tabs::TabError),

    #[error("Session error: {0}")]
    Session(#[from] caravel_session::SessionError),

    #[error("Download error: {0}")]
    Download(#[from] caravel_download::DownloadError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("No such window: {0}")]
    WindowNotFound(usize),
}
