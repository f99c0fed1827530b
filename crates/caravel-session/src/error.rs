//! Session error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Tab error: {0}")]
    Tab(#[from] caravel_tabs::TabError),

    #[error("Download error: {0}")]
    Download(#[from] caravel_download::DownloadError),
}
