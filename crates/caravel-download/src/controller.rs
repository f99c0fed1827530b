//! Download controller

use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

use caravel_engine::{DownloadId, EngineBackend};

use crate::download::{Download, DownloadState};
use crate::error::DownloadError;
use crate::Result;

/// Presentation surface for downloads: the save-target chooser, the
/// progress dialog, and completion/cancellation notices.
pub trait DownloadUi: Send + Sync {
    /// Ask the user where to save. `None` means the chooser was dismissed
    /// and the transfer must not start.
    fn choose_save_path(&self, suggested_name: &str) -> Option<std::path::PathBuf>;

    /// The progress surface for `download` should show its current
    /// percentage.
    fn progress_changed(&self, download: &Download);

    /// Dismissible user notification ("Download cancelled", "File saved
    /// to: ...").
    fn notify(&self, message: &str);
}

pub struct DownloadController {
    /// One record per engine-issued transfer
    downloads: Arc<RwLock<HashMap<DownloadId, Download>>>,
    backend: Arc<dyn EngineBackend>,
    ui: Arc<dyn DownloadUi>,
}

impl DownloadController {
    pub fn new(backend: Arc<dyn EngineBackend>, ui: Arc<dyn DownloadUi>) -> Self {
        Self {
            downloads: Arc::new(RwLock::new(HashMap::new())),
            backend,
            ui,
        }
    }

    /// Handle a download request from the engine: negotiate the save
    /// target, then either start the transfer or cancel it.
    pub fn handle_request(
        &self,
        id: DownloadId,
        suggested_name: String,
        total_bytes: Option<u64>,
    ) -> Result<Download> {
        let mut download = Download::new(id, suggested_name, total_bytes);

        match self.ui.choose_save_path(&download.suggested_name) {
            Some(path) => {
                download.chosen_path = Some(path.clone());
                download.transition_to(DownloadState::InProgress)?;
                self.backend.accept_download(id, &path);
                self.ui.progress_changed(&download);

                tracing::info!(
                    download_id = %id,
                    path = %path.display(),
                    "Started download"
                );
            }
            None => {
                download.transition_to(DownloadState::Cancelled)?;
                self.backend.cancel_download(id);
                self.ui.notify("Download cancelled");

                tracing::info!(download_id = %id, "Download declined, no save target");
            }
        }

        self.downloads.write().insert(id, download.clone());

        Ok(download)
    }

    /// Get a download by ID
    pub fn get(&self, id: DownloadId) -> Result<Download> {
        self.downloads
            .read()
            .get(&id)
            .cloned()
            .ok_or(DownloadError::NotFound(id))
    }

    /// Apply a progress tick from the engine. Ticks for downloads that
    /// are not in progress are ignored.
    pub fn update_progress(
        &self,
        id: DownloadId,
        received_bytes: u64,
        total_bytes: Option<u64>,
    ) -> Result<Download> {
        let mut download = self.get(id)?;

        if download.state != DownloadState::InProgress {
            return Ok(download);
        }

        download.set_progress(received_bytes, total_bytes);
        self.downloads.write().insert(id, download.clone());
        self.ui.progress_changed(&download);

        Ok(download)
    }

    /// Engine-reported completion.
    pub fn finish(&self, id: DownloadId) -> Result<Download> {
        let mut download = self.get(id)?;

        download.transition_to(DownloadState::Completed)?;
        self.downloads.write().insert(id, download.clone());

        if let Some(path) = &download.chosen_path {
            self.ui.notify(&format!("File saved to: {}", path.display()));
        }

        tracing::info!(download_id = %id, "Completed download");

        Ok(download)
    }

    /// Cancel a transfer. A no-op once the download reached a terminal
    /// state.
    pub fn cancel(&self, id: DownloadId) -> Result<Download> {
        let mut download = self.get(id)?;

        if download.state.is_terminal() {
            return Ok(download);
        }

        download.transition_to(DownloadState::Cancelled)?;
        self.downloads.write().insert(id, download.clone());
        self.backend.cancel_download(id);
        self.ui.notify("Download cancelled");

        tracing::info!(download_id = %id, "Cancelled download");

        Ok(download)
    }

    /// Get all downloads
    pub fn list(&self) -> Vec<Download> {
        self.downloads.read().values().cloned().collect()
    }

    /// Downloads still in flight
    pub fn active(&self) -> Vec<Download> {
        self.downloads
            .read()
            .values()
            .filter(|d| d.state == DownloadState::InProgress)
            .cloned()
            .collect()
    }
}

impl Clone for DownloadController {
    fn clone(&self) -> Self {
        Self {
            downloads: Arc::clone(&self.downloads),
            backend: Arc::clone(&self.backend),
            ui: Arc::clone(&self.ui),
        }
    }
}
