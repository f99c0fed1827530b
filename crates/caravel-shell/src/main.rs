//! Caravel process entry point
//!
//! Launches the shell over the in-tree headless backend; a real engine
//! host links its own backend and presentation surfaces against the same
//! traits. No CLI flags; exit 0 on normal close.

use std::path::PathBuf;
use std::sync::Arc;

use caravel_core::{
    Capability, Config, Download, DownloadUi, HeadlessBackend, PermissionPrompt, Shell,
};

/// Prompt surface with no dialog attached: every capability request is
/// dismissed, which denies it.
struct ClosedPrompt;

impl PermissionPrompt for ClosedPrompt {
    fn ask(&self, _origin: &str, _capability: Capability) -> Option<bool> {
        None
    }
}

/// Download surface with no chooser attached: transfers are declined and
/// notices go to the log.
struct LogDownloadUi;

impl DownloadUi for LogDownloadUi {
    fn choose_save_path(&self, _suggested_name: &str) -> Option<PathBuf> {
        None
    }

    fn progress_changed(&self, download: &Download) {
        tracing::debug!(download_id = %download.id, percent = download.progress(), "download progress");
    }

    fn notify(&self, message: &str) {
        tracing::info!("{}", message);
    }
}

fn main() -> caravel_core::Result<()> {
    caravel_core::init_logging();

    let config = Config::from_env();
    let backend = Arc::new(HeadlessBackend::new(config.enable_media_stream));

    let shell = Shell::new(
        config,
        backend,
        Arc::new(ClosedPrompt),
        Arc::new(LogDownloadUi),
    )?;

    tracing::info!(windows = shell.window_count(), "caravel started");

    // The engine host owns the event loop; with the headless backend
    // there is nothing further to drive.
    tracing::info!("caravel shutting down");

    Ok(())
}
