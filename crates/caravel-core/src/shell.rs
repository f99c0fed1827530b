//! Multi-window shell
//!
//! Owns every top-level window's session. Windows are fully independent:
//! each gets its own history store and download table, created from the
//! same config. The shell exits when the last window closes.

use std::sync::Arc;

use caravel_download::DownloadUi;
use caravel_engine::EngineBackend;
use caravel_privacy::PermissionPrompt;
use caravel_session::{CloseOutcome, SessionManager};

use crate::config::Config;
use crate::error::CoreError;
use crate::Result;

pub struct Shell {
    config: Config,
    backend: Arc<dyn EngineBackend>,
    prompt: Arc<dyn PermissionPrompt>,
    download_ui: Arc<dyn DownloadUi>,
    windows: Vec<SessionManager>,
}

impl Shell {
    /// Create the shell and open the first window.
    pub fn new(
        config: Config,
        backend: Arc<dyn EngineBackend>,
        prompt: Arc<dyn PermissionPrompt>,
        download_ui: Arc<dyn DownloadUi>,
    ) -> Result<Self> {
        std::fs::create_dir_all(&config.data_dir)?;

        let mut shell = Self {
            config,
            backend,
            prompt,
            download_ui,
            windows: Vec::new(),
        };
        shell.open_window()?;

        Ok(shell)
    }

    /// Open an independent top-level window with its own session.
    pub fn open_window(&mut self) -> Result<usize> {
        let session = SessionManager::new(
            Arc::clone(&self.backend),
            Arc::clone(&self.prompt),
            Arc::clone(&self.download_ui),
            self.config.session_options(),
        )?;

        self.windows.push(session);
        let index = self.windows.len() - 1;

        tracing::info!(window = index, "opened window");

        Ok(index)
    }

    /// Close a tab in a window; a session-close outcome closes the whole
    /// window.
    pub fn close_tab(&mut self, window: usize, tab_id: &str) -> Result<()> {
        let session = self
            .windows
            .get_mut(window)
            .ok_or(CoreError::WindowNotFound(window))?;

        if session.close_tab(tab_id) == CloseOutcome::SessionClosed {
            self.close_window(window);
        }

        Ok(())
    }

    pub fn close_window(&mut self, window: usize) {
        if window < self.windows.len() {
            self.windows.remove(window);
            tracing::info!(window = window, "closed window");
        }
    }

    pub fn window(&self, window: usize) -> Option<&SessionManager> {
        self.windows.get(window)
    }

    pub fn window_mut(&mut self, window: usize) -> Option<&mut SessionManager> {
        self.windows.get_mut(window)
    }

    pub fn window_count(&self) -> usize {
        self.windows.len()
    }

    /// True once every window is closed; the process should exit.
    pub fn is_closed(&self) -> bool {
        self.windows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use caravel_download::Download;
    use caravel_engine::{Capability, HeadlessBackend};
    use std::path::PathBuf;

    struct DenyPrompt;

    impl PermissionPrompt for DenyPrompt {
        fn ask(&self, _origin: &str, _capability: Capability) -> Option<bool> {
            Some(false)
        }
    }

    struct NoDownloads;

    impl DownloadUi for NoDownloads {
        fn choose_save_path(&self, _suggested_name: &str) -> Option<PathBuf> {
            None
        }

        fn progress_changed(&self, _download: &Download) {}

        fn notify(&self, _message: &str) {}
    }

    fn shell(dir: &tempfile::TempDir) -> Shell {
        let config = Config::new(dir.path().to_path_buf());
        Shell::new(
            config,
            Arc::new(HeadlessBackend::default()),
            Arc::new(DenyPrompt),
            Arc::new(NoDownloads),
        )
        .unwrap()
    }

    #[test]
    fn test_shell_opens_with_one_window() {
        let dir = tempfile::tempdir().unwrap();
        let shell = shell(&dir);

        assert_eq!(shell.window_count(), 1);
        assert_eq!(shell.window(0).unwrap().tab_count(), 1);
    }

    #[test]
    fn test_windows_have_independent_history() {
        let dir = tempfile::tempdir().unwrap();
        let mut shell = shell(&dir);

        let second = shell.open_window().unwrap();

        shell
            .window_mut(0)
            .unwrap()
            .submit_address("example.com");

        assert_eq!(shell.window(0).unwrap().history().len(), 1);
        assert!(shell.window(second).unwrap().history().is_empty());
    }

    #[test]
    fn test_closing_the_last_tab_closes_the_window() {
        let dir = tempfile::tempdir().unwrap();
        let mut shell = shell(&dir);

        let tab_id = shell.window(0).unwrap().active_tab().unwrap().id.clone();
        shell.close_tab(0, &tab_id).unwrap();

        assert!(shell.is_closed());
    }

    #[test]
    fn test_closing_one_of_two_tabs_keeps_the_window() {
        let dir = tempfile::tempdir().unwrap();
        let mut shell = shell(&dir);

        let first = shell.window(0).unwrap().active_tab().unwrap().id.clone();
        shell.window_mut(0).unwrap().new_tab().unwrap();

        shell.close_tab(0, &first).unwrap();

        assert_eq!(shell.window_count(), 1);
        assert_eq!(shell.window(0).unwrap().tab_count(), 1);
    }
}
