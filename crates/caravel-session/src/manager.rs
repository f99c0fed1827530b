//! Session manager
//!
//! Owns the ordered tab collection and the shared shell services, and
//! routes every engine event by the stable id of the tab that owns the
//! emitting view. Events for ids no longer in the table are dropped.

use std::path::PathBuf;
use std::sync::Arc;

use caravel_download::{DownloadController, DownloadUi};
use caravel_engine::{EngineBackend, EngineEvent, UrlRequestInterceptor};
use caravel_navigation::{Completions, HistoryStore, InputResolution, InputResolver};
use caravel_privacy::{PermissionBroker, PermissionPrompt, RequestFilter};
use caravel_storage::HistoryFile;
use caravel_tabs::{SecurityIndicator, Tab};

use crate::tab_session::TabSession;
use crate::Result;

/// What closing a tab did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseOutcome {
    /// The tab was removed; the session stays open.
    TabClosed,
    /// The last tab was asked to close; the whole session should close
    /// instead. The tab itself is untouched.
    SessionClosed,
}

/// Per-session settings, resolved by the embedding shell.
#[derive(Debug, Clone)]
pub struct SessionOptions {
    pub home_url: String,
    pub search_engine: String,
    pub history_path: PathBuf,
    pub completions_path: PathBuf,
}

pub struct SessionManager {
    backend: Arc<dyn EngineBackend>,
    /// Immutable after startup, shared by every view of this session
    filter: Arc<RequestFilter>,
    broker: PermissionBroker,
    downloads: DownloadController,
    history: HistoryStore,
    resolver: InputResolver,
    completions: Completions,
    /// Insertion order is display order
    tabs: Vec<TabSession>,
    active_tab_id: Option<String>,
    home_url: String,
}

impl SessionManager {
    /// Build a session with its own history log and download table, and
    /// open the initial tab at the home URL.
    pub fn new(
        backend: Arc<dyn EngineBackend>,
        prompt: Arc<dyn PermissionPrompt>,
        download_ui: Arc<dyn DownloadUi>,
        options: SessionOptions,
    ) -> Result<Self> {
        let downloads = DownloadController::new(Arc::clone(&backend), download_ui);
        let history = HistoryStore::load(HistoryFile::new(&options.history_path));
        let completions = Completions::load(&options.completions_path);

        let mut manager = Self {
            backend,
            filter: Arc::new(RequestFilter::new()),
            broker: PermissionBroker::new(prompt),
            downloads,
            history,
            resolver: InputResolver::with_search_engine(options.search_engine),
            completions,
            tabs: Vec::new(),
            active_tab_id: None,
            home_url: options.home_url,
        };

        // A live session always has at least one tab.
        manager.new_tab()?;

        Ok(manager)
    }

    fn interceptor(&self) -> Arc<dyn UrlRequestInterceptor> {
        Arc::clone(&self.filter) as Arc<dyn UrlRequestInterceptor>
    }

    /// Open a tab at the home URL and focus it.
    pub fn new_tab(&mut self) -> Result<Tab> {
        let session = TabSession::open(self.backend.as_ref(), self.interceptor(), &self.home_url)?;
        let tab = session.tab.clone();

        self.tabs.push(session);
        self.active_tab_id = Some(tab.id.clone());

        tracing::info!(tab_id = %tab.id, url = %tab.url, "opened tab");

        Ok(tab)
    }

    /// Route one engine event to the owning tab. Events for unknown ids
    /// (a tab closed while the event was in flight) are dropped.
    pub fn dispatch(&mut self, tab_id: &str, event: EngineEvent) {
        let Some(index) = self.tab_index(tab_id) else {
            tracing::debug!(tab_id = %tab_id, ?event, "event for unknown tab dropped");
            return;
        };

        match event {
            EngineEvent::UrlChanged { url } => {
                self.tabs[index].tab.set_url(url);
            }
            EngineEvent::TitleChanged { title } => {
                self.tabs[index].tab.set_title(title);
            }
            EngineEvent::LoadProgress { percent } => {
                self.tabs[index].tab.set_progress(percent);
            }
            EngineEvent::LoadFinished { ok } => {
                let session = &mut self.tabs[index];
                session.tab.finish_load(ok);

                if ok {
                    let title = session.view().current_title();
                    if !title.is_empty() {
                        session.tab.set_title(title);
                    }

                    let url = session.view().current_url();
                    if !url.is_empty() {
                        self.history.record(&url);
                    }
                }
            }
            EngineEvent::IconChanged { icon_url } => {
                self.tabs[index].tab.set_favicon(icon_url);
            }
            EngineEvent::NewWindowRequested => match self.tabs[index].open_sibling() {
                Ok(sibling) => {
                    let id = sibling.tab.id.clone();
                    tracing::info!(tab_id = %id, opener = %tab_id, "opened sibling tab");
                    self.tabs.push(sibling);
                    self.active_tab_id = Some(id);
                }
                Err(e) => {
                    tracing::warn!(opener = %tab_id, error = %e, "sibling tab creation failed");
                }
            },
            EngineEvent::DownloadRequested {
                id,
                suggested_name,
                total_bytes,
            } => {
                if let Err(e) = self.downloads.handle_request(id, suggested_name, total_bytes) {
                    tracing::warn!(download_id = %id, error = %e, "download request failed");
                }
            }
            EngineEvent::DownloadProgress {
                id,
                received_bytes,
                total_bytes,
            } => {
                if let Err(e) = self.downloads.update_progress(id, received_bytes, total_bytes) {
                    tracing::warn!(download_id = %id, error = %e, "progress for unknown download");
                }
            }
            EngineEvent::DownloadFinished { id } => {
                if let Err(e) = self.downloads.finish(id) {
                    tracing::warn!(download_id = %id, error = %e, "finish for unknown download");
                }
            }
            EngineEvent::PermissionRequested { origin, capability } => {
                let decision = self.broker.request(&origin, capability);
                // Relayed with the origin that issued the request; engines
                // key grants by origin.
                self.tabs[index]
                    .view_mut()
                    .set_permission(&origin, capability, decision);
            }
        }
    }

    /// Resolve address-bar input and navigate the active tab.
    pub fn submit_address(&mut self, input: &str) {
        let url = match self.resolver.resolve(input) {
            InputResolution::Navigate(url) => url,
            InputResolution::Search(url) => url,
        };

        if let Some(session) = self.active_session_mut() {
            session.navigate(url.clone());
        }
        self.history.record(&url);
    }

    /// Close a tab. Closing the last remaining tab closes the session
    /// instead; the tab count of a live session never reaches zero.
    pub fn close_tab(&mut self, tab_id: &str) -> CloseOutcome {
        let Some(index) = self.tab_index(tab_id) else {
            tracing::debug!(tab_id = %tab_id, "close for unknown tab ignored");
            return CloseOutcome::TabClosed;
        };

        if self.tabs.len() == 1 {
            return CloseOutcome::SessionClosed;
        }

        let session = self.tabs.remove(index);
        session.close();

        if self.active_tab_id.as_deref() == Some(tab_id) {
            let neighbor = index.min(self.tabs.len() - 1);
            self.active_tab_id = self.tabs.get(neighbor).map(|s| s.tab.id.clone());
        }

        tracing::info!(tab_id = %tab_id, "closed tab");

        CloseOutcome::TabClosed
    }

    /// Focus a tab by id.
    pub fn activate_tab(&mut self, tab_id: &str) {
        if self.tab_index(tab_id).is_some() {
            self.active_tab_id = Some(tab_id.to_string());
        }
    }

    /// Move a tab to a new position, preserving the order of the rest.
    pub fn move_tab(&mut self, tab_id: &str, new_index: usize) {
        if let Some(current) = self.tab_index(tab_id) {
            let session = self.tabs.remove(current);
            let insert = new_index.min(self.tabs.len());
            self.tabs.insert(insert, session);
        }
    }

    /// Tabs in display order
    pub fn tabs(&self) -> Vec<&Tab> {
        self.tabs.iter().map(|s| &s.tab).collect()
    }

    pub fn tab_count(&self) -> usize {
        self.tabs.len()
    }

    pub fn active_tab(&self) -> Option<&Tab> {
        self.tabs.get(self.active_index()?).map(|s| &s.tab)
    }

    /// Address text and lock/unlock affordance for the focused tab.
    pub fn address_display(&self) -> Option<(String, SecurityIndicator)> {
        self.active_tab()
            .map(|tab| (tab.url.clone(), tab.security_indicator()))
    }

    pub fn go_back(&mut self) {
        if let Some(session) = self.active_session_mut() {
            session.go_back();
        }
    }

    pub fn go_forward(&mut self) {
        if let Some(session) = self.active_session_mut() {
            session.go_forward();
        }
    }

    pub fn reload(&mut self) {
        if let Some(session) = self.active_session_mut() {
            session.reload();
        }
    }

    pub fn go_home(&mut self) {
        let home = self.home_url.clone();
        if let Some(session) = self.active_session_mut() {
            session.navigate(home);
        }
    }

    /// Clear all cookies in the engine profile.
    pub fn clear_cookies(&self) {
        self.backend.clear_cookies();
        tracing::info!("cookies cleared");
    }

    /// History entries, newest first
    pub fn history(&self) -> &[String] {
        self.history.entries()
    }

    pub fn remove_history_entry(&mut self, url: &str) {
        self.history.remove(url);
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// Address-bar completion candidates for a prefix
    pub fn suggest(&self, prefix: &str) -> Vec<&str> {
        self.completions.suggest(prefix)
    }

    pub fn downloads(&self) -> &DownloadController {
        &self.downloads
    }

    fn tab_index(&self, tab_id: &str) -> Option<usize> {
        self.tabs.iter().position(|s| s.tab.id == tab_id)
    }

    fn active_index(&self) -> Option<usize> {
        let id = self.active_tab_id.as_deref()?;
        self.tab_index(id)
    }

    fn active_session_mut(&mut self) -> Option<&mut TabSession> {
        let index = self.active_index()?;
        self.tabs.get_mut(index)
    }
}
