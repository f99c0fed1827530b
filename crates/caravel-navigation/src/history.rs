//! History log
//!
//! Recency-ordered, deduplicated by URL string, capped at
//! [`HISTORY_CAP`] entries. Every mutation rewrites the durable file;
//! a failed write degrades to a warning, never a shell fault.

use caravel_storage::HistoryFile;

/// Maximum number of retained entries; insertion beyond the cap evicts
/// the oldest.
pub const HISTORY_CAP: usize = 50;

pub struct HistoryStore {
    /// Newest first
    entries: Vec<String>,
    file: HistoryFile,
}

impl HistoryStore {
    /// Load the log from its durable file; absent or corrupt state starts
    /// empty.
    pub fn load(file: HistoryFile) -> Self {
        let mut entries = file.load();
        entries.truncate(HISTORY_CAP);

        tracing::debug!(
            path = %file.path().display(),
            entry_count = entries.len(),
            "loaded history"
        );

        Self { entries, file }
    }

    /// Record a visit. A URL already present moves to the front instead
    /// of duplicating.
    pub fn record(&mut self, url: &str) {
        self.entries.retain(|entry| entry != url);
        self.entries.insert(0, url.to_string());
        self.entries.truncate(HISTORY_CAP);
        self.persist();
    }

    /// Ordered entries, newest first
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Remove one URL from the log
    pub fn remove(&mut self, url: &str) {
        self.entries.retain(|entry| entry != url);
        self.persist();
    }

    /// Clear the whole log
    pub fn clear(&mut self) {
        self.entries.clear();
        self.persist();
    }

    fn persist(&self) {
        if let Err(e) = self.file.save(&self.entries) {
            tracing::warn!(
                path = %self.file.path().display(),
                error = %e,
                "failed to persist history"
            );
        }
    }
}
