//! Durable history file
//!
//! A single JSON array of URL strings, newest first. Read once at session
//! start and rewritten wholesale on every mutation; the log is capped well
//! below the point where that write would matter.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::Result;

pub struct HistoryFile {
    path: PathBuf,
}

impl HistoryFile {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the stored log. An absent file is a fresh profile, not an
    /// error; a corrupt one degrades to an empty log.
    pub fn load(&self) -> Vec<String> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Vec::new(),
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "failed to read history file");
                return Vec::new();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "corrupt history file, starting empty");
                Vec::new()
            }
        }
    }

    /// Rewrite the whole log.
    pub fn save(&self, entries: &[String]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let json = serde_json::to_string(entries)?;
        fs::write(&self.path, json)?;

        Ok(())
    }
}
