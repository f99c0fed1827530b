//! Shell configuration

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use caravel_session::SessionOptions;

/// Environment flag enabling media-stream capture in the engine backend.
pub const MEDIA_STREAM_ENV: &str = "CARAVEL_ENABLE_MEDIA_STREAM";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding the durable files
    pub data_dir: PathBuf,
    /// History log, a JSON array of URL strings
    pub history_path: PathBuf,
    /// Optional newline-delimited completion candidates
    pub completions_path: PathBuf,
    /// Homepage URL
    pub home_url: String,
    /// Search engine URL template (%s replaced with the encoded query)
    pub search_engine: String,
    /// Enable media-stream capture in the engine backend
    pub enable_media_stream: bool,
}

impl Config {
    pub fn new(data_dir: PathBuf) -> Self {
        Self {
            history_path: data_dir.join("history.json"),
            completions_path: data_dir.join("links.txt"),
            data_dir,
            home_url: "https://google.com".to_string(),
            search_engine: "https://www.google.com/search?q=%s".to_string(),
            enable_media_stream: false,
        }
    }

    /// Default config with the media-stream flag read from the
    /// environment. The flag is the only environment-driven setting.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.enable_media_stream = matches!(
            std::env::var(MEDIA_STREAM_ENV).as_deref(),
            Ok("1") | Ok("true")
        );
        config
    }

    pub fn data_dir() -> PathBuf {
        dirs::data_local_dir()
            .map(|d| d.join("Caravel"))
            .unwrap_or_else(|| PathBuf::from(".caravel"))
    }

    /// Per-window session settings
    pub fn session_options(&self) -> SessionOptions {
        SessionOptions {
            home_url: self.home_url.clone(),
            search_engine: self.search_engine.clone(),
            history_path: self.history_path.clone(),
            completions_path: self.completions_path.clone(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(Self::data_dir())
    }
}

// Simple dirs implementation for common directories
mod dirs {
    use std::path::PathBuf;

    pub fn data_local_dir() -> Option<PathBuf> {
        #[cfg(target_os = "windows")]
        {
            std::env::var("LOCALAPPDATA").ok().map(PathBuf::from)
        }
        #[cfg(target_os = "macos")]
        {
            std::env::var("HOME")
                .ok()
                .map(|h| PathBuf::from(h).join("Library/Application Support"))
        }
        #[cfg(target_os = "linux")]
        {
            std::env::var("XDG_DATA_HOME")
                .ok()
                .map(PathBuf::from)
                .or_else(|| {
                    std::env::var("HOME")
                        .ok()
                        .map(|h| PathBuf::from(h).join(".local/share"))
                })
        }
        #[cfg(not(any(target_os = "windows", target_os = "macos", target_os = "linux")))]
        {
            None
        }
    }
}
