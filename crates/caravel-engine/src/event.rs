//! Engine event and decision vocabulary

use serde::{Deserialize, Serialize};

/// Engine-issued identifier for one file transfer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DownloadId(pub u64);

impl std::fmt::Display for DownloadId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Media capability a page can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Capability {
    /// Microphone capture
    Audio,
    /// Camera capture
    Video,
    /// Microphone and camera together
    AudioVideo,
}

impl Capability {
    pub fn as_str(&self) -> &'static str {
        match self {
            Capability::Audio => "audio",
            Capability::Video => "video",
            Capability::AudioVideo => "audio-video",
        }
    }
}

impl std::fmt::Display for Capability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Outcome of a permission prompt, relayed back to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PermissionDecision {
    Grant,
    Deny,
}

/// Verdict for one outbound network request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterDecision {
    Allow,
    Block,
}

/// Lifecycle notification emitted by the engine for one view.
///
/// Events are delivered on the UI thread in emission order per view. The
/// shell routes each one by the owning tab's id.
#[derive(Debug, Clone, PartialEq)]
pub enum EngineEvent {
    UrlChanged {
        url: String,
    },
    TitleChanged {
        title: String,
    },
    /// Load progress, 0-100. Only meaningful while a load is in flight.
    LoadProgress {
        percent: u8,
    },
    /// `ok` is false on navigation or certificate failure.
    LoadFinished {
        ok: bool,
    },
    IconChanged {
        icon_url: Option<String>,
    },
    /// target="_blank" or window.open; the shell decides what view hosts it.
    NewWindowRequested,
    DownloadRequested {
        id: DownloadId,
        suggested_name: String,
        total_bytes: Option<u64>,
    },
    /// Absolute byte counts. Ticks may arrive duplicated or out of order.
    DownloadProgress {
        id: DownloadId,
        received_bytes: u64,
        total_bytes: Option<u64>,
    },
    DownloadFinished {
        id: DownloadId,
    },
    PermissionRequested {
        origin: String,
        capability: Capability,
    },
}
