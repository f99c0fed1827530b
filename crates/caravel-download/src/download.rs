//! Download data structure

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use caravel_engine::DownloadId;

use crate::error::DownloadError;
use crate::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DownloadState {
    /// Waiting for the user to choose a save target
    AwaitingTarget,
    /// Transfer running in the engine
    InProgress,
    /// Transfer finished successfully
    Completed,
    /// Declined, or aborted by the user or the shell
    Cancelled,
}

impl DownloadState {
    /// Check if transition to another state is valid
    pub fn can_transition_to(&self, target: DownloadState) -> bool {
        match (self, target) {
            (DownloadState::AwaitingTarget, DownloadState::InProgress) => true,
            (DownloadState::AwaitingTarget, DownloadState::Cancelled) => true,
            (DownloadState::InProgress, DownloadState::Completed) => true,
            (DownloadState::InProgress, DownloadState::Cancelled) => true,
            // Same state is always valid (no-op)
            (a, b) if *a == b => true,
            _ => false,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, DownloadState::Completed | DownloadState::Cancelled)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DownloadState::AwaitingTarget => "awaiting-target",
            DownloadState::InProgress => "in-progress",
            DownloadState::Completed => "completed",
            DownloadState::Cancelled => "cancelled",
        }
    }
}

impl std::fmt::Display for DownloadState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Download {
    pub id: DownloadId,
    /// Name the engine suggested for the file
    pub suggested_name: String,
    /// Save target, resolved once before the transfer starts
    pub chosen_path: Option<PathBuf>,
    pub received_bytes: u64,
    /// Unknown until the engine reports it
    pub total_bytes: Option<u64>,
    pub state: DownloadState,
    pub created_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
}

impl Download {
    pub fn new(id: DownloadId, suggested_name: String, total_bytes: Option<u64>) -> Self {
        Self {
            id,
            suggested_name,
            chosen_path: None,
            received_bytes: 0,
            total_bytes,
            state: DownloadState::AwaitingTarget,
            created_at: Utc::now(),
            completed_at: None,
        }
    }

    /// Attempt to transition to a new state
    pub fn transition_to(&mut self, new_state: DownloadState) -> Result<()> {
        if !self.state.can_transition_to(new_state) {
            return Err(DownloadError::InvalidTransition {
                from: self.state.to_string(),
                to: new_state.to_string(),
            });
        }

        tracing::debug!(
            download_id = %self.id,
            from = %self.state,
            to = %new_state,
            "Download state transition"
        );

        self.state = new_state;

        if new_state == DownloadState::Completed {
            self.completed_at = Some(Utc::now());
        }

        Ok(())
    }

    /// Overwrite the reported byte counts. Ticks carry absolute values,
    /// so duplicates and reordering cannot corrupt the percentage.
    pub fn set_progress(&mut self, received_bytes: u64, total_bytes: Option<u64>) {
        self.received_bytes = received_bytes;
        if total_bytes.is_some() {
            self.total_bytes = total_bytes;
        }
    }

    /// Progress as a percentage (0-100); 0 while the total is unknown.
    pub fn progress(&self) -> f64 {
        match self.total_bytes {
            Some(total) if total > 0 => {
                (self.received_bytes as f64 / total as f64 * 100.0).min(100.0)
            }
            _ => 0.0,
        }
    }
}
