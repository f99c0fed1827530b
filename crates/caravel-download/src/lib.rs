//! Caravel Download Manager
//!
//! The engine performs the actual transfer; this crate owns the lifecycle
//! of each accepted one:
//!
//! ```text
//! AwaitingTarget
//!   ↓ save path chosen            ↓ chooser dismissed
//! InProgress                    Cancelled
//!   ↓ engine finished   ↓ cancel
//! Completed           Cancelled
//! ```

mod controller;
mod download;
mod error;

pub use controller::{DownloadController, DownloadUi};
pub use download::{Download, DownloadState};
pub use error::DownloadError;

pub type Result<T> = std::result::Result<T, DownloadError>;
