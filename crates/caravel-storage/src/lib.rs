//! Caravel Storage Layer
//!
//! File-based persistence for shell state: the history log (a JSON array
//! of URL strings, rewritten wholesale on every mutation) and the optional
//! newline-delimited address-bar completion list. Missing or unreadable
//! files degrade to empty state; the shell never aborts over persistence.

mod completions;
mod error;
mod history_file;

pub use completions::read_candidate_lines;
pub use error::StorageError;
pub use history_file::HistoryFile;

pub type Result<T> = std::result::Result<T, StorageError>;
