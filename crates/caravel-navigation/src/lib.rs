//! Caravel Navigation
//!
//! Address-bar input resolution (URL vs search query), the recency-ordered
//! history log, and completion suggestions.

mod completions;
mod history;
mod input;

pub use completions::Completions;
pub use history::{HistoryStore, HISTORY_CAP};
pub use input::{InputResolution, InputResolver};
