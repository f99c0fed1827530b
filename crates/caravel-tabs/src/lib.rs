//! Caravel Tab Model
//!
//! One tab per navigable surface. A tab's id is stable for its lifetime
//! and is what events are routed by, since titles and URLs are not unique.

mod error;
mod security;
mod tab;

pub use error::TabError;
pub use security::SecurityIndicator;
pub use tab::{PageStatus, Tab};

pub type Result<T> = std::result::Result<T, TabError>;
