//! Caravel Session Layer
//!
//! Coordinates events arriving from the rendering engine with mutable
//! session state: the ordered tab collection, the history log, the shared
//! request filter, the permission broker, and the download table. All
//! state is scoped to an explicit [`SessionManager`]; a process may host
//! several fully independent ones (one per top-level window).

mod error;
mod manager;
mod tab_session;

pub use error::SessionError;
pub use manager::{CloseOutcome, SessionManager, SessionOptions};
pub use tab_session::TabSession;

pub type Result<T> = std::result::Result<T, SessionError>;
