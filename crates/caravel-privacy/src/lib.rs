//! Caravel Privacy Protection
//!
//! Two shared, immutable-after-startup services:
//! - [`RequestFilter`]: blocks outbound requests to advertising/tracking
//!   hosts, inline on the engine's request path.
//! - [`PermissionBroker`]: turns engine capability requests (microphone,
//!   camera) into user decisions. Fail closed: dismissal means deny.

mod filter;
mod permissions;

pub use caravel_engine::FilterDecision;
pub use filter::RequestFilter;
pub use permissions::{PermissionBroker, PermissionPrompt};
