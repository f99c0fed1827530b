//! Caravel Engine Interface
//!
//! The rendering engine (page parsing, JS execution, compositing) is an
//! external collaborator. This crate defines the capability surface the
//! shell consumes: lifecycle events the engine emits, the commands a view
//! accepts, and the interceptor hook that runs on every outbound request.
//! A headless backend implements the same surface for tests.

mod backend;
mod event;
mod headless;

pub use backend::{EngineBackend, EngineView, UrlRequestInterceptor};
pub use event::{Capability, DownloadId, EngineEvent, FilterDecision, PermissionDecision};
pub use headless::{EngineCommand, HeadlessBackend, HeadlessView};
