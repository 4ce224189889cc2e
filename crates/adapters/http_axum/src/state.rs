//! Shared application state for axum handlers.

use std::sync::Arc;

use vocohub_app::service::ControlService;

/// Application state shared across all axum handlers.
///
/// Holds the single control service behind an `Arc`, so cloning the state
/// for each handler never clones the registry.
#[derive(Clone)]
pub struct AppState {
    /// The control service owning the device registry.
    pub control: Arc<ControlService>,
}

impl AppState {
    /// Wrap a control service for sharing with the router.
    #[must_use]
    pub fn new(control: ControlService) -> Self {
        Self {
            control: Arc::new(control),
        }
    }
}
