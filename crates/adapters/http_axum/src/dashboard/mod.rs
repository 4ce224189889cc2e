//! Server-side rendered HTML dashboard (no JavaScript).

#[allow(clippy::missing_errors_doc)]
pub mod control;
pub mod home;

use axum::Router;
use axum::routing::{get, post};

use crate::state::AppState;

/// Build the dashboard sub-router for SSR HTML pages.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::index))
        .route("/command", post(control::submit_command))
        .route("/devices/{device}", post(control::update_device))
}
