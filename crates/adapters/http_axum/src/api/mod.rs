//! JSON REST API handler modules.

pub mod command;
#[allow(clippy::missing_errors_doc)]
pub mod devices;

use axum::Router;
use axum::routing::{get, post};
use tower_http::cors::CorsLayer;

use crate::state::AppState;

/// Build the `/api` sub-router.
///
/// CORS is fully permissive on this sub-router so browser clients on other
/// origins can drive the hub directly.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/devices", get(devices::list))
        .route("/device/{device}", post(devices::control))
        .route("/command", post(command::submit))
        .layer(CorsLayer::permissive())
}
