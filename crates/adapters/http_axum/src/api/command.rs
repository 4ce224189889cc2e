//! JSON handler for the natural-language command endpoint.

use axum::Json;
use axum::extract::State;
use serde::Deserialize;

use vocohub_app::outcome::CommandOutcome;

use crate::state::AppState;

/// Request body for `POST /api/command`.
///
/// A missing `command` key is treated as an empty string, which interprets
/// to an unrecognized device.
#[derive(Debug, Deserialize)]
pub struct CommandRequest {
    #[serde(default)]
    pub command: String,
}

/// `POST /api/command` — interpret free text and apply it.
///
/// Always responds 200: the envelope itself carries error shapes for
/// unrecognized devices and not-understood commands.
pub async fn submit(
    State(state): State<AppState>,
    Json(req): Json<CommandRequest>,
) -> Json<CommandOutcome> {
    Json(state.control.interpret_and_apply(&req.command))
}
