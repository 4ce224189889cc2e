//! Dashboard form handlers — free-text commands and per-device controls.

use askama::Template;
use axum::extract::{Form, Path, State};
use axum::response::{Html, IntoResponse, Redirect, Response};
use serde::Deserialize;

use vocohub_domain::device::Status;
use vocohub_domain::registry::StatePatch;

use crate::error::ApiError;
use crate::state::AppState;

/// Form data for the free-text command box.
#[derive(Debug, Deserialize)]
pub struct CommandForm {
    #[serde(default)]
    pub command: String,
}

/// Result page template shown after a command is submitted.
#[derive(Template)]
#[template(path = "command_result.html")]
pub struct CommandResultTemplate {
    pub command: String,
    pub message: Option<String>,
    pub error: Option<String>,
}

impl IntoResponse for CommandResultTemplate {
    fn into_response(self) -> Response {
        Html(self.to_string()).into_response()
    }
}

/// `POST /command` — interpret the typed command and show the outcome.
pub async fn submit_command(
    State(state): State<AppState>,
    Form(form): Form<CommandForm>,
) -> CommandResultTemplate {
    let outcome = state.control.interpret_and_apply(&form.command);
    CommandResultTemplate {
        command: form.command,
        message: outcome.message().map(str::to_string),
        error: outcome.error().map(str::to_string),
    }
}

/// Form data for a per-device control panel.
///
/// Every field is optional so one handler serves all five device forms;
/// the patch semantics ignore fields illegal for the target.
#[derive(Debug, Deserialize)]
pub struct DeviceForm {
    pub status: Option<Status>,
    pub speed: Option<i64>,
    pub brightness: Option<i64>,
    pub temperature: Option<i64>,
    pub volume: Option<i64>,
}

/// Response from the device control form handler (PRG pattern).
pub enum UpdateDeviceResponse {
    /// Redirect back to the control panel.
    Redirect(Redirect),
}

impl IntoResponse for UpdateDeviceResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Redirect(redirect) => redirect.into_response(),
        }
    }
}

/// `POST /devices/{device}` — apply the form values and redirect home.
pub async fn update_device(
    State(state): State<AppState>,
    Path(device): Path<String>,
    Form(form): Form<DeviceForm>,
) -> Result<UpdateDeviceResponse, ApiError> {
    let patch = StatePatch {
        status: form.status,
        speed: form.speed,
        brightness: form.brightness,
        temperature: form.temperature,
        volume: form.volume,
    };
    state.control.direct_control(&device, &patch)?;
    Ok(UpdateDeviceResponse::Redirect(Redirect::to("/")))
}
