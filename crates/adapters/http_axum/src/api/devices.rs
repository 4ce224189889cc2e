//! JSON handlers for the registry snapshot and direct device control.

use axum::Json;
use axum::extract::{Path, State};

use vocohub_app::outcome::ControlOutcome;
use vocohub_domain::registry::{DeviceRegistry, StatePatch};

use crate::error::ApiError;
use crate::state::AppState;

/// `GET /api/devices` — the full registry snapshot.
pub async fn list(State(state): State<AppState>) -> Json<DeviceRegistry> {
    Json(state.control.list_devices())
}

/// `POST /api/device/{device}` — apply a sparse field patch to one device.
///
/// Fields not present in the body are left untouched; fields illegal for
/// the device are ignored.
pub async fn control(
    State(state): State<AppState>,
    Path(device): Path<String>,
    Json(patch): Json<StatePatch>,
) -> Result<Json<ControlOutcome>, ApiError> {
    let outcome = state.control.direct_control(&device, &patch)?;
    Ok(Json(outcome))
}
