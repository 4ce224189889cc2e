//! Dashboard home page — device table with control forms.

use askama::Template;
use axum::extract::State;
use axum::response::{Html, IntoResponse, Response};

use vocohub_domain::registry::DeviceRegistry;

use crate::state::AppState;

/// Home page template: one control panel per device plus the free-text
/// command form.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub devices: DeviceRegistry,
}

impl IntoResponse for IndexTemplate {
    fn into_response(self) -> Response {
        Html(self.to_string()).into_response()
    }
}

/// `GET /` — render the control panel.
pub async fn index(State(state): State<AppState>) -> IndexTemplate {
    IndexTemplate {
        devices: state.control.list_devices(),
    }
}
