//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use vocohub_domain::error::ControlError;

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps [`ControlError`] to an HTTP response with appropriate status code.
///
/// Only direct-control failures reach this type: the command endpoint
/// reports unparseable text inside a 200 envelope, since that is a routine
/// outcome rather than a transport failure.
pub struct ApiError(ControlError);

impl From<ControlError> for ApiError {
    fn from(err: ControlError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self.0 {
            ControlError::UnknownDevice => StatusCode::NOT_FOUND,
            ControlError::UnrecognizedDevice | ControlError::ActionNotApplicable => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
        };
        tracing::debug!(error = %self.0, %status, "control error");

        (
            status,
            Json(ErrorBody {
                error: self.0.to_string(),
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_map_unknown_device_to_not_found() {
        let response = ApiError::from(ControlError::UnknownDevice).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn should_map_inapplicable_action_to_unprocessable_entity() {
        let response = ApiError::from(ControlError::ActionNotApplicable).into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
