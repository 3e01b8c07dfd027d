use axum::{extract::rejection::JsonRejection, http::StatusCode, response::{IntoResponse, Response}, Json};
use thiserror::Error;
use tracing::error;

use crate::logging::REQUEST_LOG;
use crate::models::ErrorBody;

/// Anything that goes wrong between reading the body and pulling out `message`.
///
/// Every variant is reported as a 500, client mistakes included.
#[derive(Debug, Error)]
pub enum ChatError {
    #[error("{}", .0.body_text())]
    Body(#[from] JsonRejection),
    #[error("Request body must be a JSON object, got {0}")]
    NotAnObject(&'static str),
}

impl IntoResponse for ChatError {
    fn into_response(self) -> Response {
        let error_message = self.to_string();
        error!(target: REQUEST_LOG, "Error: {}", error_message);
        let body = Json(ErrorBody { error: error_message });
        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}
