use axum::{debug_handler, extract::rejection::JsonRejection, Json};
use serde_json::Value;
use tracing::info;

use crate::errors::ChatError;
use crate::logging::REQUEST_LOG;
use crate::models::{extract_message, ChatResponse, LoggedValue};

#[debug_handler]
pub async fn chat(
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<ChatResponse>, ChatError> {
    let Json(body) = payload?;
    let message = extract_message(body)?;
    info!(target: REQUEST_LOG, "Received message: {}", LoggedValue(&message));

    Ok(Json(ChatResponse { message }))
}
