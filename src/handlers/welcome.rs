use axum::{extract::State, response::IntoResponse, Json};
use serde_json::json;

use crate::error::AppError;
use crate::startup::AppState;

pub async fn get_welcome_message(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let message = state.message.load().await?;
    Ok(Json(json!({ "message": message })))
}
