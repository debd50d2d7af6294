use axum::{extract::State, response::IntoResponse, Json};

use crate::error::AppError;
use crate::startup::AppState;

pub async fn list_bulletins(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let bulletins = state.civic.list_bulletins().await?;
    Ok(Json(bulletins))
}

pub async fn list_locations(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let locations = state.civic.list_locations().await?;
    Ok(Json(locations))
}

pub async fn list_parking_spaces(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let spaces = state.civic.list_parking_spaces().await?;
    Ok(Json(spaces))
}
