use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(anyhow::Error),

    #[error("Database error: {0}")]
    Database(anyhow::Error),

    #[error("Missing mandatory field '{field}' in {collection} document")]
    MissingField {
        collection: &'static str,
        field: &'static str,
    },

    #[error("Field '{field}' has type {actual}, expected {expected}")]
    TypeMismatch {
        field: &'static str,
        expected: &'static str,
        actual: &'static str,
    },

    #[error("Invalid polygon geometry: {0}")]
    Geometry(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),

    #[error("Configuration error: {0}")]
    Config(anyhow::Error),
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::Config(anyhow::Error::new(err))
    }
}

impl From<mongodb::error::Error> for AppError {
    fn from(err: mongodb::error::Error) -> Self {
        AppError::Database(anyhow::Error::new(err))
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Internal(anyhow::Error::new(err))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        #[derive(Serialize)]
        struct ErrorResponse {
            message: String,
            #[serde(skip_serializing_if = "Option::is_none")]
            detail: Option<String>,
        }

        let (status, message, detail) = match self {
            AppError::NotFound(err) => (StatusCode::NOT_FOUND, err.to_string(), None),
            AppError::Database(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Error reading from the document store".to_string(),
                Some(err.to_string()),
            ),
            AppError::MissingField { collection, field } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Missing mandatory field '{}' in {} document", field, collection),
                None,
            ),
            AppError::TypeMismatch {
                field,
                expected,
                actual,
            } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Field '{}' has type {}, expected {}", field, actual, expected),
                None,
            ),
            AppError::Geometry(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Invalid polygon geometry".to_string(),
                Some(msg),
            ),
            AppError::Internal(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
                Some(err.to_string()),
            ),
            AppError::Config(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Configuration error".to_string(),
                Some(err.to_string()),
            ),
        };

        (status, Json(ErrorResponse { message, detail })).into_response()
    }
}
