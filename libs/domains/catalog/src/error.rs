use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;

/// Longest store error text returned to clients, in characters
pub const MAX_ERROR_MESSAGE_LEN: usize = 120;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Product not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Database not available")]
    StoreUnavailable,

    #[error("Database error: {0}")]
    Database(String),

    #[error("Document codec error: {0}")]
    Codec(String),
}

pub type CatalogResult<T> = Result<T, CatalogError>;

/// Cut `message` to at most `max_chars` characters.
pub fn truncate_message(message: &str, max_chars: usize) -> String {
    match message.char_indices().nth(max_chars) {
        Some((end, _)) => message[..end].to_string(),
        None => message.to_string(),
    }
}

impl From<CatalogError> for AppError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::NotFound(_) => AppError::NotFound("Product not found".to_string()),
            CatalogError::Validation(msg) => AppError::BadRequest(msg),
            CatalogError::StoreUnavailable => {
                AppError::DatabaseUnavailable("Database not available".to_string())
            }
            CatalogError::Database(msg) => {
                AppError::Database(truncate_message(&msg, MAX_ERROR_MESSAGE_LEN))
            }
            CatalogError::Codec(msg) => {
                AppError::InternalServerError(truncate_message(&msg, MAX_ERROR_MESSAGE_LEN))
            }
        }
    }
}

impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

impl From<mongodb::error::Error> for CatalogError {
    fn from(err: mongodb::error::Error) -> Self {
        CatalogError::Database(err.to_string())
    }
}

impl From<mongodb::bson::de::Error> for CatalogError {
    fn from(err: mongodb::bson::de::Error) -> Self {
        CatalogError::Codec(format!("BSON deserialization error: {}", err))
    }
}

impl From<validator::ValidationErrors> for CatalogError {
    fn from(err: validator::ValidationErrors) -> Self {
        CatalogError::Validation(err.to_string())
    }
}
