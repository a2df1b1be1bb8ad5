//! Error types for the item service
//!
//! Provides unified error handling using thiserror. Every variant renders as
//! a JSON body `{"error": ...}`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::cache::CacheError;
use crate::models::ErrorResponse;
use crate::store::StoreError;

/// Body returned for a uniqueness conflict
pub const CONFLICT_MESSAGE: &str = "Item already exists.";

/// Body returned when an item id is unknown
pub const NOT_FOUND_MESSAGE: &str = "404: Item not found";

const INTERNAL_MESSAGE: &str = "Internal server error";

// == Api Error Enum ==
/// Unified error type for the item service.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Item name already taken
    #[error("{}", CONFLICT_MESSAGE)]
    Conflict,

    /// No item with the requested id
    #[error("{}", NOT_FOUND_MESSAGE)]
    NotFound,

    /// Invalid request data
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Postgres failure other than a constraint violation
    #[error("Database error: {0}")]
    Database(String),

    /// Redis failure on a path where it cannot be ignored
    #[error("Cache error: {0}")]
    Cache(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Conflict | ApiError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Database(_) | ApiError::Cache(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Duplicate { .. } => ApiError::Conflict,
            StoreError::Persistence(msg) => ApiError::Database(msg),
        }
    }
}

impl From<CacheError> for ApiError {
    fn from(err: CacheError) -> Self {
        ApiError::Cache(err.to_string())
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let message = match &self {
            ApiError::Conflict => CONFLICT_MESSAGE.to_string(),
            ApiError::NotFound => NOT_FOUND_MESSAGE.to_string(),
            ApiError::InvalidRequest(msg) => msg.clone(),
            ApiError::Database(_) | ApiError::Cache(_) => {
                tracing::error!("{}", self);
                INTERNAL_MESSAGE.to_string()
            }
        };

        (self.status(), Json(ErrorResponse::new(message))).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the item service.
pub type Result<T> = std::result::Result<T, ApiError>;
