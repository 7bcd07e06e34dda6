//! Error types for the student registry
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// == Registry Error Enum ==
/// Unified error type for the student registry.
///
/// Both storage backends report a missing record the same way, as
/// `NotFound`. Anything the storage layer itself fails at ends up in
/// `Storage` and is reported as a generic server error.
#[derive(Error, Debug)]
pub enum RegistryError {
    /// No student matches the requested id
    #[error("Student not found: {0}")]
    NotFound(String),

    /// The storage backend failed
    #[error("Storage error: {0}")]
    Storage(String),
}

impl RegistryError {
    /// Builds a `NotFound` for the given id.
    pub fn not_found(id: impl std::fmt::Display) -> Self {
        RegistryError::NotFound(id.to_string())
    }
}

impl From<mongodb::error::Error> for RegistryError {
    fn from(err: mongodb::error::Error) -> Self {
        RegistryError::Storage(err.to_string())
    }
}

impl From<mongodb::bson::ser::Error> for RegistryError {
    fn from(err: mongodb::bson::ser::Error) -> Self {
        RegistryError::Storage(err.to_string())
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for RegistryError {
    fn into_response(self) -> Response {
        let status = match &self {
            RegistryError::NotFound(_) => StatusCode::NOT_FOUND,
            RegistryError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the student registry.
pub type Result<T> = std::result::Result<T, RegistryError>;
