use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Violations of the dimensional store's contract.
///
/// Each variant is detected by the operation that returns it and is never
/// retried internally.
#[derive(Error, Debug, PartialEq)]
pub enum StoreError {
    /// A unique column (`username` or `email`) already holds the value.
    #[error("A user with {field} {value:?} already exists")]
    UniquenessViolation { field: &'static str, value: String },
    /// A foreign key does not resolve to an existing dimension row.
    #[error("Referenced {entity} {key} does not exist")]
    ReferentialIntegrityViolation { entity: &'static str, key: String },
    /// A row with the same primary key already exists.
    #[error("A {entity} with key {key} already exists")]
    DuplicateKeyViolation { entity: &'static str, key: String },
    /// Lookup miss.
    #[error("{entity} {key} not found")]
    NotFound { entity: &'static str, key: String },
    /// Input rejected before reaching storage.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl StoreError {
    pub fn not_found(entity: &'static str, key: impl ToString) -> Self {
        Self::NotFound {
            entity,
            key: key.to_string(),
        }
    }

    pub fn dangling(entity: &'static str, key: impl ToString) -> Self {
        Self::ReferentialIntegrityViolation {
            entity,
            key: key.to_string(),
        }
    }

    pub fn duplicate(entity: &'static str, key: impl ToString) -> Self {
        Self::DuplicateKeyViolation {
            entity,
            key: key.to_string(),
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            Self::UniquenessViolation { .. } | Self::DuplicateKeyViolation { .. } => {
                StatusCode::CONFLICT
            }
            Self::ReferentialIntegrityViolation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::InvalidInput(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for StoreError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        (
            self.status(),
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
