//! Error types for the pokerstats server.
//!
//! Domain errors are grouped per concern ([`StoreError`] for the dimensional
//! store, [`ConfigError`] for startup configuration) and aggregated into
//! [`Error`], which converts into an HTTP response for the API layer.

pub mod config;
pub mod store;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{config::ConfigError, store::StoreError},
};

/// Main error type for the pokerstats server.
///
/// Uses `thiserror`'s `#[from]` conversions so repository and service code can
/// propagate with `?`. Only [`StoreError`] carries a client-facing response;
/// everything else is reported as an internal server error.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Store contract violation (uniqueness, referential integrity, missing rows, bad input).
    #[error(transparent)]
    StoreError(#[from] StoreError),
    /// Database error that was not classified as a store contract violation.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// I/O error, e.g. when binding the listening socket.
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::StoreError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// The full error is logged while the client only receives a generic message.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
