//! Error types for the messbot server application.
//!
//! All failures are collected into one `Error` enum built with `thiserror`. Each error
//! classifies into a small closed set of [`ErrorKind`]s which the HTTP layer maps to a status
//! code and the chat bot maps to a fixed message, so no call site has to invent its own
//! user-facing wording.

pub mod config;
pub mod mess;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{config::ConfigError, mess::MessError},
};

/// Main error type for the messbot server application.
///
/// Aggregates domain errors and external library errors; `#[from]` conversions allow `?`
/// throughout the data, service and bot layers.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Domain error (invalid input, missing records, duplicate registration).
    #[error(transparent)]
    MessError(#[from] MessError),
    /// Parse error (failed to parse a value from string or other format).
    #[error("Failed to parse value: {0:?}")]
    ParseError(String),
    /// Internal error indicating a bug in messbot's code.
    #[error("Internal error, this indicates a bug: {0:?}")]
    InternalError(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Menu API request failed or returned an unexpected status.
    #[error(transparent)]
    MenuApiError(#[from] reqwest::Error),
    /// Telegram Bot API request failed.
    #[error(transparent)]
    TelegramError(#[from] teloxide::RequestError),
    /// Telegram file download failed.
    #[error(transparent)]
    DownloadError(#[from] teloxide::DownloadError),
    /// Conversation state storage failed.
    #[error(transparent)]
    DialogueError(#[from] teloxide::dispatching::dialogue::InMemStorageError),
    /// Image decoding or encoding failed.
    #[error(transparent)]
    ImageError(#[from] image::ImageError),
    /// Socket or file I/O failed.
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

/// Closed classification of every failure the application can surface to a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed user input; nothing was written.
    Validation,
    /// A uniqueness rule was violated.
    Conflict,
    /// The requested record does not exist.
    NotFound,
    /// Storage, a remote service or the transport failed.
    Unavailable,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MessError(err) => err.kind(),
            Self::ParseError(_) => ErrorKind::Validation,
            _ => ErrorKind::Unavailable,
        }
    }
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - Validation errors
/// - 404 Not Found - Missing menu or student
/// - 409 Conflict - Duplicate registration
/// - 500 Internal Server Error - Everything else (with error logging)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::MessError(err) => err.into_response(),
            Self::ConfigError(err) => err.into_response(),
            Self::ParseError(reason) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    error: format!("Failed to parse value: {}", reason),
                }),
            )
                .into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// The error is logged and a generic message is returned so implementation details never
/// leak to API clients.
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
