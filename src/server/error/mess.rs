use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{model::api::ErrorDto, server::error::ErrorKind};

#[derive(Error, Debug)]
pub enum MessError {
    #[error("Invalid weekday {0:?}, expected one of Monday, Tuesday, Wednesday, Thursday, Friday, Saturday, Sunday")]
    InvalidWeekday(String),
    #[error("Invalid date {0:?}, expected YYYY-MM-DD")]
    InvalidDate(String),
    #[error("Menu for {0} not found.")]
    MenuNotFound(String),
    #[error("No student is registered for telegram ID {0}")]
    StudentNotFound(i64),
    #[error("Student with telegram ID {telegram_id} or admission number {admission_no:?} is already registered")]
    AlreadyRegistered {
        telegram_id: i64,
        admission_no: String,
    },
}

impl MessError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidWeekday(_) | Self::InvalidDate(_) => ErrorKind::Validation,
            Self::MenuNotFound(_) | Self::StudentNotFound(_) => ErrorKind::NotFound,
            Self::AlreadyRegistered { .. } => ErrorKind::Conflict,
        }
    }
}

impl IntoResponse for MessError {
    fn into_response(self) -> Response {
        let status = match self.kind() {
            ErrorKind::Validation => StatusCode::BAD_REQUEST,
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::Conflict => StatusCode::CONFLICT,
            ErrorKind::Unavailable => StatusCode::INTERNAL_SERVER_ERROR,
        };

        tracing::debug!("{}", self);

        (
            status,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
