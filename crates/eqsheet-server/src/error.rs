use std::fmt;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use eqsheet_export::error::ExportError;
use eqsheet_sheets::error::SheetError;

/// Unified error type for all route handlers.
///
/// The message is always shown to the user verbatim, internal errors
/// included.
#[derive(Debug)]
pub enum AppError {
    /// No spreadsheet was uploaded.
    InputMissing(String),
    BadRequest(String),
    /// The sheet or one of its expected columns is absent.
    SheetOrColumn(String),
    NotFound(String),
    Internal(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::InputMissing(_) | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::SheetOrColumn(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            AppError::InputMissing(msg)
            | AppError::BadRequest(msg)
            | AppError::SheetOrColumn(msg)
            | AppError::NotFound(msg)
            | AppError::Internal(msg) => msg,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let AppError::Internal(msg) = &self {
            tracing::error!("internal error: {msg}");
        }
        let status = self.status();
        (status, Json(ErrorBody { error: self.message() })).into_response()
    }
}

impl From<SheetError> for AppError {
    fn from(e: SheetError) -> Self {
        match e {
            SheetError::UnsupportedExtension { .. } => AppError::BadRequest(e.to_string()),
            other => AppError::SheetOrColumn(other.to_string()),
        }
    }
}

impl From<ExportError> for AppError {
    fn from(e: ExportError) -> Self {
        match e {
            ExportError::Formula(inner) => AppError::SheetOrColumn(inner.to_string()),
            other => AppError::Internal(other.to_string()),
        }
    }
}

impl From<axum::extract::multipart::MultipartError> for AppError {
    fn from(e: axum::extract::multipart::MultipartError) -> Self {
        AppError::BadRequest(e.body_text())
    }
}

impl From<tokio::task::JoinError> for AppError {
    fn from(e: tokio::task::JoinError) -> Self {
        AppError::Internal(format!("generation task failed: {e}"))
    }
}

impl From<tera::Error> for AppError {
    fn from(e: tera::Error) -> Self {
        AppError::Internal(format!("page rendering failed: {e}"))
    }
}
