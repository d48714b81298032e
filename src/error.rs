//! Error types for the library server

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use sqlx::error::ErrorKind;
use thiserror::Error;
use utoipa::ToSchema;

/// Application error codes carried in error bodies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum ErrorCode {
    DbFailure = 3,
    NoSuchData = 20,
}

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Database refused the write; the raw error is returned to the caller
    #[error("Rejected by database: {0}")]
    Rejected(sqlx::Error),

    /// A record needed by an association could not be loaded
    #[error("Missing record: {0}")]
    MissingRecord(String),
}

/// Error response body
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    pub code: u32,
    pub error: String,
    pub message: String,
}

/// Raw database error, as returned by a rejected insert
#[derive(Debug, Serialize, ToSchema)]
pub struct DatabaseErrorBody {
    pub name: String,
    pub message: String,
    /// SQLSTATE code
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub constraint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl From<&sqlx::Error> for DatabaseErrorBody {
    fn from(err: &sqlx::Error) -> Self {
        let Some(db) = err.as_database_error() else {
            return Self {
                name: "DatabaseError".to_string(),
                message: err.to_string(),
                code: None,
                table: None,
                constraint: None,
                detail: None,
            };
        };

        let name = match db.kind() {
            ErrorKind::NotNullViolation => "NotNullViolation",
            ErrorKind::ForeignKeyViolation => "ForeignKeyViolation",
            ErrorKind::UniqueViolation => "UniqueViolation",
            ErrorKind::CheckViolation => "CheckViolation",
            _ => "DatabaseError",
        };

        let detail = db
            .try_downcast_ref::<sqlx::postgres::PgDatabaseError>()
            .and_then(|pg| pg.detail().map(str::to_string));

        Self {
            name: name.to_string(),
            message: db.message().to_string(),
            code: db.code().map(|c| c.into_owned()),
            table: db.table().map(str::to_string),
            constraint: db.constraint().map(str::to_string),
            detail,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorCode::DbFailure,
                    "Database error".to_string(),
                )
            }
            AppError::Rejected(e) => {
                tracing::warn!("Write rejected by database: {}", e);
                let body = DatabaseErrorBody::from(e);
                return (StatusCode::BAD_REQUEST, Json(body)).into_response();
            }
            AppError::MissingRecord(msg) => {
                tracing::error!("Missing record: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorCode::NoSuchData,
                    msg.clone(),
                )
            }
        };

        let body = Json(ErrorResponse {
            code: code as u32,
            error: format!("{:?}", code),
            message,
        });

        (status, body).into_response()
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
