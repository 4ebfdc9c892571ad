use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

use crate::models::InputError;
use crate::services::QuizError;

/// Unified application error.
///
/// Every variant renders the same envelope; the message is fixed per status
/// code so storage or validation detail never reaches the client.
#[derive(Debug, Error)]
pub enum AppError {
    /// A required result set was empty
    #[error("not found: {0}")]
    NotFound(String),

    /// The request body could not be parsed
    #[error("bad request: {0}")]
    BadRequest(String),

    /// A required input field was missing or empty
    #[error("not acceptable: {0}")]
    NotAcceptable(String),

    /// The request was well-formed but the operation could not be applied
    #[error("unprocessable: {0}")]
    Unprocessable(String),

    #[error("method not allowed")]
    MethodNotAllowed,

    /// Storage failure that no handler mapped explicitly
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Error envelope returned for every non-2xx response
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Always `false`
    pub success: bool,
    /// HTTP status code
    pub error: u16,
    pub message: String,
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotAcceptable(_) => StatusCode::NOT_ACCEPTABLE,
            AppError::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self::BadRequest(msg.into())
    }

    pub fn not_acceptable(msg: impl Into<String>) -> Self {
        Self::NotAcceptable(msg.into())
    }

    pub fn unprocessable(msg: impl Into<String>) -> Self {
        Self::Unprocessable(msg.into())
    }
}

/// Client-facing message for a status code
pub fn status_message(status: StatusCode) -> &'static str {
    match status {
        StatusCode::BAD_REQUEST => "Bad request!!!",
        StatusCode::NOT_FOUND => "Not Found!!!",
        StatusCode::METHOD_NOT_ALLOWED => "Method Not Allowed!!!",
        StatusCode::NOT_ACCEPTABLE => "Not Acceptable!!!",
        StatusCode::UNPROCESSABLE_ENTITY => "Request Unprocessable!!!",
        _ => "Server Error!!!",
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        match &self {
            AppError::Database(e) => tracing::error!("Database error: {}", e),
            other => tracing::debug!("Request rejected: {}", other),
        }

        let body = ErrorResponse {
            success: false,
            error: status.as_u16(),
            message: status_message(status).to_string(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<InputError> for AppError {
    fn from(e: InputError) -> Self {
        match e {
            InputError::Missing(_) => AppError::NotAcceptable(e.to_string()),
            InputError::Invalid(_) => AppError::Unprocessable(e.to_string()),
        }
    }
}

impl From<QuizError> for AppError {
    fn from(e: QuizError) -> Self {
        match e {
            QuizError::Input(e) => e.into(),
            QuizError::Database(e) => {
                tracing::error!("Quiz query failed: {}", e);
                AppError::Unprocessable(e.to_string())
            }
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;

/// Fallback for unmatched routes
pub async fn not_found_fallback() -> AppError {
    AppError::not_found("no route")
}

/// Fallback for a known path hit with an unsupported method
pub async fn method_not_allowed_fallback() -> AppError {
    AppError::MethodNotAllowed
}
