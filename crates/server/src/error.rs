// crates/server/src/error.rs
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use task_crm_core::AuthError;
use task_crm_db::DbError;
use thiserror::Error;

use crate::views;

/// Errors that abort a request and replace the view with an error page.
///
/// Validation problems are not errors in this sense: they are rendered inline
/// by the handlers and never reach this type.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Task not found: {0}")]
    TaskNotFound(i64),

    #[error("Database error: {0}")]
    Database(#[from] DbError),

    #[error("Authentication error: {0}")]
    Auth(#[from] AuthError),
}

/// Message shown for any failure whose cause should not reach the browser.
pub const OPERATION_FAILED: &str = "The operation failed. Please try again.";

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, heading, detail) = match &self {
            ApiError::TaskNotFound(id) => {
                tracing::warn!(task_id = %id, "Task not found");
                (
                    StatusCode::NOT_FOUND,
                    "Task not found",
                    format!("No task with id {id}."),
                )
            }
            ApiError::Database(db_err) => {
                tracing::error!(error = %db_err, "Database error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Operation failed",
                    OPERATION_FAILED.to_string(),
                )
            }
            ApiError::Auth(auth_err) => {
                tracing::error!(error = %auth_err, "Session token error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Operation failed",
                    OPERATION_FAILED.to_string(),
                )
            }
        };

        (status, Html(views::error_page(heading, &detail))).into_response()
    }
}

/// Result type alias for route handlers
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    /// Helper to extract status code and body from a response
    async fn extract_response(response: Response) -> (StatusCode, String) {
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_task_not_found_returns_404() {
        let (status, body) = extract_response(ApiError::TaskNotFound(42).into_response()).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.contains("Task not found"));
        assert!(body.contains("42"));
    }

    #[tokio::test]
    async fn test_database_error_hides_details() {
        let error = ApiError::Database(DbError::Sqlx(sqlx_error()));
        let (status, body) = extract_response(error.into_response()).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body.contains(OPERATION_FAILED));
        assert!(!body.contains("pool timed out"));
    }

    #[tokio::test]
    async fn test_auth_error_returns_500() {
        let error = ApiError::Auth(AuthError::MissingSigningKey);
        let (status, body) = extract_response(error.into_response()).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!body.contains("signing secret"));
    }

    #[test]
    fn test_api_error_from_auth_error() {
        let api_err: ApiError = AuthError::MissingSigningKey.into();
        assert!(matches!(api_err, ApiError::Auth(_)));
    }

    #[test]
    fn test_api_error_display() {
        assert_eq!(ApiError::TaskNotFound(7).to_string(), "Task not found: 7");
        assert_eq!(
            ApiError::Auth(AuthError::MissingSigningKey).to_string(),
            format!("Authentication error: {}", AuthError::MissingSigningKey)
        );
    }

    fn sqlx_error() -> sqlx::Error {
        sqlx::Error::PoolTimedOut
    }
}
