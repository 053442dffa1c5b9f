use crate::application::checkout::CheckoutError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use super::types::ErrorResponse;

/// API層のエラー型
///
/// アプリケーション層のエラーをラップし、HTTPレスポンスへのマッピングを提供する。
#[derive(Debug)]
pub enum ApiError {
    /// リクエストの形式が不正
    BadRequest(String),
    Checkout(CheckoutError),
}

impl From<CheckoutError> for ApiError {
    fn from(err: CheckoutError) -> Self {
        ApiError::Checkout(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg),

            // 422 Unprocessable Entity - ビジネスルール違反
            ApiError::Checkout(CheckoutError::TooManyCheckedOutBooks) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "TOO_MANY_CHECKED_OUT_BOOKS",
                "Member already has the maximum number of books checked out".to_string(),
            ),
            ApiError::Checkout(CheckoutError::PastDueBooks) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "PAST_DUE_BOOKS",
                "Member has past due books and cannot borrow more".to_string(),
            ),
            ApiError::Checkout(CheckoutError::NoCopiesAvailable) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "NO_COPIES_AVAILABLE",
                "No copies of this title are available".to_string(),
            ),

            // 500 Internal Server Error - システム障害
            // 内部エラーの詳細はログに記録し、クライアントには一般的なメッセージのみを返す
            ApiError::Checkout(CheckoutError::RepositoryError(e)) => {
                tracing::error!("Loan repository error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "REPOSITORY_ERROR",
                    "Failed to access loan storage".to_string(),
                )
            }
            ApiError::Checkout(CheckoutError::ReminderServiceError(e)) => {
                tracing::error!("Reminder service error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "REMINDER_SERVICE_ERROR",
                    "Failed to schedule reminders".to_string(),
                )
            }
        };

        let body = Json(ErrorResponse::new(error_type, message));
        (status, body).into_response()
    }
}
