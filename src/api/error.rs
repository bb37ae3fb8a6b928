use crate::application::book::BookApplicationError;
use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use super::types::ErrorResponse;

/// エラーが発生した操作
///
/// 同じアプリケーションエラーでも、操作ごとにクライアント向けの文言が異なる。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookOperation {
    Add,
    Fetch,
    Update,
    Delete,
}

impl BookOperation {
    fn failure_prefix(&self) -> &'static str {
        match self {
            BookOperation::Add => "Failed to add book",
            BookOperation::Fetch => "Failed to fetch book",
            BookOperation::Update => "Failed to update book",
            BookOperation::Delete => "Failed to delete book",
        }
    }
}

/// API層のエラー型
///
/// アプリケーション層のエラー、またはリクエストボディの読み取り失敗をラップし、
/// HTTPレスポンスへのマッピングを提供する。
#[derive(Debug)]
pub enum ApiError {
    Application(BookOperation, BookApplicationError),
    InvalidBody(BookOperation, JsonRejection),
}

impl ApiError {
    pub fn new(operation: BookOperation, err: BookApplicationError) -> Self {
        ApiError::Application(operation, err)
    }

    /// `map_err` で使うためのクロージャを返す
    pub fn during(operation: BookOperation) -> impl Fn(BookApplicationError) -> Self {
        move |err| ApiError::new(operation, err)
    }

    /// レスポンスのステータスコードとメッセージ
    pub fn status_and_message(&self) -> (StatusCode, String) {
        match self {
            // 400 Bad Request - 入力不正
            ApiError::Application(op, BookApplicationError::MissingName) => (
                StatusCode::BAD_REQUEST,
                format!("{}. Please provide the book name", op.failure_prefix()),
            ),
            ApiError::Application(op, BookApplicationError::PageOverflow) => (
                StatusCode::BAD_REQUEST,
                format!(
                    "{}. readPage must not be greater than pageCount",
                    op.failure_prefix()
                ),
            ),
            ApiError::InvalidBody(op, rejection) => {
                tracing::warn!("Rejected request body: {}", rejection.body_text());
                (
                    StatusCode::BAD_REQUEST,
                    format!("{}. Request body must be a JSON object", op.failure_prefix()),
                )
            }

            // 404 Not Found - リクエストされた書籍が存在しない
            ApiError::Application(BookOperation::Fetch, BookApplicationError::BookNotFound(_)) => {
                (StatusCode::NOT_FOUND, "Book not found".to_string())
            }
            ApiError::Application(op, BookApplicationError::BookNotFound(_)) => (
                StatusCode::NOT_FOUND,
                format!("{}. Id not found", op.failure_prefix()),
            ),

            // 500 Internal Server Error
            // 内部エラーの詳細はログに記録し、クライアントには一般的なメッセージのみを返す
            ApiError::Application(op, err @ BookApplicationError::InsertNotConfirmed(_)) => {
                tracing::error!("Book store error: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    op.failure_prefix().to_string(),
                )
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = self.status_and_message();
        let body = Json(ErrorResponse::fail(message));
        (status, body).into_response()
    }
}
