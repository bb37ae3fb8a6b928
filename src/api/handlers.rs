use crate::application::book::{BookApplicationError, BookStore};
use crate::domain::BookId;
use axum::{
    Json,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::StatusCode,
};
use std::sync::Arc;

use super::{
    error::{ApiError, BookOperation},
    types::{
        BookCreatedData, BookData, BookListData, BookListItemResponse, BookPayload, BookResponse,
        ListBooksQuery, MessageResponse, SuccessResponse,
    },
};

// ============================================================================
// State
// ============================================================================

/// ハンドラー間で共有されるアプリケーション状態
pub struct AppState {
    pub book_store: BookStore,
}

// ============================================================================
// Command handlers (POST, PUT, DELETE)
// ============================================================================

/// POST /books - 新しい書籍を登録
///
/// 強制されるビジネスルール:
/// - name が指定されていること
/// - readPage が pageCount を超えないこと
pub async fn add_book(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<BookPayload>, JsonRejection>,
) -> Result<(StatusCode, Json<SuccessResponse<BookCreatedData>>), ApiError> {
    let Json(payload) = payload.map_err(|e| ApiError::InvalidBody(BookOperation::Add, e))?;

    let book_id = state
        .book_store
        .create(payload.to_input())
        .await
        .map_err(ApiError::during(BookOperation::Add))?;

    let response = SuccessResponse::with_message(
        "Book added successfully",
        BookCreatedData {
            book_id: book_id.value(),
        },
    );

    Ok((StatusCode::CREATED, Json(response)))
}

/// PUT /books/:id - 書籍を置き換える
///
/// 部分更新には対応しない。省略されたフィールドは既定値で上書きされる。
/// 書籍が存在しない場合は入力の内容にかかわらず404を返す。
pub async fn edit_book_by_id(
    State(state): State<Arc<AppState>>,
    Path(book_id): Path<String>,
    payload: Result<Json<BookPayload>, JsonRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let book_id = BookId::new(book_id);

    // ボディが読めない場合でも、存在しない書籍は404を優先する
    let payload = match payload {
        Ok(Json(payload)) => payload,
        Err(rejection) => {
            if state.book_store.get_by_id(&book_id).await.is_none() {
                return Err(ApiError::new(
                    BookOperation::Update,
                    BookApplicationError::BookNotFound(book_id),
                ));
            }
            return Err(ApiError::InvalidBody(BookOperation::Update, rejection));
        }
    };

    state
        .book_store
        .update_by_id(&book_id, payload.to_input())
        .await
        .map_err(ApiError::during(BookOperation::Update))?;

    Ok(Json(MessageResponse::success("Book updated successfully")))
}

/// DELETE /books/:id - 書籍を削除
pub async fn delete_book_by_id(
    State(state): State<Arc<AppState>>,
    Path(book_id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let book_id = BookId::new(book_id);

    state
        .book_store
        .delete_by_id(&book_id)
        .await
        .map_err(ApiError::during(BookOperation::Delete))?;

    Ok(Json(MessageResponse::success("Book deleted successfully")))
}

// ============================================================================
// Query handlers (GET)
// ============================================================================

/// GET /books - オプションフィルタ付き書籍一覧取得
///
/// クエリパラメータ:
/// - name: 書籍名の部分一致（大文字小文字を区別しない）（オプション）
/// - reading: 0 なら読書中でない書籍、それ以外なら読書中の書籍（オプション）
/// - finished: 0 なら未読了の書籍、それ以外なら読了済みの書籍（オプション）
///
/// 該当がなくても空の一覧で成功を返す。
/// クエリはキーと値の組として受け取るため、キーの重複でリクエストが拒否されることはない。
pub async fn list_books(
    State(state): State<Arc<AppState>>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Json<SuccessResponse<BookListData>> {
    let filter = ListBooksQuery::from_pairs(pairs).to_filter();

    let books: Vec<BookListItemResponse> = state
        .book_store
        .list(&filter)
        .await
        .into_iter()
        .map(BookListItemResponse::from)
        .collect();

    Json(SuccessResponse::data(BookListData { books }))
}

/// GET /books/:id - 書籍詳細をIDで取得
///
/// 見つかった場合は書籍の完全な情報を返し、見つからない場合は404を返す。
pub async fn get_book_by_id(
    State(state): State<Arc<AppState>>,
    Path(book_id): Path<String>,
) -> Result<Json<SuccessResponse<BookData>>, ApiError> {
    let book_id = BookId::new(book_id);

    match state.book_store.get_by_id(&book_id).await {
        Some(book) => Ok(Json(SuccessResponse::data(BookData {
            book: BookResponse::from(book),
        }))),
        None => Err(ApiError::new(
            BookOperation::Fetch,
            BookApplicationError::BookNotFound(book_id),
        )),
    }
}
