use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{Book, BookFilter, BookInput, BookListItem};

pub const STATUS_SUCCESS: &str = "success";
pub const STATUS_FAIL: &str = "fail";

/// 書籍の登録・更新リクエスト（POST /books と PUT /books/:id）
///
/// 更新も全フィールドの置換なので同じ形を使う。
/// name とページ数は未指定のまま渡し、それ以外の未指定フィールドは既定値で補う。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookPayload {
    pub name: Option<String>,
    pub year: Option<i32>,
    pub author: Option<String>,
    pub summary: Option<String>,
    pub publisher: Option<String>,
    pub page_count: Option<i64>,
    pub read_page: Option<i64>,
    pub reading: Option<bool>,
}

impl BookPayload {
    pub fn to_input(self) -> BookInput {
        BookInput {
            name: self.name,
            year: self.year.unwrap_or_default(),
            author: self.author.unwrap_or_default(),
            summary: self.summary.unwrap_or_default(),
            publisher: self.publisher.unwrap_or_default(),
            page_count: self.page_count,
            read_page: self.read_page,
            reading: self.reading.unwrap_or_default(),
        }
    }
}

/// 書籍一覧取得のクエリパラメータ
///
/// reading / finished は "0" / "1" のような緩い値で届くため文字列で受け取る。
/// 同じキーが繰り返される場合もあるので、値はキーごとにすべて保持する。
#[derive(Debug, Default)]
pub struct ListBooksQuery {
    /// 書籍名の部分一致でフィルタリング
    pub name: Vec<String>,
    /// 読書中かどうかでフィルタリング
    pub reading: Vec<String>,
    /// 読了かどうかでフィルタリング
    pub finished: Vec<String>,
}

impl ListBooksQuery {
    /// キーと値の組からクエリを組み立てる（未知のキーは無視する）
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut query = Self::default();
        for (key, value) in pairs {
            match key.as_str() {
                "name" => query.name.push(value),
                "reading" => query.reading.push(value),
                "finished" => query.finished.push(value),
                _ => {}
            }
        }
        query
    }

    /// 書籍名は最後に指定された値を使う
    pub fn to_filter(mut self) -> BookFilter {
        BookFilter::from_query(self.name.pop(), &self.reading, &self.finished)
    }
}

/// 成功レスポンスの共通エンベロープ
#[derive(Debug, Serialize, Deserialize)]
pub struct SuccessResponse<T> {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> SuccessResponse<T> {
    pub fn data(data: T) -> Self {
        Self {
            status: STATUS_SUCCESS.to_string(),
            message: None,
            data: Some(data),
        }
    }

    pub fn with_message(message: impl Into<String>, data: T) -> Self {
        Self {
            status: STATUS_SUCCESS.to_string(),
            message: Some(message.into()),
            data: Some(data),
        }
    }
}

/// データを持たない成功レスポンス（PUT, DELETE）
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub status: String,
    pub message: String,
}

impl MessageResponse {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            status: STATUS_SUCCESS.to_string(),
            message: message.into(),
        }
    }
}

/// 書籍作成レスポンスのデータ部
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookCreatedData {
    pub book_id: String,
}

/// 書籍一覧レスポンスのデータ部
#[derive(Debug, Serialize, Deserialize)]
pub struct BookListData {
    pub books: Vec<BookListItemResponse>,
}

/// 書籍詳細レスポンスのデータ部
#[derive(Debug, Serialize, Deserialize)]
pub struct BookData {
    pub book: BookResponse,
}

/// 一覧の1件分（GET /books）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookListItemResponse {
    pub id: String,
    pub name: String,
    pub publisher: String,
}

impl From<BookListItem> for BookListItemResponse {
    fn from(item: BookListItem) -> Self {
        Self {
            id: item.id.value(),
            name: item.name,
            publisher: item.publisher,
        }
    }
}

/// 書籍詳細（GET /books/:id）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookResponse {
    pub id: String,
    pub name: String,
    pub year: i32,
    pub author: String,
    pub summary: String,
    pub publisher: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_page: Option<i64>,
    pub finished: bool,
    pub reading: bool,
    pub inserted_at: String,
    pub updated_at: String,
}

impl From<Book> for BookResponse {
    fn from(book: Book) -> Self {
        Self {
            id: book.id.value(),
            name: book.name,
            year: book.year,
            author: book.author,
            summary: book.summary,
            publisher: book.publisher,
            page_count: book.page_count,
            read_page: book.read_page,
            finished: book.finished,
            reading: book.reading,
            inserted_at: format_timestamp(book.inserted_at),
            updated_at: format_timestamp(book.updated_at),
        }
    }
}

/// エラーレスポンス
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub status: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            status: STATUS_FAIL.to_string(),
            message: message.into(),
        }
    }
}

/// ISO-8601（ミリ秒精度、UTCは "Z"）で時刻を表記する
pub fn format_timestamp(instant: DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Millis, true)
}
