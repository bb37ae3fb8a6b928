use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{BookId, BookValidationError, commands::BookInput};

/// Book集約 - 書棚に登録された1冊の書籍
///
/// 不変条件：
/// - `finished == (page_count == read_page)`
/// - `page_count >= read_page`（両方ある場合）
///
/// ページ数は入力で省略された場合 None のまま保持する。
/// - `inserted_at <= updated_at`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    // 識別子
    pub id: BookId,

    // 書誌情報
    pub name: String,
    pub year: i32,
    pub author: String,
    pub summary: String,
    pub publisher: String,

    // 読書の進捗
    pub page_count: Option<i64>,
    pub read_page: Option<i64>,
    pub finished: bool,
    pub reading: bool,

    // 監査情報
    pub inserted_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// 一覧表示用の書籍の射影
///
/// 一覧取得では完全なレコードではなく、この3項目のみを返す。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookListItem {
    pub id: BookId,
    pub name: String,
    pub publisher: String,
}

/// バリデーション済みの書籍フィールド
///
/// `validate_input` を通過した入力のみがこの型になる。
/// 必須項目はここで確定し、Option が外れる。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookFields {
    pub name: String,
    pub year: i32,
    pub author: String,
    pub summary: String,
    pub publisher: String,
    pub page_count: Option<i64>,
    pub read_page: Option<i64>,
    pub reading: bool,
}

impl Book {
    /// 一覧用の射影を作る
    pub fn list_item(&self) -> BookListItem {
        BookListItem {
            id: self.id.clone(),
            name: self.name.clone(),
            publisher: self.publisher.clone(),
        }
    }
}

/// 読了判定（導出フィールド）
///
/// 両方省略された書籍は読了、片方だけ省略された書籍は未読了になる。
pub fn is_finished(page_count: Option<i64>, read_page: Option<i64>) -> bool {
    page_count == read_page
}

/// 純粋関数：書籍入力を検証する
///
/// 判定順序（最初の失敗で打ち切る）：
/// 1. name が未指定 → MissingName
/// 2. read_page > page_count → PageOverflow（両方指定された場合のみ）
pub fn validate_input(input: BookInput) -> Result<BookFields, BookValidationError> {
    let name = input.name.ok_or(BookValidationError::MissingName)?;

    if matches!(
        (input.page_count, input.read_page),
        (Some(page_count), Some(read_page)) if read_page > page_count
    ) {
        return Err(BookValidationError::PageOverflow);
    }

    Ok(BookFields {
        name,
        year: input.year,
        author: input.author,
        summary: input.summary,
        publisher: input.publisher,
        page_count: input.page_count,
        read_page: input.read_page,
        reading: input.reading,
    })
}

/// 純粋関数：書籍を作成する
///
/// inserted_at と updated_at には同じ時刻を設定し、finished を導出する。
/// 副作用なし。
pub fn create_book(id: BookId, fields: BookFields, now: DateTime<Utc>) -> Book {
    let finished = is_finished(fields.page_count, fields.read_page);

    Book {
        id,
        name: fields.name,
        year: fields.year,
        author: fields.author,
        summary: fields.summary,
        publisher: fields.publisher,
        page_count: fields.page_count,
        read_page: fields.read_page,
        finished,
        reading: fields.reading,
        inserted_at: now,
        updated_at: now,
    }
}

/// 純粋関数：書籍を置き換える
///
/// id と inserted_at は引き継ぎ、それ以外のフィールドはすべて入力で上書きする。
/// 以前の値とのマージは行わない。
pub fn replace_book(existing: &Book, fields: BookFields, now: DateTime<Utc>) -> Book {
    let finished = is_finished(fields.page_count, fields.read_page);

    Book {
        id: existing.id.clone(),
        name: fields.name,
        year: fields.year,
        author: fields.author,
        summary: fields.summary,
        publisher: fields.publisher,
        page_count: fields.page_count,
        read_page: fields.read_page,
        finished,
        reading: fields.reading,
        inserted_at: existing.inserted_at,
        updated_at: now,
    }
}
