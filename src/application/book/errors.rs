use thiserror::Error;

use crate::domain::{BookId, BookValidationError};

/// 書籍管理アプリケーション層のエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookApplicationError {
    /// 書籍名が指定されていない
    #[error("Book name is required")]
    MissingName,

    /// readPage が pageCount を超えている
    #[error("readPage must not be greater than pageCount")]
    PageOverflow,

    /// 書籍が見つからない
    #[error("Book {0} not found")]
    BookNotFound(BookId),

    /// 追加直後の確認で書籍が見つからなかった
    #[error("Book {0} was not found in the collection after insertion")]
    InsertNotConfirmed(BookId),
}

impl From<BookValidationError> for BookApplicationError {
    fn from(err: BookValidationError) -> Self {
        match err {
            BookValidationError::MissingName => BookApplicationError::MissingName,
            BookValidationError::PageOverflow => BookApplicationError::PageOverflow,
        }
    }
}

/// アプリケーション層の Result型
pub type Result<T> = std::result::Result<T, BookApplicationError>;
