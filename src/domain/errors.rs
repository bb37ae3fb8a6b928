/// 書籍入力のバリデーションエラー
///
/// 作成・更新の両方で同じ順序（名前 → ページ数）で判定され、
/// 最初に失敗したものが返される。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookValidationError {
    /// 書籍名が指定されていない
    MissingName,
    /// readPage が pageCount を超えている
    PageOverflow,
}
