use crate::domain::value_objects::BookId;

/// ID生成ポート
///
/// 呼び出すたびに新しい一意なトークンを返す。
/// 同期的で失敗しない能力として扱う。テストでは決定的な実装に差し替える。
pub trait IdGenerator: Send + Sync {
    /// 新しい書籍IDを生成する
    fn next_id(&self) -> BookId;
}
