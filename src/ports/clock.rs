use chrono::{DateTime, Utc};

/// 時計ポート
///
/// 現在時刻の取得を抽象化する。
/// inserted_at / updated_at の設定に使用される。
pub trait Clock: Send + Sync {
    /// 現在時刻を返す
    fn now(&self) -> DateTime<Utc>;
}
