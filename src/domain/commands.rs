use serde::{Deserialize, Serialize};

/// コマンド：書籍の内容を登録・置換する
///
/// 作成と更新で共通の入力。更新は部分パッチではなく全フィールドの置換なので、
/// 呼び出し側は常に完全な表現を送る必要がある。
/// `name` と ページ数の2項目は未指定（None）を区別するためにOptionで保持する。
/// ページ数はどちらかが未指定なら超過判定を行わない。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookInput {
    pub name: Option<String>,
    pub year: i32,
    pub author: String,
    pub summary: String,
    pub publisher: String,
    pub page_count: Option<i64>,
    pub read_page: Option<i64>,
    pub reading: bool,
}
