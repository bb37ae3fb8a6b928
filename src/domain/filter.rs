use super::Book;

/// 基数プレフィックス付き整数表記（"0x1f" など）
const RADIX_PREFIXES: [(&str, u32); 6] = [
    ("0x", 16),
    ("0X", 16),
    ("0o", 8),
    ("0O", 8),
    ("0b", 2),
    ("0B", 2),
];

/// 一覧取得の絞り込み条件
///
/// 各キーは独立して省略可能で、省略されたキーは制約を課さない。
/// 指定されたキーは name → reading → finished の順にAND結合で適用される。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookFilter {
    /// 書籍名の部分一致（大文字小文字を区別しない）
    pub name: Option<String>,
    pub reading: Option<bool>,
    pub finished: Option<bool>,
}

impl BookFilter {
    /// クエリ文字列の値から絞り込み条件を組み立てる
    ///
    /// reading / finished はキーに渡された値の列で、`parse_flag_values` で真偽値に変換する。
    pub fn from_query<S: AsRef<str>>(
        name: Option<String>,
        reading: &[S],
        finished: &[S],
    ) -> Self {
        Self {
            name,
            reading: parse_flag_values(reading),
            finished: parse_flag_values(finished),
        }
    }

    /// 書籍が全条件を満たすか判定する
    pub fn matches(&self, book: &Book) -> bool {
        self.matches_name(book) && self.matches_reading(book) && self.matches_finished(book)
    }

    fn matches_name(&self, book: &Book) -> bool {
        match &self.name {
            Some(name) => book.name.to_lowercase().contains(&name.to_lowercase()),
            None => true,
        }
    }

    fn matches_reading(&self, book: &Book) -> bool {
        self.reading.is_none_or(|reading| book.reading == reading)
    }

    fn matches_finished(&self, book: &Book) -> bool {
        self.finished.is_none_or(|finished| book.finished == finished)
    }
}

/// 同じキーに渡された値の列を真偽値に変換する
///
/// 値がなければ条件なし。複数の値は数値として読めないものと同じく false。
pub fn parse_flag_values<S: AsRef<str>>(values: &[S]) -> Option<bool> {
    match values {
        [] => None,
        [value] => Some(parse_flag(value.as_ref())),
        _ => Some(false),
    }
}

/// クエリ文字列を数値の真偽性で真偽値に変換する
///
/// 数値として読める値は 0 のとき false、それ以外は true。
/// 空文字列（前後の空白を除く）は 0 とみなす。
/// 数値として読めない値（"true", "abc" など）は NaN 扱いで false。
pub fn parse_flag(raw: &str) -> bool {
    let value = raw.trim();

    if value.is_empty() {
        return false;
    }

    for (prefix, radix) in RADIX_PREFIXES {
        if let Some(digits) = value.strip_prefix(prefix) {
            return !digits.is_empty()
                && digits.chars().all(|c| c.is_digit(radix))
                && digits.chars().any(|c| c != '0');
        }
    }

    if matches!(value, "Infinity" | "+Infinity" | "-Infinity") {
        return true;
    }

    // f64::from_str は "inf" や "NaN" も受け付けるため、指数表記以外の英字は先に弾く
    if value
        .chars()
        .any(|c| c.is_ascii_alphabetic() && c != 'e' && c != 'E')
    {
        return false;
    }

    value.parse::<f64>().map(|n| n != 0.0).unwrap_or(false)
}
