use crate::domain::value_objects::BookId;
use crate::ports::id_generator::IdGenerator;
use uuid::Uuid;

/// 生成するIDの文字数
pub const BOOK_ID_LENGTH: usize = 16;

/// UUID v4 に基づくIdGenerator実装
///
/// ハイフンなしの16進表記から先頭16文字を切り出して使う。
pub struct UuidIdGenerator;

impl UuidIdGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl Default for UuidIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator for UuidIdGenerator {
    fn next_id(&self) -> BookId {
        let mut token = Uuid::new_v4().simple().to_string();
        token.truncate(BOOK_ID_LENGTH);
        BookId::new(token)
    }
}
