use crate::domain::value_objects::BookId;
use crate::ports::id_generator::IdGenerator;
use std::sync::atomic::{AtomicU64, Ordering};

/// IdGeneratorのモック実装
///
/// 予測可能なID（"book-1", "book-2", ...）を払い出すことで、
/// レスポンスを読み返さなくてもテストから書籍を参照できる。
pub struct SequentialIdGenerator {
    prefix: String,
    counter: AtomicU64,
}

impl SequentialIdGenerator {
    pub fn new() -> Self {
        Self::with_prefix("book")
    }

    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            counter: AtomicU64::new(0),
        }
    }
}

impl Default for SequentialIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&self) -> BookId {
        let n = self.counter.fetch_add(1, Ordering::SeqCst) + 1;
        BookId::new(format!("{}-{}", self.prefix, n))
    }
}
