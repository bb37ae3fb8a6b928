#![allow(dead_code)]

use bookshelf_api::adapters::mock::{FixedClock, SequentialIdGenerator};
use bookshelf_api::application::book::{BookStore, ServiceDependencies};
use bookshelf_api::domain::{BookFilter, BookInput};
use std::sync::Arc;

/// テスト用の書籍ストアを作成
///
/// IDは "book-1", "book-2", ... の順に払い出され、
/// 時刻は返された FixedClock を進めない限り 2024-01-01T00:00:00.000Z に固定される。
pub fn create_test_store() -> (BookStore, Arc<FixedClock>) {
    let clock = Arc::new(FixedClock::default());
    let deps = ServiceDependencies {
        id_generator: Arc::new(SequentialIdGenerator::new()),
        clock: clock.clone(),
    };
    (BookStore::new(deps), clock)
}

/// すべての項目が埋まった書籍入力
pub fn book_input(name: &str, page_count: i64, read_page: i64, reading: bool) -> BookInput {
    BookInput {
        name: Some(name.to_string()),
        year: 2010,
        author: "John Doe".to_string(),
        summary: "Lorem ipsum dolor sit amet".to_string(),
        publisher: "Dicoding Indonesia".to_string(),
        page_count: Some(page_count),
        read_page: Some(read_page),
        reading,
    }
}

/// ストアに登録されている書籍の数
pub async fn book_count(store: &BookStore) -> usize {
    store.list(&BookFilter::default()).await.len()
}
