use bookshelf_api::application::book::BookApplicationError;
use bookshelf_api::domain::*;
use bookshelf_api::ports::Clock;
use chrono::Duration;

mod common;

use common::{book_count, book_input, create_test_store};

// ============================================================================
// 作成（create）
// ============================================================================

#[tokio::test]
async fn test_create_then_get_round_trips_input() {
    let (store, clock) = create_test_store();

    let id = store
        .create(book_input("Buku A", 100, 25, true))
        .await
        .unwrap();

    let book = store.get_by_id(&id).await.unwrap();
    assert_eq!(book.id, id);
    assert_eq!(book.name, "Buku A");
    assert_eq!(book.year, 2010);
    assert_eq!(book.author, "John Doe");
    assert_eq!(book.summary, "Lorem ipsum dolor sit amet");
    assert_eq!(book.publisher, "Dicoding Indonesia");
    assert_eq!(book.page_count, Some(100));
    assert_eq!(book.read_page, Some(25));
    assert!(book.reading);
    assert!(!book.finished);
    assert_eq!(book.inserted_at, clock.now());
    assert_eq!(book.inserted_at, book.updated_at);
}

#[tokio::test]
async fn test_create_with_all_pages_read_is_finished() {
    let (store, _) = create_test_store();

    let id = store
        .create(book_input("Buku A", 100, 100, false))
        .await
        .unwrap();

    assert!(store.get_by_id(&id).await.unwrap().finished);
}

#[tokio::test]
async fn test_create_with_page_overflow_fails_and_leaves_collection_unchanged() {
    let (store, _) = create_test_store();
    store
        .create(book_input("Buku A", 10, 1, false))
        .await
        .unwrap();

    let result = store.create(book_input("Buku B", 100, 150, false)).await;

    assert_eq!(result, Err(BookApplicationError::PageOverflow));
    assert_eq!(book_count(&store).await, 1);
}

#[tokio::test]
async fn test_create_without_name_fails() {
    let (store, _) = create_test_store();
    let mut input = book_input("Buku A", 100, 25, false);
    input.name = None;

    let result = store.create(input).await;

    assert_eq!(result, Err(BookApplicationError::MissingName));
    assert_eq!(book_count(&store).await, 0);
}

#[tokio::test]
async fn test_create_without_page_count_skips_overflow_check() {
    let (store, _) = create_test_store();
    let mut input = book_input("Buku A", 0, 5, true);
    input.page_count = None;

    let id = store.create(input).await.unwrap();

    let book = store.get_by_id(&id).await.unwrap();
    assert_eq!(book.page_count, None);
    assert_eq!(book.read_page, Some(5));
    assert!(!book.finished);
}

#[tokio::test]
async fn test_created_ids_are_unique() {
    let (store, _) = create_test_store();

    let id1 = store.create(book_input("A", 1, 0, false)).await.unwrap();
    let id2 = store.create(book_input("A", 1, 0, false)).await.unwrap();

    assert_ne!(id1, id2);
    assert_eq!(book_count(&store).await, 2);
}

// ============================================================================
// 一覧（list）
// ============================================================================

#[tokio::test]
async fn test_list_returns_projections_in_insertion_order() {
    let (store, _) = create_test_store();
    let a = store.create(book_input("Buku A", 10, 1, false)).await.unwrap();
    let b = store.create(book_input("Buku B", 10, 1, false)).await.unwrap();

    let items = store.list(&BookFilter::default()).await;

    assert_eq!(
        items,
        vec![
            BookListItem {
                id: a,
                name: "Buku A".to_string(),
                publisher: "Dicoding Indonesia".to_string(),
            },
            BookListItem {
                id: b,
                name: "Buku B".to_string(),
                publisher: "Dicoding Indonesia".to_string(),
            },
        ]
    );
}

#[tokio::test]
async fn test_list_on_empty_store_is_empty() {
    let (store, _) = create_test_store();
    assert!(store.list(&BookFilter::default()).await.is_empty());
}

#[tokio::test]
async fn test_list_by_reading_flag() {
    let (store, _) = create_test_store();
    let reading = store.create(book_input("Buku A", 10, 1, true)).await.unwrap();
    store.create(book_input("Buku B", 10, 1, false)).await.unwrap();

    let items = store
        .list(&BookFilter::from_query(None, &["1"], &[]))
        .await;

    assert_eq!(items.len(), 1);
    assert_eq!(items[0].id, reading);
}

#[tokio::test]
async fn test_list_by_finished_flag() {
    let (store, _) = create_test_store();
    store.create(book_input("Buku A", 10, 1, true)).await.unwrap();
    let finished = store.create(book_input("Buku B", 10, 10, false)).await.unwrap();

    let done = store
        .list(&BookFilter::from_query(None, &[], &["1"]))
        .await;
    let not_done = store
        .list(&BookFilter::from_query(None, &[], &["0"]))
        .await;

    assert_eq!(done.len(), 1);
    assert_eq!(done[0].id, finished);
    assert_eq!(not_done.len(), 1);
    assert_eq!(not_done[0].name, "Buku A");
}

#[tokio::test]
async fn test_list_by_name_ignores_case() {
    let (store, _) = create_test_store();
    store
        .create(book_input("Kelas Dicoding", 10, 1, true))
        .await
        .unwrap();
    store.create(book_input("Buku B", 10, 1, true)).await.unwrap();

    let items = store
        .list(&BookFilter::from_query::<&str>(
            Some("dIcOdInG".to_string()),
            &[],
            &[],
        ))
        .await;

    assert_eq!(items.len(), 1);
    assert_eq!(items[0].name, "Kelas Dicoding");
}

#[tokio::test]
async fn test_reads_do_not_mutate() {
    let (store, _) = create_test_store();
    let id = store.create(book_input("Buku A", 10, 1, true)).await.unwrap();

    let first_list = store.list(&BookFilter::default()).await;
    let first_get = store.get_by_id(&id).await;
    let second_list = store.list(&BookFilter::default()).await;
    let second_get = store.get_by_id(&id).await;

    assert_eq!(first_list, second_list);
    assert_eq!(first_get, second_get);
    assert_eq!(book_count(&store).await, 1);
}

#[tokio::test]
async fn test_list_reflects_current_state() {
    let (store, _) = create_test_store();
    let id = store.create(book_input("Buku A", 10, 1, true)).await.unwrap();
    assert_eq!(store.list(&BookFilter::default()).await.len(), 1);

    store.delete_by_id(&id).await.unwrap();

    assert!(store.list(&BookFilter::default()).await.is_empty());
}

// ============================================================================
// 取得（getById）
// ============================================================================

#[tokio::test]
async fn test_get_unknown_id_is_absent() {
    let (store, _) = create_test_store();
    assert!(store.get_by_id(&BookId::new("unknown")).await.is_none());
}

#[tokio::test]
async fn test_returned_book_is_a_copy() {
    let (store, _) = create_test_store();
    let id = store.create(book_input("Buku A", 10, 1, true)).await.unwrap();

    let mut copy = store.get_by_id(&id).await.unwrap();
    copy.read_page = Some(500);
    copy.name = "Tampered".to_string();

    let stored = store.get_by_id(&id).await.unwrap();
    assert_eq!(stored.name, "Buku A");
    assert_eq!(stored.read_page, Some(1));
}

// ============================================================================
// 更新（updateById）
// ============================================================================

#[tokio::test]
async fn test_update_preserves_identity_and_insertion_time() {
    let (store, clock) = create_test_store();
    let id = store.create(book_input("Buku A", 100, 10, false)).await.unwrap();
    let before = store.get_by_id(&id).await.unwrap();

    clock.advance(Duration::seconds(90));
    store
        .update_by_id(&id, book_input("Buku A Revisi", 200, 200, true))
        .await
        .unwrap();

    let after = store.get_by_id(&id).await.unwrap();
    assert_eq!(after.id, id);
    assert_eq!(after.inserted_at, before.inserted_at);
    assert!(after.updated_at > before.updated_at);
    assert_eq!(after.updated_at, before.updated_at + Duration::seconds(90));
    assert_eq!(after.name, "Buku A Revisi");
    assert_eq!(after.page_count, Some(200));
    assert!(after.finished);
    assert!(after.reading);
}

#[tokio::test]
async fn test_update_replaces_whole_record() {
    let (store, _) = create_test_store();
    let id = store.create(book_input("Buku A", 100, 10, false)).await.unwrap();

    let sparse = BookInput {
        name: Some("Buku B".to_string()),
        ..BookInput::default()
    };
    store.update_by_id(&id, sparse).await.unwrap();

    let book = store.get_by_id(&id).await.unwrap();
    assert_eq!(book.author, "");
    assert_eq!(book.publisher, "");
    assert_eq!(book.year, 0);
    assert_eq!(book.page_count, None);
    assert!(book.finished);
}

#[tokio::test]
async fn test_update_unknown_id_fails_with_not_found() {
    let (store, _) = create_test_store();
    let id = BookId::new("unknown");

    let result = store
        .update_by_id(&id, book_input("Buku A", 10, 1, true))
        .await;

    assert_eq!(result, Err(BookApplicationError::BookNotFound(id)));
}

#[tokio::test]
async fn test_update_validation_failure_leaves_record_untouched() {
    let (store, clock) = create_test_store();
    let id = store.create(book_input("Buku A", 100, 10, false)).await.unwrap();
    let before = store.get_by_id(&id).await.unwrap();

    clock.advance(Duration::seconds(5));
    let overflow = store
        .update_by_id(&id, book_input("Buku B", 100, 101, false))
        .await;
    let mut nameless = book_input("Buku B", 100, 50, false);
    nameless.name = None;
    let missing_name = store.update_by_id(&id, nameless).await;

    assert_eq!(overflow, Err(BookApplicationError::PageOverflow));
    assert_eq!(missing_name, Err(BookApplicationError::MissingName));
    assert_eq!(store.get_by_id(&id).await.unwrap(), before);
}

// ============================================================================
// 削除（deleteById）
// ============================================================================

#[tokio::test]
async fn test_delete_removes_only_that_book() {
    let (store, _) = create_test_store();
    let a = store.create(book_input("Buku A", 10, 1, true)).await.unwrap();
    let b = store.create(book_input("Buku B", 10, 1, true)).await.unwrap();

    store.delete_by_id(&a).await.unwrap();

    assert!(store.get_by_id(&a).await.is_none());
    assert!(store.get_by_id(&b).await.is_some());
    assert_eq!(book_count(&store).await, 1);
}

#[tokio::test]
async fn test_delete_unknown_id_fails_and_leaves_collection_unchanged() {
    let (store, _) = create_test_store();
    store.create(book_input("Buku A", 10, 1, true)).await.unwrap();
    let id = BookId::new("unknown");

    let result = store.delete_by_id(&id).await;

    assert_eq!(result, Err(BookApplicationError::BookNotFound(id)));
    assert_eq!(book_count(&store).await, 1);
}

#[tokio::test]
async fn test_delete_twice_fails_the_second_time() {
    let (store, _) = create_test_store();
    let id = store.create(book_input("Buku A", 10, 1, true)).await.unwrap();

    assert!(store.delete_by_id(&id).await.is_ok());
    assert_eq!(
        store.delete_by_id(&id).await,
        Err(BookApplicationError::BookNotFound(id))
    );
}

// ============================================================================
// 不変条件
// ============================================================================

#[tokio::test]
async fn test_invariants_hold_after_mixed_operations() {
    let (store, clock) = create_test_store();
    let mut ids = Vec::new();
    for (page_count, read_page) in [(10, 0), (10, 10), (10, 11), (0, 0), (5, 3)] {
        if let Ok(id) = store
            .create(book_input("Buku", page_count, read_page, false))
            .await
        {
            ids.push(id);
        }
    }
    clock.advance(Duration::seconds(1));
    let _ = store
        .update_by_id(&ids[0], book_input("Buku", 10, 10, true))
        .await;
    let _ = store
        .update_by_id(&ids[1], book_input("Buku", 10, 20, true))
        .await;

    assert_eq!(ids.len(), 4);
    for id in &ids {
        let book = store.get_by_id(id).await.unwrap();
        assert_eq!(book.finished, book.page_count == book.read_page);
        assert!(book.page_count >= book.read_page);
        assert!(book.inserted_at <= book.updated_at);
    }
}
