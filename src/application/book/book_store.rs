use crate::domain::{self, Book, BookFilter, BookId, BookInput, BookListItem};
use crate::ports::*;
use std::sync::Arc;
use tokio::sync::Mutex;

use super::errors::{BookApplicationError, Result};

/// サービスの依存関係
///
/// IDの生成と現在時刻の取得は外部の能力として注入する。
/// テストでは決定的な実装（SequentialIdGenerator, FixedClock）に差し替える。
#[derive(Clone)]
pub struct ServiceDependencies {
    pub id_generator: Arc<dyn IdGenerator>,
    pub clock: Arc<dyn Clock>,
}

/// 書籍ストア
///
/// プロセス内に保持される書籍コレクションの唯一の所有者。
/// コレクションへのアクセスはすべてこの型のメソッドを通し、
/// 内部への参照は決して外に渡さない（読み取りはコピーか射影を返す）。
///
/// # 一貫性保証
///
/// 各操作はコレクションのロックを保持したまま完了まで実行されるため、
/// 操作は常に1つずつ適用される。バリデーションはコレクションに触れる前に
/// 行われるので、失敗した変更が途中まで反映されることはない。
pub struct BookStore {
    books: Mutex<Vec<Book>>,
    deps: ServiceDependencies,
}

impl BookStore {
    /// 空のコレクションでストアを作成する
    pub fn new(deps: ServiceDependencies) -> Self {
        Self {
            books: Mutex::new(Vec::new()),
            deps,
        }
    }

    /// 書籍を追加する
    ///
    /// ビジネスルール（この順序で判定）：
    /// - name が指定されていること
    /// - readPage が pageCount を超えないこと（両方指定された場合のみ）
    ///
    /// 成功時は新しいIDを払い出し、inserted_at と updated_at に現在時刻を設定して
    /// コレクションの末尾に追加する。
    ///
    /// # 戻り値
    /// 成功時は作成された書籍のID
    ///
    /// # エラー
    /// - MissingName / PageOverflow: 入力不正
    /// - InsertNotConfirmed: 追加後の確認で書籍が見つからない
    pub async fn create(&self, input: BookInput) -> Result<BookId> {
        // 1. 入力の検証（コレクションには触れない）
        let fields = domain::validate_input(input).inspect_err(|e| {
            tracing::warn!(error = ?e, "Rejected book creation");
        })?;

        let mut books = self.books.lock().await;

        // 2. ドメイン層の純粋関数で書籍を組み立てる
        let id = self.deps.id_generator.next_id();
        let book = domain::create_book(id.clone(), fields, self.deps.clock.now());

        // 3. コレクションに追加
        books.push(book);

        // 4. 追加されたことを確認
        confirm_inserted(&books, &id)?;

        tracing::info!(book_id = %id, total = books.len(), "Book added");

        Ok(id)
    }

    /// 条件に合う書籍の一覧を取得する
    ///
    /// 結果は {id, name, publisher} の射影のみで、挿入順を保つ。
    /// 該当がなければ空のVecを返す。
    pub async fn list(&self, filter: &BookFilter) -> Vec<BookListItem> {
        let books = self.books.lock().await;

        books
            .iter()
            .filter(|book| filter.matches(book))
            .map(Book::list_item)
            .collect()
    }

    /// IDで書籍を取得する
    ///
    /// 同じIDが複数存在する場合（不変条件違反）は挿入順で最初のものを返す。
    pub async fn get_by_id(&self, id: &BookId) -> Option<Book> {
        let books = self.books.lock().await;
        books.iter().find(|book| &book.id == id).cloned()
    }

    /// IDで書籍を置き換える
    ///
    /// ビジネスルール：
    /// - 書籍が存在すること（入力の検証より先に判定する）
    /// - 入力の検証順序は `create` と同じ
    ///
    /// id と inserted_at は引き継ぎ、updated_at を現在時刻にし、
    /// finished を再計算する。他のフィールドはすべて入力で上書きする。
    pub async fn update_by_id(&self, id: &BookId, input: BookInput) -> Result<()> {
        let mut books = self.books.lock().await;

        // 1. 対象の位置を特定
        let index = find_index(&books, id)
            .ok_or_else(|| BookApplicationError::BookNotFound(id.clone()))?;

        // 2. 入力の検証
        let fields = domain::validate_input(input).inspect_err(|e| {
            tracing::warn!(book_id = %id, error = ?e, "Rejected book update");
        })?;

        // 3. その場で置き換える
        let updated = domain::replace_book(&books[index], fields, self.deps.clock.now());
        books[index] = updated;

        tracing::info!(book_id = %id, "Book updated");

        Ok(())
    }

    /// IDで書籍を削除する
    ///
    /// 残りの書籍の順序は変わらない。
    pub async fn delete_by_id(&self, id: &BookId) -> Result<()> {
        let mut books = self.books.lock().await;

        let index = find_index(&books, id)
            .ok_or_else(|| BookApplicationError::BookNotFound(id.clone()))?;

        books.remove(index);

        tracing::info!(book_id = %id, total = books.len(), "Book deleted");

        Ok(())
    }
}

fn find_index(books: &[Book], id: &BookId) -> Option<usize> {
    books.iter().position(|book| &book.id == id)
}

/// 追加直後の事後条件チェック
///
/// 逐次実行の下では失敗しないが、失敗した場合は成功を報告せずエラーにする。
fn confirm_inserted(books: &[Book], id: &BookId) -> Result<()> {
    if books.iter().any(|book| &book.id == id) {
        Ok(())
    } else {
        tracing::error!(book_id = %id, "Inserted book is missing from the collection");
        Err(BookApplicationError::InsertNotConfirmed(id.clone()))
    }
}
