use crate::domain::{Book, Isbn};
use async_trait::async_trait;

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// 書籍カタログポート
///
/// 貸出判定がカタログに求めるのはISBNによる検索のみ。
/// 書籍の登録・削除はアダプター固有の操作として扱う。
#[async_trait]
pub trait BookCatalog: Send + Sync {
    /// ISBNで書籍を検索する
    ///
    /// 登録されていない場合は`Ok(None)`を返す。
    /// `Err`はストレージ障害のみを表す。
    async fn find_by_isbn(&self, isbn: &Isbn) -> Result<Option<Book>>;
}
