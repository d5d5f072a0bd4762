use crate::domain::{Book, Isbn, LoanRecord};
use async_trait::async_trait;

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// 貸出台帳ポート
///
/// 貸出記録の追記と、ISBNごとの貸出状況の照会を抽象化する。
/// 返却操作は存在しないため、記録された貸出はすべて貸出中とみなす。
#[async_trait]
pub trait LoanLedger: Send + Sync {
    /// 貸出中の書籍をISBNで取得する
    ///
    /// 貸出可能性の確認に使用される。貸出中でなければ`Ok(None)`。
    async fn find_loaned_book(&self, isbn: &Isbn) -> Result<Option<Book>>;

    /// 承認された貸出記録を追加する
    async fn append(&self, loan: LoanRecord) -> Result<()>;

    /// ISBNで最新の貸出記録を取得する
    ///
    /// 照会・テスト用。貸出判定そのものでは使用しない。
    async fn find_by_isbn(&self, isbn: &Isbn) -> Result<Option<LoanRecord>>;
}
