use crate::domain::{Book, Isbn, LoanId, LoanRecord};
use crate::ports::loan_ledger::{LoanLedger as LoanLedgerTrait, Result};
use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::{PgPool, Row, postgres::PgRow};

use super::book_catalog::map_row_to_book;

/// PostgreSQLの行データをLoanRecordに変換する
///
/// `loans`と`books`を結合した行を前提とする。
fn map_row_to_loan_record(row: &PgRow) -> Result<LoanRecord> {
    let request_date: NaiveDate = row.try_get("request_date")?;
    let max_return_date: Option<NaiveDate> = row.try_get("max_return_date")?;

    Ok(LoanRecord {
        loan_id: LoanId::from_uuid(row.try_get("loan_id")?),
        request_date,
        book: map_row_to_book(row)?,
        max_return_date,
        borrower_name: row.try_get("borrower_name")?,
    })
}

/// LoanLedgerのPostgreSQL実装
///
/// 貸出記録は`loans`テーブルに追記され、書籍情報は`books`との結合で取得する。
pub struct LoanLedger {
    pool: PgPool,
}

impl LoanLedger {
    /// PostgreSQLコネクションプールから新しいLoanLedgerを作成
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LoanLedgerTrait for LoanLedger {
    /// 貸出中の書籍を取得
    ///
    /// 返却操作がないため、記録が1件でもあれば貸出中とみなす。
    async fn find_loaned_book(&self, isbn: &Isbn) -> Result<Option<Book>> {
        let row = sqlx::query(
            r#"
            SELECT b.isbn, b.title
            FROM loans l
            JOIN books b ON b.isbn = l.isbn
            WHERE l.isbn = $1
            LIMIT 1
            "#,
        )
        .bind(isbn.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(map_row_to_book).transpose()
    }

    /// 貸出記録を追加
    async fn append(&self, loan: LoanRecord) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO loans (
                loan_id,
                isbn,
                borrower_name,
                request_date,
                max_return_date
            )
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(loan.loan_id.value())
        .bind(loan.book.isbn.as_str())
        .bind(&loan.borrower_name)
        .bind(loan.request_date)
        .bind(loan.max_return_date)
        .execute(&self.pool)
        .await?;

        tracing::debug!(loan_id = %loan.loan_id.value(), "loan row inserted");
        Ok(())
    }

    /// ISBNで最新の貸出記録を取得
    async fn find_by_isbn(&self, isbn: &Isbn) -> Result<Option<LoanRecord>> {
        let row = sqlx::query(
            r#"
            SELECT
                l.loan_id,
                l.borrower_name,
                l.request_date,
                l.max_return_date,
                b.isbn,
                b.title
            FROM loans l
            JOIN books b ON b.isbn = l.isbn
            WHERE l.isbn = $1
            ORDER BY l.created_at DESC
            LIMIT 1
            "#,
        )
        .bind(isbn.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(map_row_to_loan_record).transpose()
    }
}
