use crate::domain::{self, LoanRejection, commands::LendBook, value_objects::*};
use crate::ports::*;
use std::sync::Arc;

use super::errors::{LoanApplicationError, Result};

/// サービスの依存関係
///
/// データ構造として定義し、振る舞いは持たない。
/// 依存はすべて引数として関数に渡される。
#[derive(Clone)]
pub struct ServiceDependencies {
    pub book_catalog: Arc<dyn BookCatalog>,
    pub loan_ledger: Arc<dyn LoanLedger>,
}

/// 書籍が貸出中か確認する
pub async fn is_on_loan(deps: &ServiceDependencies, isbn: &Isbn) -> Result<bool> {
    let loaned_book = deps
        .loan_ledger
        .find_loaned_book(isbn)
        .await
        .map_err(LoanApplicationError::LedgerError)?;

    Ok(loaned_book.is_some())
}

/// 書籍を貸し出す
///
/// ビジネスルール（この順序で評価し、最初の違反で中断する）：
/// 1. 書籍が貸出中でないこと
/// 2. ISBNが回文でないこと（回文の書籍は館内閲覧のみ）
/// 3. 書籍がカタログに登録されていること
/// 4. ISBNの数字合計が30を超える場合は返却期限を設定する
///
/// 拒否された場合、台帳には何も書き込まれない。
///
/// # 一貫性保証
///
/// 貸出中の確認と台帳への追加はアトミックではない。
/// 同じISBNへの同時リクエストの直列化は台帳側の責務。
///
/// # 戻り値
/// 成功時は作成された貸出のID
pub async fn lend_book(deps: &ServiceDependencies, cmd: LendBook) -> Result<LoanId> {
    // 1. 貸出可能性確認
    if is_on_loan(deps, &cmd.isbn).await? {
        tracing::debug!(isbn = %cmd.isbn, "loan rejected: book already on loan");
        return Err(LoanRejection::NotAvailable.into());
    }

    // 2. 回文確認（カタログより先に判定する）
    if let Err(rejection) = domain::loan::ensure_lendable(&cmd.isbn) {
        tracing::debug!(isbn = %cmd.isbn, "loan rejected: palindrome ISBN");
        return Err(rejection.into());
    }

    // 3. カタログから書籍を取得
    let book = deps
        .book_catalog
        .find_by_isbn(&cmd.isbn)
        .await
        .map_err(LoanApplicationError::CatalogError)?
        .ok_or_else(|| {
            tracing::debug!(isbn = %cmd.isbn, "loan rejected: book not registered");
            LoanRejection::NotFound
        })?;

    // 4. ドメイン層の純粋関数で貸出記録を作成
    let loan = domain::loan::open_loan(book, cmd.borrower_name, cmd.request_date)?;
    let loan_id = loan.loan_id;
    let max_return_date = loan.max_return_date;

    // 5. 台帳に保存
    deps.loan_ledger.append(loan).await.map_err(|e| {
        tracing::error!(isbn = %cmd.isbn, error = %e, "failed to append loan");
        LoanApplicationError::LedgerError(e)
    })?;

    tracing::info!(
        loan_id = %loan_id.value(),
        isbn = %cmd.isbn,
        request_date = %cmd.request_date,
        max_return_date = ?max_return_date,
        "book lent"
    );

    Ok(loan_id)
}
