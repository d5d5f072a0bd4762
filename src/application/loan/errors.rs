use crate::domain::{DueDateOutOfRange, LoanRejection};
use thiserror::Error;

/// 貸出管理アプリケーション層のエラー
#[derive(Debug, Error)]
pub enum LoanApplicationError {
    /// ビジネスルールによる拒否（利用者に表示する固定メッセージ）
    #[error(transparent)]
    Rejected(#[from] LoanRejection),

    /// 返却期限の計算がカレンダーの範囲外
    #[error(transparent)]
    DueDateOutOfRange(#[from] DueDateOutOfRange),

    /// BookCatalogのエラー
    #[error("Book catalog error")]
    CatalogError(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// LoanLedgerのエラー
    #[error("Loan ledger error")]
    LedgerError(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl LoanApplicationError {
    /// ビジネスルールによる拒否であればその理由を返す
    pub fn rejection(&self) -> Option<LoanRejection> {
        match self {
            LoanApplicationError::Rejected(rejection) => Some(*rejection),
            _ => None,
        }
    }
}

/// アプリケーション層の Result型
pub type Result<T> = std::result::Result<T, LoanApplicationError>;
