use chrono::NaiveDate;
use thiserror::Error;

/// 貸出の拒否理由
///
/// 利用者に表示するためのビジネスルール違反。リトライしても結果は変わらない。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LoanRejection {
    /// 既に貸出中
    #[error("The book is not available")]
    NotAvailable,
    /// ISBNが回文のため館内閲覧のみ
    #[error("Palindrome-identifier books may only be used inside the library")]
    PalindromeRestricted,
    /// カタログに登録されていない
    #[error("The book is not registered in the library.")]
    NotFound,
}

/// 返却期限がカレンダーの表現範囲を超えた
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Maximum return date for a loan requested on {request_date} is out of range")]
pub struct DueDateOutOfRange {
    pub request_date: NaiveDate,
}
