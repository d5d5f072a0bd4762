use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Isbn;

/// コマンド：書籍を貸し出す
///
/// `request_date`は呼び出し側が指定する（必ずしも今日ではない）。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LendBook {
    pub isbn: Isbn,
    pub borrower_name: String,
    pub request_date: NaiveDate,
}

impl LendBook {
    pub fn new(isbn: Isbn, borrower_name: impl Into<String>, request_date: NaiveDate) -> Self {
        Self {
            isbn,
            borrower_name: borrower_name.into(),
            request_date,
        }
    }
}
