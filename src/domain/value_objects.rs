use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// 貸出ID - 貸出記録の識別子
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LoanId(Uuid);

impl LoanId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl Default for LoanId {
    fn default() -> Self {
        Self::new()
    }
}

/// ISBNのエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IsbnError {
    /// 空文字列
    #[error("ISBN must not be empty")]
    Empty,
}

/// ISBN - カタログのキー
///
/// 名前はISBNだが、実際のISBNのチェックディジットは検証しない。
/// 任意の英数字列を受け付ける。唯一の不変条件は空でないこと。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Isbn(String);

impl Isbn {
    /// 新規作成
    ///
    /// # エラー
    /// 空文字列の場合は`IsbnError::Empty`を返す
    pub fn new(value: impl Into<String>) -> Result<Self, IsbnError> {
        let value = value.into();
        if value.is_empty() {
            return Err(IsbnError::Empty);
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Isbn {
    type Error = IsbnError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for Isbn {
    type Error = IsbnError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Isbn> for String {
    fn from(isbn: Isbn) -> Self {
        isbn.0
    }
}

impl std::fmt::Display for Isbn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loan_id_creation() {
        let id1 = LoanId::new();
        let id2 = LoanId::new();
        assert_ne!(id1, id2);
    }

    #[test]
    fn test_loan_id_from_uuid() {
        let uuid = Uuid::new_v4();
        let id = LoanId::from_uuid(uuid);
        assert_eq!(id.value(), uuid);
    }

    // TDD: Isbn のテスト
    #[test]
    fn test_isbn_accepts_arbitrary_alphanumeric() {
        let isbn = Isbn::new("J79TO49RI39E9F9E9AC9G9").unwrap();
        assert_eq!(isbn.as_str(), "J79TO49RI39E9F9E9AC9G9");
        assert_eq!(isbn.to_string(), "J79TO49RI39E9F9E9AC9G9");
    }

    #[test]
    fn test_isbn_rejects_empty() {
        let result = Isbn::new("");
        assert_eq!(result.unwrap_err(), IsbnError::Empty);
    }

    #[test]
    fn test_isbn_is_case_sensitive() {
        let upper = Isbn::new("ABC").unwrap();
        let lower = Isbn::new("abc").unwrap();
        assert_ne!(upper, lower);
    }

    #[test]
    fn test_isbn_deserialize_validates() {
        let isbn: Isbn = serde_json::from_str("\"HY7E6G4B\"").unwrap();
        assert_eq!(isbn.as_str(), "HY7E6G4B");

        let result = serde_json::from_str::<Isbn>("\"\"");
        assert!(result.is_err());
    }
}
