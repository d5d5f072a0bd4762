use crate::domain::{Book, Isbn, LoanRecord};
use crate::ports::loan_ledger::{LoanLedger as LoanLedgerTrait, Result};
use async_trait::async_trait;
use std::sync::Mutex;

/// In-memory implementation of LoanLedger
///
/// Keeps loan records in insertion order. Every record counts as an
/// active loan since there is no return operation.
pub struct LoanLedger {
    loans: Mutex<Vec<LoanRecord>>,
}

impl LoanLedger {
    pub fn new() -> Self {
        Self {
            loans: Mutex::new(Vec::new()),
        }
    }

    /// Number of recorded loans, for asserting that rejected requests wrote nothing
    pub fn len(&self) -> Result<usize> {
        Ok(self.loans.lock().map_err(|e| e.to_string())?.len())
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }
}

impl Default for LoanLedger {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LoanLedgerTrait for LoanLedger {
    async fn find_loaned_book(&self, isbn: &Isbn) -> Result<Option<Book>> {
        Ok(self.find_by_isbn(isbn).await?.map(|loan| loan.book))
    }

    async fn append(&self, loan: LoanRecord) -> Result<()> {
        self.loans.lock().map_err(|e| e.to_string())?.push(loan);
        Ok(())
    }

    /// Latest record for the ISBN
    async fn find_by_isbn(&self, isbn: &Isbn) -> Result<Option<LoanRecord>> {
        let loans = self.loans.lock().map_err(|e| e.to_string())?;
        Ok(loans
            .iter()
            .rev()
            .find(|loan| &loan.book.isbn == isbn)
            .cloned())
    }
}
