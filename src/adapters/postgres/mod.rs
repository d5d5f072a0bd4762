pub mod book_catalog;
pub mod loan_ledger;
pub mod persistence;

// パブリックに型を再エクスポート
pub use book_catalog::BookCatalog as PostgresBookCatalog;
pub use loan_ledger::LoanLedger as PostgresLoanLedger;
pub use persistence::{Persistence, PersistenceError};
