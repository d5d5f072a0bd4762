pub mod book;
pub mod commands;
pub mod errors;
pub mod loan;
pub mod value_objects;

pub use book::*;
pub use errors::*;
pub use loan::LoanRecord;
pub use value_objects::*;
