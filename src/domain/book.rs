use serde::{Deserialize, Serialize};

use super::Isbn;

/// 書籍 - カタログが所有する不変のエンティティ
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub isbn: Isbn,
    pub title: String,
}

impl Book {
    pub fn new(isbn: Isbn, title: impl Into<String>) -> Self {
        Self {
            isbn,
            title: title.into(),
        }
    }
}
