use crate::domain::{Book, Isbn};
use crate::ports::book_catalog::{BookCatalog as BookCatalogTrait, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

/// BookCatalogのインメモリ実装
///
/// 書籍をISBNをキーに保持する。テストや永続化不要の組み込み用途向け。
pub struct BookCatalog {
    books: Mutex<HashMap<Isbn, Book>>,
}

impl BookCatalog {
    pub fn new() -> Self {
        Self {
            books: Mutex::new(HashMap::new()),
        }
    }

    /// 書籍を登録する
    ///
    /// 同じISBNの書籍が既にあれば置き換える。
    pub fn add_book(&self, book: Book) -> Result<()> {
        let mut books = self.books.lock().map_err(|e| e.to_string())?;
        books.insert(book.isbn.clone(), book);
        Ok(())
    }
}

impl Default for BookCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BookCatalogTrait for BookCatalog {
    async fn find_by_isbn(&self, isbn: &Isbn) -> Result<Option<Book>> {
        let books = self.books.lock().map_err(|e| e.to_string())?;
        Ok(books.get(isbn).cloned())
    }
}
