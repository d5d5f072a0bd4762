use crate::domain::{Book, Isbn};
use crate::ports::book_catalog::{BookCatalog as BookCatalogTrait, Result};
use async_trait::async_trait;
use sqlx::{PgPool, Row, postgres::PgRow};

/// Map a `books` row to a Book
pub(super) fn map_row_to_book(row: &PgRow) -> Result<Book> {
    let isbn: String = row.try_get("isbn")?;
    let title: String = row.try_get("title")?;

    Ok(Book::new(Isbn::new(isbn)?, title))
}

/// PostgreSQL implementation of BookCatalog
pub struct BookCatalog {
    pool: PgPool,
}

impl BookCatalog {
    /// Create a new BookCatalog with a PostgreSQL connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Register a book in the catalog
    ///
    /// Re-registering an ISBN updates its title.
    pub async fn add_book(&self, book: &Book) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO books (isbn, title)
            VALUES ($1, $2)
            ON CONFLICT (isbn)
            DO UPDATE SET title = EXCLUDED.title
            "#,
        )
        .bind(book.isbn.as_str())
        .bind(&book.title)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

#[async_trait]
impl BookCatalogTrait for BookCatalog {
    async fn find_by_isbn(&self, isbn: &Isbn) -> Result<Option<Book>> {
        let row = sqlx::query(
            r#"
            SELECT isbn, title
            FROM books
            WHERE isbn = $1
            "#,
        )
        .bind(isbn.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(map_row_to_book).transpose()
    }
}
