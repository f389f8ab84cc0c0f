//! Book catalog service

use uuid::Uuid;

use crate::{
    error::AppResult,
    models::book::{Book, BookCategory, CreateBook, UpdateBook},
    repository::Repository,
};

/// The only component with business rules: existence checks, partial-update
/// merging and category filtering sit behind this service.
#[derive(Clone)]
pub struct BookService {
    repository: Repository,
}

impl BookService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Create a new book. The payload was already shape-validated at the
    /// boundary; the store assigns id and updated_at.
    pub async fn create(&self, input: CreateBook) -> AppResult<Book> {
        let book = self.repository.books_insert(&input).await?;
        tracing::info!("Created book id={} title={:?}", book.id, book.title);
        Ok(book)
    }

    /// Get a book by ID, or NotFound.
    pub async fn get(&self, id: Uuid) -> AppResult<Book> {
        self.repository.books_get_by_id(id).await
    }

    /// Apply a partial update: only the supplied fields change, everything
    /// else is preserved; updated_at is re-stamped by the store.
    pub async fn update(&self, id: Uuid, input: UpdateBook) -> AppResult<Book> {
        let book = self.repository.books_merge_and_save(id, &input).await?;
        tracing::info!("Updated book id={}", book.id);
        Ok(book)
    }

    /// Hard-delete a book, or NotFound when no row was removed.
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.repository.books_delete(id).await?;
        tracing::info!("Deleted book id={}", id);
        Ok(())
    }

    /// List books, optionally filtered by category membership.
    ///
    /// An absent or empty filter means "all books", including books with no
    /// category. A non-empty filter is strict membership and therefore
    /// excludes uncategorized books.
    pub async fn get_all_filtered(
        &self,
        categories: Option<Vec<BookCategory>>,
    ) -> AppResult<Vec<Book>> {
        let filter = match categories {
            Some(list) if !list.is_empty() => Some(list),
            _ => None,
        };
        self.repository.books_list(filter.as_deref()).await
    }
}
