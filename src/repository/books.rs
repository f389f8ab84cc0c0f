//! Book domain methods on Repository

use chrono::Utc;
use uuid::Uuid;

use super::Repository;
use crate::{
    error::{AppError, AppResult},
    models::book::{Book, BookCategory, CreateBook, UpdateBook},
};

fn not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Book with ID {} not found", id))
}

impl Repository {
    /// List books, optionally restricted to a set of categories.
    ///
    /// With a filter set, membership is strict: rows whose category is NULL
    /// never match. Without a filter there is no predicate at all, so
    /// uncategorized books are included.
    pub async fn books_list(
        &self,
        categories: Option<&[BookCategory]>,
    ) -> AppResult<Vec<Book>> {
        let rows = sqlx::query_as::<_, Book>(
            r#"
            SELECT id, title, author, category, page_number, summary,
                   publication_date, stock, updated_at
            FROM books
            WHERE $1::book_category[] IS NULL OR category = ANY($1)
            ORDER BY title
            "#,
        )
        .bind(categories)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Get a book by ID
    pub async fn books_get_by_id(&self, id: Uuid) -> AppResult<Book> {
        sqlx::query_as::<_, Book>(
            r#"
            SELECT id, title, author, category, page_number, summary,
                   publication_date, stock, updated_at
            FROM books
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| not_found(id))
    }

    /// Insert a new book; the store assigns `id` and `updated_at`.
    pub async fn books_insert(&self, data: &CreateBook) -> AppResult<Book> {
        let row = sqlx::query_as::<_, Book>(
            r#"
            INSERT INTO books (title, author, category, page_number, summary,
                               publication_date, stock)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, title, author, category, page_number, summary,
                      publication_date, stock, updated_at
            "#,
        )
        .bind(&data.title)
        .bind(&data.author)
        .bind(data.category)
        .bind(data.page_number)
        .bind(&data.summary)
        .bind(data.publication_date)
        .bind(data.stock)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Merge the supplied fields onto an existing book and re-stamp
    /// `updated_at`. Omitted fields are left untouched.
    pub async fn books_merge_and_save(&self, id: Uuid, data: &UpdateBook) -> AppResult<Book> {
        let now = Utc::now();
        let mut sets = vec!["updated_at = $1".to_string()];
        let mut idx = 2;

        macro_rules! add_field {
            ($field:expr, $name:expr) => {
                if $field.is_some() {
                    sets.push(format!("{} = ${}", $name, idx));
                    idx += 1;
                }
            };
        }

        add_field!(data.title, "title");
        add_field!(data.author, "author");
        add_field!(data.category, "category");
        add_field!(data.page_number, "page_number");
        add_field!(data.summary, "summary");
        add_field!(data.publication_date, "publication_date");
        add_field!(data.stock, "stock");

        let query = format!(
            "UPDATE books SET {} WHERE id = ${} \
             RETURNING id, title, author, category, page_number, summary, \
                       publication_date, stock, updated_at",
            sets.join(", "),
            idx
        );

        let mut builder = sqlx::query_as::<_, Book>(&query).bind(now);

        macro_rules! bind_field {
            ($field:expr) => {
                if let Some(ref val) = $field {
                    builder = builder.bind(val);
                }
            };
        }

        bind_field!(data.title);
        bind_field!(data.author);
        bind_field!(data.category);
        bind_field!(data.page_number);
        bind_field!(data.summary);
        bind_field!(data.publication_date);
        bind_field!(data.stock);

        builder
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Delete a book; reports NotFound when no row was removed.
    pub async fn books_delete(&self, id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM books WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(not_found(id));
        }
        Ok(())
    }
}
