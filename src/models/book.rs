//! Book model and request/response shapes.
//!
//! The JSON field names are camelCase to match the public API contract;
//! persistence uses snake_case columns and the `book_category` Postgres
//! enum for the category.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::postgres::{PgHasArrayType, PgTypeInfo};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

/// Closed set of allowed book categories.
///
/// Wire labels and database labels are identical (SCREAMING_SNAKE_CASE);
/// anything outside this set is rejected at deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "book_category", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookCategory {
    Fiction,
    NonFiction,
    ScienceFiction,
    Fantasy,
    Biography,
    History,
    SelfHelp,
    Other,
}

// The Type derive does not cover array binds (`category = ANY($1)`), so the
// array type has to be named explicitly.
impl PgHasArrayType for BookCategory {
    fn array_type_info() -> PgTypeInfo {
        PgTypeInfo::with_name("_book_category")
    }
}

impl BookCategory {
    /// All defined category values, in declaration order.
    pub const ALL: [BookCategory; 8] = [
        BookCategory::Fiction,
        BookCategory::NonFiction,
        BookCategory::ScienceFiction,
        BookCategory::Fantasy,
        BookCategory::Biography,
        BookCategory::History,
        BookCategory::SelfHelp,
        BookCategory::Other,
    ];
}

/// Full book record (DB + API response shape).
///
/// `id` and `updated_at` are owned by the store: the id is assigned on
/// insert and immutable, `updated_at` is re-stamped on every write.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: Uuid,
    pub title: String,
    // Could become a foreign key to a dedicated authors table
    pub author: String,
    pub category: Option<BookCategory>,
    pub page_number: Option<i32>,
    pub summary: String,
    pub publication_date: Option<NaiveDate>,
    // Number of copies owned (not available, loan tracking is external)
    pub stock: i32,
    pub updated_at: DateTime<Utc>,
}

/// Creation payload: every book field except `id` and `updatedAt`.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateBook {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: String,
    #[validate(length(min = 1, message = "author must not be empty"))]
    pub author: String,
    pub category: Option<BookCategory>,
    #[validate(range(min = 0, message = "pageNumber must not be negative"))]
    pub page_number: Option<i32>,
    #[serde(default)]
    pub summary: String,
    pub publication_date: Option<NaiveDate>,
    #[validate(range(min = 0, message = "stock must not be negative"))]
    pub stock: i32,
}

/// Partial update payload: omitted fields are left untouched.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBook {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: Option<String>,
    #[validate(length(min = 1, message = "author must not be empty"))]
    pub author: Option<String>,
    pub category: Option<BookCategory>,
    #[validate(range(min = 0, message = "pageNumber must not be negative"))]
    pub page_number: Option<i32>,
    pub summary: Option<String>,
    pub publication_date: Option<NaiveDate>,
    #[validate(range(min = 0, message = "stock must not be negative"))]
    pub stock: Option<i32>,
}

/// Query parameters for listing books.
///
/// `categories` is repeatable (`?categories=FICTION&categories=FANTASY`);
/// a single bare value arrives as a one-element list.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct BookListQuery {
    /// Categories to filter by (repeatable); absent means all books
    pub categories: Option<Vec<BookCategory>>,
}
