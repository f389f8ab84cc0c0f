//! Data models for the Libris catalog

pub mod book;

pub use book::{Book, BookCategory, BookListQuery, CreateBook, UpdateBook};
