//! Data models for the library

pub mod author;
pub mod book;
pub mod borrower;

// Re-export commonly used types
pub use author::Author;
pub use book::Book;
pub use borrower::{BorrowedBook, Borrower};
