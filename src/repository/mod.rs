//! Repository layer for database operations
//!
//! Each entity has an async trait describing its data access and a Postgres
//! implementation. [`Repository`] bundles the handles so they can be injected
//! into the services, and swapped for mocks in tests.

pub mod authors;
pub mod books;
pub mod borrowers;
pub mod health;

use std::sync::Arc;

use sqlx::{Pool, Postgres};

pub use authors::{AuthorsRepository, PgAuthorsRepository};
pub use books::{BooksRepository, PgBooksRepository};
pub use borrowers::{BorrowersRepository, PgBorrowersRepository};
pub use health::{HealthRepository, PgHealthRepository};

/// Data-access handles shared by all services
#[derive(Clone)]
pub struct Repository {
    pub authors: Arc<dyn AuthorsRepository>,
    pub books: Arc<dyn BooksRepository>,
    pub borrowers: Arc<dyn BorrowersRepository>,
    pub health: Arc<dyn HealthRepository>,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            authors: Arc::new(PgAuthorsRepository::new(pool.clone())),
            books: Arc::new(PgBooksRepository::new(pool.clone())),
            borrowers: Arc::new(PgBorrowersRepository::new(pool.clone())),
            health: Arc::new(PgHealthRepository::new(pool)),
        }
    }
}
