//! Borrowers repository, including the `borrowed_books` junction

use async_trait::async_trait;
use sqlx::{Pool, Postgres};

use crate::{
    error::AppResult,
    models::borrower::{BorrowedBook, Borrower, CreateBorrower},
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BorrowersRepository: Send + Sync {
    async fn create(&self, data: &CreateBorrower) -> AppResult<Borrower>;

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Borrower>>;

    /// Link a book to a borrower. Returns `None` when the pair already exists.
    async fn add_book(&self, borrower_id: i32, book_id: i32) -> AppResult<Option<BorrowedBook>>;

    /// Unlink a book from a borrower. Returns the number of junction rows removed.
    async fn remove_book(&self, borrower_id: i32, book_id: i32) -> AppResult<u64>;
}

#[derive(Clone)]
pub struct PgBorrowersRepository {
    pool: Pool<Postgres>,
}

impl PgBorrowersRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BorrowersRepository for PgBorrowersRepository {
    async fn create(&self, data: &CreateBorrower) -> AppResult<Borrower> {
        let row = sqlx::query_as::<_, Borrower>(
            "INSERT INTO borrowers (name) VALUES ($1) RETURNING *",
        )
        .bind(&data.name)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Borrower>> {
        let row = sqlx::query_as::<_, Borrower>("SELECT * FROM borrowers WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn add_book(&self, borrower_id: i32, book_id: i32) -> AppResult<Option<BorrowedBook>> {
        let row = sqlx::query_as::<_, BorrowedBook>(
            r#"
            INSERT INTO borrowed_books (borrower_id, book_id)
            VALUES ($1, $2)
            ON CONFLICT (borrower_id, book_id) DO NOTHING
            RETURNING *
            "#,
        )
        .bind(borrower_id)
        .bind(book_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn remove_book(&self, borrower_id: i32, book_id: i32) -> AppResult<u64> {
        let result = sqlx::query(
            "DELETE FROM borrowed_books WHERE borrower_id = $1 AND book_id = $2",
        )
        .bind(borrower_id)
        .bind(book_id)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected())
    }
}
