//! Borrower model and the borrower/book junction

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Borrower row from the `borrowers` table
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Borrower {
    pub id: i32,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create borrower request
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct CreateBorrower {
    pub name: Option<String>,
}

/// Junction row linking a borrower to a book (N:M relationship).
///
/// A pair is stored at most once; nothing prevents a book from being linked
/// to several borrowers.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BorrowedBook {
    pub borrower_id: i32,
    pub book_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
