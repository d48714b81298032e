//! Author model and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Author row from the `authors` table
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    pub id: i32,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create author request
///
/// `name` stays optional so a missing value reaches the database and is
/// rejected by its NOT NULL constraint.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct CreateAuthor {
    pub name: Option<String>,
}

/// Update author request (absent fields are left untouched)
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateAuthor {
    pub name: Option<String>,
}
