use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Row of the `user` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct UserRow {
    pub id: String,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}

impl UserRow {
    /// Only the exact, lowercase `admin` role counts.
    pub fn is_admin(&self) -> bool {
        self.role.as_deref() == Some("admin")
    }
}

/// Row of the `book` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[sqlx(rename_all = "camelCase")]
pub struct BookRow {
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub fiction: Option<bool>,
    #[serde(default)]
    pub published_year: Option<i32>,
}

/// Row of the `hasRead` join table: one user's rating of one book.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[sqlx(rename_all = "camelCase")]
pub struct HasReadRow {
    pub user_id: String,
    pub book_id: String,
    #[serde(default)]
    pub rating: Option<i32>,
}
