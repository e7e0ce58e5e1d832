//! In-process store backed by a fixture loaded once at startup.

use std::path::Path;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::StoreResult;
use crate::models::{BookRow, HasReadRow, UserRow};
use crate::store::{BookFilter, Store};

/// Catalog contents in the shape of the three tables.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fixture {
    #[serde(default)]
    pub users: Vec<UserRow>,
    #[serde(default)]
    pub books: Vec<BookRow>,
    #[serde(default)]
    pub has_read: Vec<HasReadRow>,
}

impl Fixture {
    pub fn from_json(json: &str) -> StoreResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> StoreResult<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw)
    }
}

/// Read-only store over a [`Fixture`]. Rows come back in fixture order.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    fixture: Fixture,
}

impl MemoryStore {
    pub fn new(fixture: Fixture) -> Self {
        Self { fixture }
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn list_users(&self) -> StoreResult<Vec<UserRow>> {
        Ok(self.fixture.users.clone())
    }

    async fn list_books(&self, filter: BookFilter) -> StoreResult<Vec<BookRow>> {
        Ok(self
            .fixture
            .books
            .iter()
            .filter(|book| filter.fiction.is_none_or(|fiction| book.fiction == fiction))
            .cloned()
            .collect())
    }

    async fn get_book(&self, id: &str) -> StoreResult<Option<BookRow>> {
        Ok(self.fixture.books.iter().find(|book| book.id == id).cloned())
    }

    async fn get_books(&self, ids: &[String]) -> StoreResult<Vec<BookRow>> {
        Ok(self
            .fixture
            .books
            .iter()
            .filter(|book| ids.contains(&book.id))
            .cloned()
            .collect())
    }

    async fn list_has_read_for_user(&self, user_id: &str) -> StoreResult<Vec<HasReadRow>> {
        Ok(self
            .fixture
            .has_read
            .iter()
            .filter(|read| read.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn avg_rating_for_user(&self, user_id: &str) -> StoreResult<Option<f64>> {
        // Same as SQL AVG: null ratings are skipped, no rows means no average
        let ratings: Vec<i32> = self
            .fixture
            .has_read
            .iter()
            .filter(|read| read.user_id == user_id)
            .filter_map(|read| read.rating)
            .collect();

        if ratings.is_empty() {
            return Ok(None);
        }

        let sum: f64 = ratings.iter().map(|&r| f64::from(r)).sum();
        Ok(Some(sum / ratings.len() as f64))
    }

    async fn ping(&self) -> StoreResult<()> {
        Ok(())
    }
}
