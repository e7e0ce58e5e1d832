use async_trait::async_trait;

use crate::db::Db;
use crate::error::StoreResult;
use crate::models::{BookRow, HasReadRow, UserRow};
use crate::repos::{books, has_read, users};

pub use crate::repos::books::BookFilter;

/// Read access to the reading catalog.
///
/// Every method is a single round trip; callers that need related rows issue
/// one call per parent row.
#[async_trait]
pub trait Store: Send + Sync {
    async fn list_users(&self) -> StoreResult<Vec<UserRow>>;

    async fn list_books(&self, filter: BookFilter) -> StoreResult<Vec<BookRow>>;

    /// First book with the given id, if any.
    async fn get_book(&self, id: &str) -> StoreResult<Option<BookRow>>;

    /// Books whose id is in `ids`, in no particular order. Unknown ids are skipped.
    async fn get_books(&self, ids: &[String]) -> StoreResult<Vec<BookRow>>;

    async fn list_has_read_for_user(&self, user_id: &str) -> StoreResult<Vec<HasReadRow>>;

    async fn avg_rating_for_user(&self, user_id: &str) -> StoreResult<Option<f64>>;

    async fn ping(&self) -> StoreResult<()>;
}

/// Postgres-backed store.
#[derive(Clone)]
pub struct PgStore {
    db: Db,
}

impl PgStore {
    pub fn new(db: Db) -> Self {
        Self { db }
    }

    pub fn pool(&self) -> &Db {
        &self.db
    }
}

#[async_trait]
impl Store for PgStore {
    async fn list_users(&self) -> StoreResult<Vec<UserRow>> {
        tracing::debug!("select all users");
        Ok(users::list(&self.db).await?)
    }

    async fn list_books(&self, filter: BookFilter) -> StoreResult<Vec<BookRow>> {
        tracing::debug!(?filter, "select books");
        Ok(books::list(&self.db, filter).await?)
    }

    async fn get_book(&self, id: &str) -> StoreResult<Option<BookRow>> {
        tracing::debug!(book_id = id, "select first book");
        Ok(books::get_by_id(&self.db, id).await?)
    }

    async fn get_books(&self, ids: &[String]) -> StoreResult<Vec<BookRow>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        tracing::debug!(count = ids.len(), "select books by id");
        Ok(books::list_by_ids(&self.db, ids).await?)
    }

    async fn list_has_read_for_user(&self, user_id: &str) -> StoreResult<Vec<HasReadRow>> {
        tracing::debug!(user_id, "select reads for user");
        Ok(has_read::list_by_user(&self.db, user_id).await?)
    }

    async fn avg_rating_for_user(&self, user_id: &str) -> StoreResult<Option<f64>> {
        tracing::debug!(user_id, "average rating for user");
        Ok(has_read::avg_rating_by_user(&self.db, user_id).await?)
    }

    async fn ping(&self) -> StoreResult<()> {
        let _one: i32 = sqlx::query_scalar("SELECT 1").fetch_one(&self.db).await?;
        Ok(())
    }
}
