use sqlx::{PgExecutor, Postgres, QueryBuilder, Result as SqlxResult};

use crate::models::BookRow;

// Keys are opaque: read and compared as text whatever the column type
const SELECT_BOOKS: &str =
    r#"SELECT id::text AS id, title, author, fiction, "publishedYear" FROM book"#;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BookFilter {
    /// `None` skips the filter, `Some(None)` matches `fiction IS NULL`.
    pub fiction: Option<Option<bool>>,
}

pub async fn list<'e>(
    executor: impl PgExecutor<'e>,
    filter: BookFilter,
) -> SqlxResult<Vec<BookRow>> {
    let mut query = QueryBuilder::<Postgres>::new(SELECT_BOOKS);

    match filter.fiction {
        None => {}
        Some(None) => {
            query.push(" WHERE fiction IS NULL");
        }
        Some(Some(fiction)) => {
            query.push(" WHERE fiction = ");
            query.push_bind(fiction);
        }
    }

    query.build_query_as::<BookRow>().fetch_all(executor).await
}

pub async fn get_by_id<'e>(executor: impl PgExecutor<'e>, id: &str) -> SqlxResult<Option<BookRow>> {
    sqlx::query_as::<_, BookRow>(&format!("{SELECT_BOOKS} WHERE id::text = $1 LIMIT 1"))
        .bind(id)
        .fetch_optional(executor)
        .await
}

pub async fn list_by_ids<'e>(
    executor: impl PgExecutor<'e>,
    ids: &[String],
) -> SqlxResult<Vec<BookRow>> {
    sqlx::query_as::<_, BookRow>(&format!("{SELECT_BOOKS} WHERE id::text = ANY($1::text[])"))
        .bind(ids)
        .fetch_all(executor)
        .await
}
