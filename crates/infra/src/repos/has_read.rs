use sqlx::{PgExecutor, Result as SqlxResult};

use crate::models::HasReadRow;

pub async fn list_by_user<'e>(
    executor: impl PgExecutor<'e>,
    user_id: &str,
) -> SqlxResult<Vec<HasReadRow>> {
    sqlx::query_as::<_, HasReadRow>(
        r#"
        SELECT "userId"::text AS "userId", "bookId"::text AS "bookId", rating
        FROM "hasRead"
        WHERE "userId"::text = $1
        "#,
    )
    .bind(user_id)
    .fetch_all(executor)
    .await
}

/// Mean rating of a user's reads, `None` when there is nothing to average.
pub async fn avg_rating_by_user<'e>(
    executor: impl PgExecutor<'e>,
    user_id: &str,
) -> SqlxResult<Option<f64>> {
    // AVG over an integer column is NUMERIC in Postgres
    sqlx::query_scalar::<_, Option<f64>>(
        r#"
        SELECT AVG(rating)::float8
        FROM "hasRead"
        WHERE "userId"::text = $1
        "#,
    )
    .bind(user_id)
    .fetch_one(executor)
    .await
}
