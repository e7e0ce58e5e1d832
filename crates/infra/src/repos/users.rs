use sqlx::{PgExecutor, Result as SqlxResult};

use crate::models::UserRow;

pub async fn list<'e>(executor: impl PgExecutor<'e>) -> SqlxResult<Vec<UserRow>> {
    sqlx::query_as::<_, UserRow>(
        r#"
        SELECT id::text AS id, username, role
        FROM "user"
        "#,
    )
    .fetch_all(executor)
    .await
}
