use async_graphql::{ComplexObject, Context, Result, SimpleObject, ID};
use infra::models::UserRow;

use crate::gql::domains::reading::HasRead;
use crate::gql::error::GqlError;
use crate::state::AppState;

#[derive(SimpleObject, Clone, Debug)]
#[graphql(complex)]
pub struct User {
    #[graphql(skip)]
    pub key: String,
    pub username: Option<String>,
    /// True only for the exact role `admin`.
    pub is_admin: Option<bool>,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        Self {
            is_admin: Some(row.is_admin()),
            key: row.id,
            username: row.username,
        }
    }
}

#[ComplexObject]
impl User {
    async fn id(&self) -> Option<ID> {
        Some(self.key.clone().into())
    }

    /// Every book this user has rated, in store order.
    async fn books_read(&self, ctx: &Context<'_>) -> Result<Option<Vec<Option<HasRead>>>> {
        let state = ctx.data::<AppState>()?;
        let rows = state
            .store
            .list_has_read_for_user(&self.key)
            .await
            .map_err(GqlError::from)?;
        Ok(Some(rows.into_iter().map(|r| Some(HasRead::from(r))).collect()))
    }

    /// Mean rating over `booksRead`; null when the user has no ratings.
    async fn avg_rating(&self, ctx: &Context<'_>) -> Result<Option<f64>> {
        let state = ctx.data::<AppState>()?;
        let avg = state
            .store
            .avg_rating_for_user(&self.key)
            .await
            .map_err(GqlError::from)?;
        Ok(avg)
    }
}
