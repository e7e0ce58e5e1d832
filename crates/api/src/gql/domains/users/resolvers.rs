use async_graphql::{Context, Object, Result};

use crate::gql::error::GqlError;
use crate::state::AppState;

use super::types::User;

#[derive(Default)]
pub struct UserQuery;

#[Object]
impl UserQuery {
    async fn users(&self, ctx: &Context<'_>) -> Result<Option<Vec<Option<User>>>> {
        let state = ctx.data::<AppState>()?;
        let rows = state.store.list_users().await.map_err(GqlError::from)?;
        Ok(Some(rows.into_iter().map(|r| Some(User::from(r))).collect()))
    }
}
