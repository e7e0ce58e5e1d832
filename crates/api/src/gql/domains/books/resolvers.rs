use async_graphql::{Context, MaybeUndefined, Object, Result, ID};
use infra::BookFilter;

use crate::gql::error::GqlError;
use crate::state::AppState;

use super::types::Book;

#[derive(Default)]
pub struct BookQuery;

#[Object]
impl BookQuery {
    /// All books. Passing `fiction` (true, false or null) filters on that column;
    /// leaving it out returns every book.
    async fn books(
        &self,
        ctx: &Context<'_>,
        fiction: MaybeUndefined<bool>,
    ) -> Result<Option<Vec<Option<Book>>>> {
        let state = ctx.data::<AppState>()?;

        let filter = BookFilter {
            fiction: match fiction {
                MaybeUndefined::Undefined => None,
                MaybeUndefined::Null => Some(None),
                MaybeUndefined::Value(fiction) => Some(Some(fiction)),
            },
        };

        let rows = state
            .store
            .list_books(filter)
            .await
            .map_err(GqlError::from)?;
        Ok(Some(rows.into_iter().map(|r| Some(Book::from(r))).collect()))
    }

    /// Book by id, or null when no book has that id.
    async fn book(&self, ctx: &Context<'_>, id: ID) -> Result<Option<Book>> {
        let state = ctx.data::<AppState>()?;
        let row = state
            .store
            .get_book(id.as_str())
            .await
            .map_err(GqlError::from)?;
        Ok(row.map(Book::from))
    }
}
