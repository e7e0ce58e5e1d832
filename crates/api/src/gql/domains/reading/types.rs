use async_graphql::{dataloader::DataLoader, ComplexObject, Context, Result, SimpleObject};
use infra::models::HasReadRow;

use crate::gql::domains::books::Book;
use crate::gql::error::GqlError;
use crate::gql::loaders::BookLoader;
use crate::state::AppState;

/// A user's rating of one book.
#[derive(SimpleObject, Clone, Debug)]
#[graphql(complex)]
pub struct HasRead {
    pub rating: Option<i32>,
    #[graphql(skip)]
    pub book_id: String,
}

impl From<HasReadRow> for HasRead {
    fn from(row: HasReadRow) -> Self {
        Self {
            rating: row.rating,
            book_id: row.book_id,
        }
    }
}

#[ComplexObject]
impl HasRead {
    /// The rated book; null when `bookId` matches no book.
    async fn book(&self, ctx: &Context<'_>) -> Result<Option<Book>> {
        let row = match ctx.data_opt::<DataLoader<BookLoader>>() {
            Some(loader) => loader
                .load_one(self.book_id.clone())
                .await
                .map_err(GqlError::from)?,
            None => {
                let state = ctx.data::<AppState>()?;
                state
                    .store
                    .get_book(&self.book_id)
                    .await
                    .map_err(GqlError::from)?
            }
        };

        Ok(row.map(Book::from))
    }
}
