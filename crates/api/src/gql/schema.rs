use async_graphql::dataloader::DataLoader;
use async_graphql::{EmptyMutation, EmptySubscription, Schema};

use super::loaders::BookLoader;
use super::QueryRoot;
use crate::state::AppState;

pub type BookshelfSchema = Schema<QueryRoot, EmptyMutation, EmptySubscription>;

#[derive(Debug, Clone, Copy, Default)]
pub struct SchemaOptions {
    pub introspection: bool,
    /// Resolve `HasRead.book` through a `DataLoader` instead of one query per row.
    pub batch_loading: bool,
}

/// Build the GraphQL schema and inject shared state (AppState) into the context.
pub fn build_schema(state: AppState, options: SchemaOptions) -> BookshelfSchema {
    let mut builder = Schema::build(QueryRoot::default(), EmptyMutation, EmptySubscription);

    if options.batch_loading {
        let book_loader = DataLoader::new(BookLoader::new(state.store.clone()), tokio::spawn);
        builder = builder.data(book_loader);
    }

    // available in resolvers via ctx.data::<AppState>()
    builder = builder.data(state);

    if !options.introspection {
        builder = builder.disable_introspection();
    }

    builder.finish()
}

/// Schema definition language for the query surface. Needs no store.
pub fn sdl() -> String {
    Schema::build(QueryRoot::default(), EmptyMutation, EmptySubscription)
        .finish()
        .sdl()
}
