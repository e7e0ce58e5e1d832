use async_graphql::{SimpleObject, ID};
use infra::models::BookRow;

/// Plain projection of a `book` row; no field reaches back to the store.
#[derive(SimpleObject, Clone, Debug)]
pub struct Book {
    pub id: Option<ID>,
    pub title: Option<String>,
    pub author: Option<String>,
    pub fiction: Option<bool>,
    pub published_year: Option<i32>,
}

impl From<BookRow> for Book {
    fn from(row: BookRow) -> Self {
        Self {
            id: Some(row.id.into()),
            title: row.title,
            author: row.author,
            fiction: row.fiction,
            published_year: row.published_year,
        }
    }
}
