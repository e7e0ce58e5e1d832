use std::{collections::HashMap, future::Future, sync::Arc};

use async_graphql::dataloader::Loader;
use infra::{models::BookRow, Store, StoreError};

// BookLoader - batch load books by ID for HasRead.book
#[derive(Clone)]
pub struct BookLoader {
    store: Arc<dyn Store>,
}

impl BookLoader {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }
}

impl Loader<String> for BookLoader {
    type Value = BookRow;
    type Error = Arc<StoreError>;

    fn load(
        &self,
        keys: &[String],
    ) -> impl Future<Output = std::result::Result<HashMap<String, Self::Value>, Self::Error>> + Send
    {
        let store = self.store.clone();
        let ids: Vec<String> = keys.to_vec();

        async move {
            if ids.is_empty() {
                return Ok(HashMap::new());
            }

            let rows = store.get_books(&ids).await.map_err(Arc::new)?;

            // Keep the first row per id, like the unbatched lookup
            let mut by_id = HashMap::with_capacity(rows.len());
            for row in rows {
                by_id.entry(row.id.clone()).or_insert(row);
            }
            Ok(by_id)
        }
    }
}
