use std::sync::Arc;

use infra::{db, Fixture, MemoryStore, PgStore, Store};

use crate::config::StoreSource;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn Store>,
}

impl AppState {
    pub fn new(store: impl Store + 'static) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    /// Open the store selected by configuration.
    pub async fn connect(source: &StoreSource) -> anyhow::Result<Self> {
        match source {
            StoreSource::Postgres {
                url,
                max_connections,
            } => {
                let pool = db::connect(url, *max_connections).await?;
                tracing::info!(
                    "Connected to Postgres with max {} connections",
                    max_connections
                );
                Ok(Self::new(PgStore::new(pool)))
            }
            StoreSource::Fixture(path) => {
                let fixture = Fixture::from_path(path)?;
                tracing::info!(
                    path = %path.display(),
                    users = fixture.users.len(),
                    books = fixture.books.len(),
                    "Loaded in-memory fixture"
                );
                Ok(Self::new(MemoryStore::new(fixture)))
            }
        }
    }
}
