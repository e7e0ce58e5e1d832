use std::sync::Arc;

use infra::StoreError;

/// Unified error type for GraphQL resolvers.
///
/// async-graphql has a blanket `impl<T: Display + Send + Sync + 'static> From<T> for Error`,
/// so resolvers convert with `.map_err(GqlError::from)?`.
///
/// `From<StoreError>` logs the store detail and shows a sanitized message to clients.
#[derive(Debug)]
pub enum GqlError {
    Store(Arc<StoreError>),
}

impl std::fmt::Display for GqlError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GqlError::Store(e) => {
                // Log the real error server-side; return a generic message to clients
                tracing::error!("Database error: {e}");
                write!(f, "Internal database error")
            }
        }
    }
}

impl std::error::Error for GqlError {}

impl From<StoreError> for GqlError {
    fn from(e: StoreError) -> Self {
        GqlError::Store(Arc::new(e))
    }
}

/// Errors coming back from a `DataLoader` are shared between waiters.
impl From<Arc<StoreError>> for GqlError {
    fn from(e: Arc<StoreError>) -> Self {
        GqlError::Store(e)
    }
}
