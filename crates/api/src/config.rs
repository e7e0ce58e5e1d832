use std::env;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};

use crate::gql::SchemaOptions;

/// Where the catalog is read from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StoreSource {
    Postgres { url: String, max_connections: u32 },
    Fixture(PathBuf),
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub store: StoreSource,
    pub port: u16,
    pub allowed_origins: Vec<String>,
    pub request_timeout_secs: u64,
    pub gql_introspection: bool,
    pub batch_loading: bool,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the config from any key lookup; `from_env` passes `std::env::var`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let flag = |key: &str| {
            lookup(key)
                .map(|v| v.eq_ignore_ascii_case("true"))
                .unwrap_or(false)
        };

        let store = match (lookup("DATABASE_URL"), lookup("FIXTURE_PATH")) {
            (Some(url), _) => StoreSource::Postgres {
                url,
                max_connections: lookup("DATABASE_MAX_CONNECTIONS")
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(30),
            },
            (None, Some(path)) => StoreSource::Fixture(PathBuf::from(path)),
            (None, None) => bail!("either DATABASE_URL or FIXTURE_PATH must be set"),
        };

        let port = lookup("PORT")
            .unwrap_or_else(|| "8080".into())
            .parse()
            .context("PORT must be a valid port number")?;

        let allowed_origins = lookup("ALLOWED_ORIGINS")
            .unwrap_or_else(|| "http://localhost:3000,http://localhost:3001".to_string())
            .split(',')
            .map(|o| o.trim().to_string())
            .filter(|o| !o.is_empty())
            .collect();

        Ok(Self {
            store,
            port,
            allowed_origins,
            request_timeout_secs: lookup("REQUEST_TIMEOUT_SECS")
                .and_then(|s| s.parse().ok())
                .unwrap_or(30),
            gql_introspection: flag("GQL_INTROSPECTION"),
            batch_loading: flag("BATCH_LOADING"),
        })
    }

    pub fn schema_options(&self) -> SchemaOptions {
        SchemaOptions {
            introspection: self.gql_introspection,
            batch_loading: self.batch_loading,
        }
    }
}
