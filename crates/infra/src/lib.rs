pub mod db;
pub mod error;
pub mod memory;
pub mod models;
pub mod repos;
pub mod store;

pub use error::StoreError;
pub use memory::{Fixture, MemoryStore};
pub use store::{BookFilter, PgStore, Store};
