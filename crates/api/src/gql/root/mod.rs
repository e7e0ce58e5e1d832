pub mod query_root;

pub use query_root::QueryRoot;
