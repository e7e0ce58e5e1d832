pub mod resolvers;
pub mod types;

pub use resolvers::BookQuery;
pub use types::Book;
