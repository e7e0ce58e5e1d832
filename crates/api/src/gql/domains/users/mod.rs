pub mod resolvers;
pub mod types;

pub use resolvers::UserQuery;
pub use types::User;
