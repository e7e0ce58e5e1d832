// Each domain contains: mod.rs, resolvers.rs (query object), types.rs (GraphQL objects)

pub mod books;
pub mod reading;
pub mod users;
