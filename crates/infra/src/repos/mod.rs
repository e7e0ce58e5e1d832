pub mod books;
pub mod has_read;
pub mod users;
