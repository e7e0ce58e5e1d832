pub mod types;

pub use types::HasRead;
