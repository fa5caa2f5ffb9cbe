pub mod manager;
pub mod models;
pub mod repository;

pub use manager::{Database, DatabaseError};
pub use repository::{BookmarkRepository, UserRepository};
