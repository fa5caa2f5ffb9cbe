pub mod bookmark;
pub mod user;

pub use bookmark::{Bookmark, CreateBookmark, EditBookmark};
pub use user::{EditUser, User};
