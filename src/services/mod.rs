pub mod auth_service;
pub mod bookmark_service;
pub mod user_service;

pub use auth_service::{AuthError, AuthService};
pub use bookmark_service::{BookmarkError, BookmarkService};
pub use user_service::{UserError, UserService};
