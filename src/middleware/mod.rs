pub mod auth;
pub mod response;
pub mod validated_json;

pub use auth::{require_auth, AuthUser, AuthUserId};
pub use response::{ApiResponse, ApiResult};
pub use validated_json::ValidatedJson;
