// handlers/protected/mod.rs - Protected handlers (bearer token required)
//
// Every route in this tier sits behind `middleware::require_auth`, which
// resolves the caller before the handler runs.

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

use crate::error::ApiError;

pub mod bookmark;
pub mod user;

/// Integer `:id` path segment; anything else is a 400
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdParam(pub i32);

#[async_trait]
impl<S> FromRequestParts<S> for IdParam
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::bad_request(e.body_text()))?;

        raw.parse::<i32>()
            .map(IdParam)
            .map_err(|_| ApiError::bad_request("Validation failed (numeric string is expected)"))
    }
}
