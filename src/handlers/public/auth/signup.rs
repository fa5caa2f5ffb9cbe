// handlers/public/auth/signup.rs - POST /auth/signup handler

use axum::extract::State;

use crate::middleware::{ApiResponse, ApiResult, ValidatedJson};
use crate::state::AppState;

use super::{Credentials, TokenResponse};

/// POST /auth/signup - Create an account and receive a bearer token
///
/// Expected Input:
/// ```json
/// { "email": "user@example.com", "password": "secret" }
/// ```
///
/// Expected Output (200):
/// ```json
/// { "access_token": "eyJhbGciOiJIUzI1NiI..." }
/// ```
///
/// Errors: 400 on a missing/malformed field, 409 when the email is taken.
pub async fn signup(
    State(state): State<AppState>,
    ValidatedJson(credentials): ValidatedJson<Credentials>,
) -> ApiResult<TokenResponse> {
    let access_token = state
        .auth
        .signup(&credentials.email, &credentials.password)
        .await?;

    Ok(ApiResponse::success(TokenResponse { access_token }))
}
