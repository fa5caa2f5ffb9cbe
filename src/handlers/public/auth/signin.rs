// handlers/public/auth/signin.rs - POST /auth/signin handler

use axum::extract::State;

use crate::middleware::{ApiResponse, ApiResult, ValidatedJson};
use crate::state::AppState;

use super::{Credentials, TokenResponse};

/// POST /auth/signin - Authenticate and receive a bearer token
///
/// Unknown email and wrong password both answer 401 "Credentials incorrect",
/// so the response does not reveal which accounts exist.
pub async fn signin(
    State(state): State<AppState>,
    ValidatedJson(credentials): ValidatedJson<Credentials>,
) -> ApiResult<TokenResponse> {
    let access_token = state
        .auth
        .signin(&credentials.email, &credentials.password)
        .await?;

    Ok(ApiResponse::success(TokenResponse { access_token }))
}
