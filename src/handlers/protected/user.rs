// handlers/protected/user.rs - /user handlers

use axum::extract::State;

use crate::database::models::{EditUser, User};
use crate::middleware::{ApiResponse, ApiResult, AuthUser, AuthUserId, ValidatedJson};
use crate::state::AppState;

/// GET /user/me - the caller's own record, without the password hash
pub async fn get_me(AuthUser(user): AuthUser) -> ApiResult<User> {
    Ok(ApiResponse::success(user))
}

/// PATCH /user - partial edit of firstName / lastName / email
pub async fn edit_user(
    State(state): State<AppState>,
    AuthUserId(user_id): AuthUserId,
    ValidatedJson(patch): ValidatedJson<EditUser>,
) -> ApiResult<User> {
    let user = state.users.edit_user(user_id, &patch).await?;
    Ok(ApiResponse::success(user))
}
