// handlers/protected/bookmark.rs - /bookmark handlers
//
// All lookups are scoped to the caller. Another user's bookmark reads as
// `null` on GET and as 404 on PATCH / DELETE.

use axum::extract::State;

use crate::database::models::{Bookmark, CreateBookmark, EditBookmark};
use crate::middleware::{ApiResponse, ApiResult, AuthUserId, ValidatedJson};
use crate::state::AppState;

use super::IdParam;

/// GET /bookmark
pub async fn list(
    State(state): State<AppState>,
    AuthUserId(user_id): AuthUserId,
) -> ApiResult<Vec<Bookmark>> {
    let bookmarks = state.bookmarks.list(user_id).await?;
    Ok(ApiResponse::success(bookmarks))
}

/// GET /bookmark/:id - 200 with the bookmark, or 200 with `null` when the
/// caller owns no bookmark with that id
pub async fn get_by_id(
    State(state): State<AppState>,
    AuthUserId(user_id): AuthUserId,
    IdParam(id): IdParam,
) -> ApiResult<Option<Bookmark>> {
    let bookmark = state.bookmarks.get_by_id(user_id, id).await?;
    Ok(ApiResponse::success(bookmark))
}

/// POST /bookmark
pub async fn create(
    State(state): State<AppState>,
    AuthUserId(user_id): AuthUserId,
    ValidatedJson(dto): ValidatedJson<CreateBookmark>,
) -> ApiResult<Bookmark> {
    let bookmark = state.bookmarks.create(user_id, &dto).await?;
    Ok(ApiResponse::created(bookmark))
}

/// PATCH /bookmark/:id
pub async fn edit_by_id(
    State(state): State<AppState>,
    AuthUserId(user_id): AuthUserId,
    IdParam(id): IdParam,
    ValidatedJson(patch): ValidatedJson<EditBookmark>,
) -> ApiResult<Bookmark> {
    let bookmark = state.bookmarks.edit_by_id(user_id, id, &patch).await?;
    Ok(ApiResponse::success(bookmark))
}

/// DELETE /bookmark/:id
pub async fn delete_by_id(
    State(state): State<AppState>,
    AuthUserId(user_id): AuthUserId,
    IdParam(id): IdParam,
) -> ApiResult<()> {
    state.bookmarks.delete_by_id(user_id, id).await?;
    Ok(ApiResponse::no_content())
}
