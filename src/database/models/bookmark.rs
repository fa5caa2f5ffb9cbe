use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Row of the `bookmarks` table
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Bookmark {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub link: String,
    pub user_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct CreateBookmark {
    #[validate(length(min = 1, message = "title should not be empty"))]
    pub title: String,
    #[validate(url(message = "link must be a URL"))]
    pub link: String,
    pub description: Option<String>,
}

/// Partial bookmark update. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct EditBookmark {
    #[validate(length(min = 1, message = "title should not be empty"))]
    pub title: Option<String>,
    #[validate(url(message = "link must be a URL"))]
    pub link: Option<String>,
    pub description: Option<String>,
}
