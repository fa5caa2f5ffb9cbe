use sqlx::PgPool;

use crate::database::manager::DatabaseError;
use crate::database::models::{Bookmark, CreateBookmark, EditBookmark, EditUser, User};

const USER_COLUMNS: &str = "id, email, hash, first_name, last_name, created_at, updated_at";
const BOOKMARK_COLUMNS: &str = "id, title, description, link, user_id, created_at, updated_at";

/// Typed access to the `users` table
#[derive(Clone, Debug)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a user; a taken email surfaces as `DatabaseError::UniqueViolation`
    pub async fn insert(&self, email: &str, hash: &str) -> Result<User, DatabaseError> {
        let sql = format!(
            "INSERT INTO users (email, hash) VALUES ($1, $2) RETURNING {}",
            USER_COLUMNS
        );
        let user = sqlx::query_as::<_, User>(&sql)
            .bind(email)
            .bind(hash)
            .fetch_one(&self.pool)
            .await?;
        Ok(user)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<User>, DatabaseError> {
        let sql = format!("SELECT {} FROM users WHERE id = $1", USER_COLUMNS);
        let user = sqlx::query_as::<_, User>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(user)
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, DatabaseError> {
        let sql = format!("SELECT {} FROM users WHERE email = $1", USER_COLUMNS);
        let user = sqlx::query_as::<_, User>(&sql)
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;
        Ok(user)
    }

    /// Apply the present fields of `patch`; returns `None` when the row is gone
    pub async fn update(&self, id: i32, patch: &EditUser) -> Result<Option<User>, DatabaseError> {
        let sql = format!(
            "UPDATE users SET \
                email = COALESCE($2, email), \
                first_name = COALESCE($3, first_name), \
                last_name = COALESCE($4, last_name), \
                updated_at = now() \
             WHERE id = $1 \
             RETURNING {}",
            USER_COLUMNS
        );
        let user = sqlx::query_as::<_, User>(&sql)
            .bind(id)
            .bind(patch.email.as_deref())
            .bind(patch.first_name.as_deref())
            .bind(patch.last_name.as_deref())
            .fetch_optional(&self.pool)
            .await?;
        Ok(user)
    }
}

/// Typed access to the `bookmarks` table.
///
/// Every single-row statement filters on both `id` and `user_id`, so a
/// bookmark owned by someone else is indistinguishable from a missing one.
#[derive(Clone, Debug)]
pub struct BookmarkRepository {
    pool: PgPool,
}

impl BookmarkRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list_for_owner(&self, user_id: i32) -> Result<Vec<Bookmark>, DatabaseError> {
        let sql = format!(
            "SELECT {} FROM bookmarks WHERE user_id = $1 ORDER BY id",
            BOOKMARK_COLUMNS
        );
        let rows = sqlx::query_as::<_, Bookmark>(&sql)
            .bind(user_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    pub async fn find_owned(&self, user_id: i32, id: i32) -> Result<Option<Bookmark>, DatabaseError> {
        let sql = format!(
            "SELECT {} FROM bookmarks WHERE id = $1 AND user_id = $2",
            BOOKMARK_COLUMNS
        );
        let row = sqlx::query_as::<_, Bookmark>(&sql)
            .bind(id)
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    pub async fn insert(&self, user_id: i32, dto: &CreateBookmark) -> Result<Bookmark, DatabaseError> {
        let sql = format!(
            "INSERT INTO bookmarks (title, link, description, user_id) \
             VALUES ($1, $2, $3, $4) RETURNING {}",
            BOOKMARK_COLUMNS
        );
        let row = sqlx::query_as::<_, Bookmark>(&sql)
            .bind(&dto.title)
            .bind(&dto.link)
            .bind(dto.description.as_deref())
            .bind(user_id)
            .fetch_one(&self.pool)
            .await?;
        Ok(row)
    }

    pub async fn update_owned(
        &self,
        user_id: i32,
        id: i32,
        patch: &EditBookmark,
    ) -> Result<Option<Bookmark>, DatabaseError> {
        let sql = format!(
            "UPDATE bookmarks SET \
                title = COALESCE($3, title), \
                link = COALESCE($4, link), \
                description = COALESCE($5, description), \
                updated_at = now() \
             WHERE id = $1 AND user_id = $2 \
             RETURNING {}",
            BOOKMARK_COLUMNS
        );
        let row = sqlx::query_as::<_, Bookmark>(&sql)
            .bind(id)
            .bind(user_id)
            .bind(patch.title.as_deref())
            .bind(patch.link.as_deref())
            .bind(patch.description.as_deref())
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    /// Returns whether a row was deleted
    pub async fn delete_owned(&self, user_id: i32, id: i32) -> Result<bool, DatabaseError> {
        let result = sqlx::query("DELETE FROM bookmarks WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
