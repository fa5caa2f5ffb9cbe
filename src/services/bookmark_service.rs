use thiserror::Error;
use tracing::{debug, info};

use crate::database::models::{Bookmark, CreateBookmark, EditBookmark};
use crate::database::{BookmarkRepository, DatabaseError};

#[derive(Debug, Error)]
pub enum BookmarkError {
    #[error("Bookmark {0} not found")]
    NotFound(i32),

    #[error(transparent)]
    Database(#[from] DatabaseError),
}

/// Owner-scoped bookmark operations.
///
/// A bookmark belonging to another user is reported exactly like a missing
/// one; callers never learn that the id exists.
#[derive(Clone, Debug)]
pub struct BookmarkService {
    bookmarks: BookmarkRepository,
}

impl BookmarkService {
    pub fn new(bookmarks: BookmarkRepository) -> Self {
        Self { bookmarks }
    }

    pub async fn list(&self, user_id: i32) -> Result<Vec<Bookmark>, BookmarkError> {
        Ok(self.bookmarks.list_for_owner(user_id).await?)
    }

    /// `None` when the id does not exist or is not owned by `user_id`
    pub async fn get_by_id(&self, user_id: i32, id: i32) -> Result<Option<Bookmark>, BookmarkError> {
        Ok(self.bookmarks.find_owned(user_id, id).await?)
    }

    pub async fn create(&self, user_id: i32, dto: &CreateBookmark) -> Result<Bookmark, BookmarkError> {
        let bookmark = self.bookmarks.insert(user_id, dto).await?;
        info!("User {} created bookmark {}", user_id, bookmark.id);
        Ok(bookmark)
    }

    pub async fn edit_by_id(
        &self,
        user_id: i32,
        id: i32,
        patch: &EditBookmark,
    ) -> Result<Bookmark, BookmarkError> {
        match self.bookmarks.update_owned(user_id, id, patch).await? {
            Some(bookmark) => Ok(bookmark),
            None => {
                debug!("User {} cannot edit bookmark {}", user_id, id);
                Err(BookmarkError::NotFound(id))
            }
        }
    }

    pub async fn delete_by_id(&self, user_id: i32, id: i32) -> Result<(), BookmarkError> {
        if self.bookmarks.delete_owned(user_id, id).await? {
            info!("User {} deleted bookmark {}", user_id, id);
            Ok(())
        } else {
            debug!("User {} cannot delete bookmark {}", user_id, id);
            Err(BookmarkError::NotFound(id))
        }
    }
}
