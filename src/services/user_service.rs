use thiserror::Error;
use tracing::info;

use crate::database::models::{EditUser, User};
use crate::database::{DatabaseError, UserRepository};

#[derive(Debug, Error)]
pub enum UserError {
    #[error("Email already registered")]
    EmailTaken,

    #[error("User {0} not found")]
    NotFound(i32),

    #[error(transparent)]
    Database(DatabaseError),
}

impl From<DatabaseError> for UserError {
    fn from(err: DatabaseError) -> Self {
        match err {
            DatabaseError::UniqueViolation(_) => UserError::EmailTaken,
            other => UserError::Database(other),
        }
    }
}

#[derive(Clone, Debug)]
pub struct UserService {
    users: UserRepository,
}

impl UserService {
    pub fn new(users: UserRepository) -> Self {
        Self { users }
    }

    /// Resolve a user by id (used by the auth guard)
    pub async fn find(&self, user_id: i32) -> Result<Option<User>, UserError> {
        Ok(self.users.find_by_id(user_id).await?)
    }

    /// Apply a partial edit to the caller's own row
    pub async fn edit_user(&self, user_id: i32, patch: &EditUser) -> Result<User, UserError> {
        if patch.is_empty() {
            return self.users.find_by_id(user_id).await?.ok_or(UserError::NotFound(user_id));
        }

        let user = self
            .users
            .update(user_id, patch)
            .await?
            .ok_or(UserError::NotFound(user_id))?;

        info!("User {} updated profile", user.id);
        Ok(user)
    }
}
