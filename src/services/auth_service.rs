use thiserror::Error;
use tracing::{info, warn};

use crate::auth::{JwtError, TokenService};
use crate::database::{DatabaseError, UserRepository};

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Email already registered")]
    EmailTaken,

    #[error("Credentials incorrect")]
    InvalidCredentials,

    #[error("Password hashing failed: {0}")]
    Hash(#[from] bcrypt::BcryptError),

    #[error("Password hashing task failed: {0}")]
    Task(#[from] tokio::task::JoinError),

    #[error(transparent)]
    Token(#[from] JwtError),

    #[error(transparent)]
    Database(DatabaseError),
}

impl From<DatabaseError> for AuthError {
    fn from(err: DatabaseError) -> Self {
        match err {
            DatabaseError::UniqueViolation(_) => AuthError::EmailTaken,
            other => AuthError::Database(other),
        }
    }
}

/// Signup / signin over the users table
#[derive(Clone, Debug)]
pub struct AuthService {
    users: UserRepository,
    tokens: TokenService,
    bcrypt_cost: u32,
}

impl AuthService {
    pub fn new(users: UserRepository, tokens: TokenService, bcrypt_cost: u32) -> Self {
        Self {
            users,
            tokens,
            bcrypt_cost,
        }
    }

    /// Create an account and return a token for it
    pub async fn signup(&self, email: &str, password: &str) -> Result<String, AuthError> {
        let hash = hash_password(password.to_string(), self.bcrypt_cost).await?;
        let user = self.users.insert(email, &hash).await?;

        info!("User {} signed up ({})", user.id, user.email);
        self.sign_token(user.id, &user.email)
    }

    /// Verify credentials and return a fresh token
    pub async fn signin(&self, email: &str, password: &str) -> Result<String, AuthError> {
        let Some(user) = self.users.find_by_email(email).await? else {
            warn!("Signin rejected: no user for {}", email);
            return Err(AuthError::InvalidCredentials);
        };

        if !verify_password(password.to_string(), user.hash.clone()).await? {
            warn!("Signin rejected: wrong password for user {}", user.id);
            return Err(AuthError::InvalidCredentials);
        }

        info!("User {} signed in", user.id);
        self.sign_token(user.id, &user.email)
    }

    pub fn sign_token(&self, user_id: i32, email: &str) -> Result<String, AuthError> {
        Ok(self.tokens.sign(user_id, email)?)
    }
}

// bcrypt is CPU bound; keep it off the async workers.
async fn hash_password(password: String, cost: u32) -> Result<String, AuthError> {
    let hash = tokio::task::spawn_blocking(move || bcrypt::hash(password, cost)).await??;
    Ok(hash)
}

async fn verify_password(password: String, hash: String) -> Result<bool, AuthError> {
    let valid = tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash)).await??;
    Ok(valid)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn hashed_password_verifies() {
        let hash = hash_password("123".to_string(), 4).await.unwrap();
        assert_ne!(hash, "123");
        assert!(verify_password("123".to_string(), hash.clone()).await.unwrap());
        assert!(!verify_password("1234".to_string(), hash).await.unwrap());
    }

    #[test]
    fn unique_violation_means_email_taken() {
        let err = AuthError::from(DatabaseError::UniqueViolation("users_email_key".to_string()));
        assert!(matches!(err, AuthError::EmailTaken));
    }
}
