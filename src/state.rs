use crate::auth::{JwtError, TokenService};
use crate::config::AppConfig;
use crate::database::{BookmarkRepository, Database, UserRepository};
use crate::services::{AuthService, BookmarkService, UserService};

/// Everything a handler needs, built once at startup and cloned per request
#[derive(Clone, Debug)]
pub struct AppState {
    pub db: Database,
    pub tokens: TokenService,
    pub auth: AuthService,
    pub users: UserService,
    pub bookmarks: BookmarkService,
}

impl AppState {
    pub fn new(config: &AppConfig, db: Database) -> Result<Self, JwtError> {
        let tokens = TokenService::from_config(&config.security)?;
        let user_repo = UserRepository::new(db.pool().clone());
        let bookmark_repo = BookmarkRepository::new(db.pool().clone());

        Ok(Self {
            auth: AuthService::new(user_repo.clone(), tokens.clone(), config.security.bcrypt_cost),
            users: UserService::new(user_repo),
            bookmarks: BookmarkService::new(bookmark_repo),
            tokens,
            db,
        })
    }
}
