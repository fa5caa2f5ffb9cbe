// handlers/public/auth/mod.rs - Public authentication handlers
//
// Token acquisition endpoints that do not require authentication.

use serde::{Deserialize, Serialize};
use validator::Validate;

pub mod signin; // POST /auth/signin - authenticate and get JWT
pub mod signup; // POST /auth/signup - create account and get JWT

pub use signin::signin;
pub use signup::signup;

/// Body shared by signup and signin
#[derive(Debug, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct Credentials {
    #[validate(email(message = "email must be an email"))]
    pub email: String,
    #[validate(length(min = 1, message = "password should not be empty"))]
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
}
