use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Row of the `users` table.
///
/// The password hash is loaded so signin can verify it, but it is never
/// serialized into a response.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i32,
    pub email: String,
    #[serde(skip_serializing)]
    pub hash: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Partial profile update. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct EditUser {
    #[validate(email(message = "email must be an email"))]
    pub email: Option<String>,
    #[validate(length(min = 1, message = "firstName should not be empty"))]
    pub first_name: Option<String>,
    #[validate(length(min = 1, message = "lastName should not be empty"))]
    pub last_name: Option<String>,
}

impl EditUser {
    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.first_name.is_none() && self.last_name.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_user() -> User {
        User {
            id: 7,
            email: "me@example.com".to_string(),
            hash: "$2b$04$abcdefghijklmnopqrstuv".to_string(),
            first_name: Some("Ada".to_string()),
            last_name: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn serialization_strips_hash() {
        let value = serde_json::to_value(sample_user()).unwrap();
        assert!(value.get("hash").is_none());
        assert_eq!(value["email"], "me@example.com");
        assert_eq!(value["firstName"], "Ada");
        assert!(value["lastName"].is_null());
        assert!(value.get("createdAt").is_some());
    }

    #[test]
    fn edit_user_accepts_partial_camel_case_body() {
        let edit: EditUser =
            serde_json::from_value(json!({ "firstName": "Grace", "email": "g@example.com" })).unwrap();
        assert_eq!(edit.first_name.as_deref(), Some("Grace"));
        assert!(edit.last_name.is_none());
        assert!(edit.validate().is_ok());
        assert!(!edit.is_empty());
    }

    #[test]
    fn edit_user_rejects_bad_email_and_unknown_fields() {
        let edit: EditUser = serde_json::from_value(json!({ "email": "nope" })).unwrap();
        let errors = edit.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("email"));

        let unknown = serde_json::from_value::<EditUser>(json!({ "password": "x" }));
        assert!(unknown.is_err());
    }
}
