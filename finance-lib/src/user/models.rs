use finance_repo::user_repo::{NewUser, User, UserId};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Body of `POST /users`. Every field is required.
#[derive(Deserialize, Validate, Clone, Debug)]
pub struct UserFields {
    #[serde(rename = "Username", alias = "username")]
    #[validate(length(min = 1))]
    pub username: String,
    #[serde(rename = "Email", alias = "email")]
    #[validate(length(min = 1))]
    pub email: String,
    #[serde(rename = "Password", alias = "password")]
    #[validate(length(min = 1))]
    pub password: String,
}

impl From<UserFields> for NewUser {
    fn from(fields: UserFields) -> Self {
        NewUser::new(fields.username, fields.email, fields.password)
    }
}

/// Body of `PUT /users/{id}`. Any field may be left out.
#[derive(Deserialize, Validate, Clone, Debug, Default)]
pub struct UserPatch {
    #[serde(rename = "Username", alias = "username")]
    #[validate(length(min = 1))]
    pub username: Option<String>,
    #[serde(rename = "Email", alias = "email")]
    #[validate(length(min = 1))]
    pub email: Option<String>,
    #[serde(rename = "Password", alias = "password")]
    #[validate(length(min = 1))]
    pub password: Option<String>,
}

impl UserPatch {
    /// Overwrites every field present in the patch and keeps the rest. The id
    /// is never touched.
    pub fn apply(self, user: &mut User) {
        if let Some(username) = self.username {
            user.username = username;
        }
        if let Some(email) = self.email {
            user.email = email;
        }
        if let Some(password) = self.password {
            user.password = password;
        }
    }
}

/// A user as clients see it: everything but the password.
#[derive(Serialize, Clone, PartialEq, Debug)]
pub struct UserResponse {
    #[serde(rename = "UserID")]
    pub id: UserId,
    #[serde(rename = "Username")]
    pub username: String,
    #[serde(rename = "Email")]
    pub email: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        UserResponse {
            id: user.id,
            username: user.username,
            email: user.email,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stored_user() -> User {
        User::new(
            7,
            "johndoe".to_string(),
            "johndoe@example.com".to_string(),
            "secret".to_string(),
        )
    }

    #[test]
    fn empty_patch_keeps_everything() {
        let mut user = stored_user();
        UserPatch::default().apply(&mut user);
        assert_eq!(user, stored_user());
    }

    #[test]
    fn patch_overwrites_present_fields_only() {
        let mut user = stored_user();
        let patch: UserPatch =
            serde_json::from_str(r#"{"Email": "john_updated@example.com"}"#).unwrap();
        patch.apply(&mut user);

        assert_eq!(user.id, 7);
        assert_eq!(user.username, "johndoe");
        assert_eq!(user.email, "john_updated@example.com");
        assert_eq!(user.password, "secret");
    }

    #[test]
    fn patch_rejects_empty_values() {
        let patch: UserPatch = serde_json::from_str(r#"{"Username": ""}"#).unwrap();
        assert!(patch.validate().is_err());
    }

    #[test]
    fn fields_accept_lowercase_names() {
        let fields: UserFields = serde_json::from_str(
            r#"{"username": "johndoe", "email": "j@example.com", "password": "x"}"#,
        )
        .unwrap();
        assert!(fields.validate().is_ok());
        assert_eq!(fields.username, "johndoe");
    }

    #[test]
    fn response_omits_password() {
        let response = serde_json::to_value(UserResponse::from(stored_user())).unwrap();
        assert_eq!(
            response,
            serde_json::json!({
                "UserID": 7,
                "Username": "johndoe",
                "Email": "johndoe@example.com",
            })
        );
    }
}
