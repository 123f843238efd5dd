use serde::{Deserialize, Serialize};

use crate::domain::UserId;

pub const USERS_ROUTE: &str = "/users";
pub const DELETED_MESSAGE: &str = "User successfully deleted";

/// Path of a single user for update and delete.
pub fn user_route(id: impl std::fmt::Display) -> String {
    format!("{USERS_ROUTE}/{id}")
}

/// Path of the single-user lookup, which the service exposes in singular form.
pub fn user_lookup_route(id: UserId) -> String {
    format!("/user/{id}")
}

/// Body of `POST /users`. The service assigns the identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub surname: String,
    pub age: i64,
}

/// Body of `PUT /users/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<UserId>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub surname: String,
    #[serde(default)]
    pub age: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteUserResponse {
    pub message: String,
}

impl DeleteUserResponse {
    pub fn deleted() -> Self {
        Self {
            message: DELETED_MESSAGE.to_string(),
        }
    }
}
