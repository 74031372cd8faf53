//! User-related DTOs.

use fitlog_core::{User, UserId};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request to register a new user.
///
/// The username is taken as given; a missing field registers an empty name.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct CreateUserRequest {
    #[serde(default)]
    pub username: String,
}

impl CreateUserRequest {
    /// Creates a request for `username`.
    #[must_use]
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
        }
    }
}

/// User response DTO.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    #[serde(rename = "_id")]
    #[schema(value_type = String, example = "01929c3e-7a4b-7c1d-9e2f-3a4b5c6d7e8f")]
    pub id: UserId,
    pub username: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
        }
    }
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
        }
    }
}
