//! User entity.

use crate::UserId;
use chrono::{DateTime, Utc};

/// A registered user. Usernames are neither unique nor validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    /// Unique identifier for the user.
    pub id: UserId,

    /// Username as supplied at registration.
    pub username: String,

    /// Registration timestamp.
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Creates a new user with a freshly assigned ID.
    #[must_use]
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            id: UserId::new(),
            username: username.into(),
            created_at: Utc::now(),
        }
    }
}
