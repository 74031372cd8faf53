//! User service trait definition.

use crate::dto::{CreateUserRequest, UserResponse};
use async_trait::async_trait;
use fitlog_core::FitlogResult;

/// User service trait.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Registers a new user.
    async fn register(&self, request: CreateUserRequest) -> FitlogResult<UserResponse>;

    /// Lists all users in registration order.
    async fn list_users(&self) -> FitlogResult<Vec<UserResponse>>;
}
