//! Repository trait definitions.

use async_trait::async_trait;
use fitlog_core::{ExerciseEntry, FitlogResult, LogFilter, User, UserId};

/// User repository trait.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Saves a new user.
    async fn save(&self, user: &User) -> FitlogResult<User>;

    /// Finds a user by ID.
    async fn find_by_id(&self, id: UserId) -> FitlogResult<Option<User>>;

    /// Returns every user in registration order.
    async fn find_all(&self) -> FitlogResult<Vec<User>>;
}

/// Exercise entry repository trait.
#[async_trait]
pub trait ExerciseRepository: Send + Sync {
    /// Appends an entry.
    async fn save(&self, entry: &ExerciseEntry) -> FitlogResult<ExerciseEntry>;

    /// Returns the owner's entries matching `filter`, in insertion order.
    async fn find_by_owner(
        &self,
        owner_id: UserId,
        filter: &LogFilter,
    ) -> FitlogResult<Vec<ExerciseEntry>>;
}
