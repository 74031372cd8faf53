//! Entity-DTO mappers.

// Single-entity mappings are From impls on the DTOs themselves.

use crate::dto::{ExerciseLogEntry, ExerciseLogResponse, UserResponse};
use fitlog_core::{ExerciseEntry, User};

/// Projects users to responses, keeping order.
#[must_use]
pub fn to_user_responses(users: Vec<User>) -> Vec<UserResponse> {
    users.into_iter().map(UserResponse::from).collect()
}

/// Builds a log response for `owner` from its filtered entries.
#[must_use]
pub fn to_log_response(owner: &User, entries: Vec<ExerciseEntry>) -> ExerciseLogResponse {
    let log: Vec<ExerciseLogEntry> = entries.into_iter().map(ExerciseLogEntry::from).collect();
    ExerciseLogResponse {
        id: owner.id,
        username: owner.username.clone(),
        count: log.len(),
        log,
    }
}
