//! SQLite repository implementations.

mod exercise_repository;
mod user_repository;

pub use exercise_repository::*;
pub use user_repository::*;

use fitlog_core::FitlogError;
use uuid::Uuid;

fn parse_stored_uuid(raw: &str) -> Result<Uuid, FitlogError> {
    Uuid::parse_str(raw).map_err(|e| FitlogError::Internal(format!("Invalid UUID in database: {e}")))
}
