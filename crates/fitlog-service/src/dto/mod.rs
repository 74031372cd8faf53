//! Data Transfer Objects.

mod exercise_dto;
mod user_dto;

pub use exercise_dto::*;
pub use user_dto::*;
