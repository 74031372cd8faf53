//! # Fitlog Service
//!
//! Business logic service layer for Fitlog: the user registry and the
//! per-user exercise log.

pub mod dto;
pub mod exercise_service;
pub mod r#impl;
pub mod mappers;
pub mod user_service;

pub use dto::*;
pub use exercise_service::*;
pub use r#impl::{ExerciseServiceImpl, UserServiceImpl};
pub use user_service::*;
