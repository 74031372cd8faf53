//! Service implementations.
//!
//! Trait definitions live in the parent module (`user_service.rs`,
//! `exercise_service.rs`).

pub mod exercise_service_impl;
pub mod user_service_impl;

pub use exercise_service_impl::ExerciseServiceImpl;
pub use user_service_impl::UserServiceImpl;
