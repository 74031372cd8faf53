//! REST API controllers.

pub mod exercise_controller;
pub mod health_controller;
pub mod user_controller;

pub use health_controller::*;
