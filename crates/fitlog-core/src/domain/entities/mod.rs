//! Domain entities.

mod exercise;
mod user;

pub use exercise::*;
pub use user::*;
