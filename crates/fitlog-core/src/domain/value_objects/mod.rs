//! Value objects.

mod exercise_date;

pub use exercise_date::*;
