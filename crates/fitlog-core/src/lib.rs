//! # Fitlog Core
//!
//! Core types, traits, and error definitions for Fitlog.
//! This crate provides the domain model (users, exercise entries, calendar
//! dates and log filters) and the error type shared by every layer.

pub mod domain;
pub mod error;
pub mod id;
pub mod result;
pub mod traits;
pub mod validation;

pub use domain::*;
pub use error::*;
pub use id::*;
pub use result::*;
pub use traits::*;
pub use validation::*;
