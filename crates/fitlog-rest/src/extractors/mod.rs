//! Custom Axum extractors.

mod form;
mod owner;

pub use form::*;
pub use owner::*;
