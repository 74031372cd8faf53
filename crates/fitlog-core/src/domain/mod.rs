//! Domain entities and value objects for Fitlog.
//!
//! Users own exercise entries through a soft reference: the owner is checked
//! when an entry is written, and the store never enforces it.

pub mod coercion;
pub mod entities;
pub mod log_filter;
pub mod value_objects;

pub use coercion::*;
pub use entities::*;
pub use log_filter::*;
pub use value_objects::*;
