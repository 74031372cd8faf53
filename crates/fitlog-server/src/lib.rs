//! # Fitlog Server Library
//!
//! Wiring, logging setup and lifecycle for the Fitlog server binary.

pub mod app;
pub mod di;
pub mod logging;
pub mod startup;

pub use app::Application;
pub use di::{AppModule, AppModuleBuilder};
