//! Application state for Axum handlers.

use fitlog_core::HealthCheck;
use fitlog_service::{ExerciseService, UserService};
use std::sync::Arc;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<dyn UserService>,
    pub exercise_service: Arc<dyn ExerciseService>,
    pub health_checks: Vec<Arc<dyn HealthCheck>>,
}

impl AppState {
    /// Creates a new application state.
    pub fn new(
        user_service: Arc<dyn UserService>,
        exercise_service: Arc<dyn ExerciseService>,
    ) -> Self {
        Self {
            user_service,
            exercise_service,
            health_checks: Vec::new(),
        }
    }

    /// Registers a dependency checked by the readiness endpoint.
    #[must_use]
    pub fn with_health_check(mut self, check: Arc<dyn HealthCheck>) -> Self {
        self.health_checks.push(check);
        self
    }
}
