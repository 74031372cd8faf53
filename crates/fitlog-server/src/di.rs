//! Dependency wiring.
//!
//! Components are constructed once at startup and shared behind `Arc`.
//! The builder takes the externally created database pool; everything
//! above it is derived from that handle.

use fitlog_core::{FitlogError, FitlogResult, HealthCheck};
use fitlog_repository::{DatabasePool, SqliteExerciseRepository, SqliteUserRepository};
use fitlog_rest::AppState;
use fitlog_service::{ExerciseService, ExerciseServiceImpl, UserService, UserServiceImpl};
use std::sync::Arc;
use tracing::debug;

/// Resolved application components.
#[derive(Clone)]
pub struct AppModule {
    database_pool: Arc<DatabasePool>,
    user_service: Arc<dyn UserService>,
    exercise_service: Arc<dyn ExerciseService>,
}

impl AppModule {
    /// Starts building a module.
    #[must_use]
    pub fn builder() -> AppModuleBuilder {
        AppModuleBuilder::new()
    }

    /// The shared database pool.
    #[must_use]
    pub fn database_pool(&self) -> Arc<DatabasePool> {
        Arc::clone(&self.database_pool)
    }

    /// The user registry.
    #[must_use]
    pub fn user_service(&self) -> Arc<dyn UserService> {
        Arc::clone(&self.user_service)
    }

    /// The exercise log.
    #[must_use]
    pub fn exercise_service(&self) -> Arc<dyn ExerciseService> {
        Arc::clone(&self.exercise_service)
    }

    /// Builds the HTTP state with the pool registered as a readiness check.
    #[must_use]
    pub fn app_state(&self) -> AppState {
        let pool_check: Arc<dyn HealthCheck> = self.database_pool();
        AppState::new(self.user_service(), self.exercise_service()).with_health_check(pool_check)
    }
}

impl std::fmt::Debug for AppModule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppModule")
            .field("database_pool", &self.database_pool)
            .finish_non_exhaustive()
    }
}

/// Builder for [`AppModule`].
#[derive(Debug, Default)]
pub struct AppModuleBuilder {
    database_pool: Option<Arc<DatabasePool>>,
}

impl AppModuleBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the database pool.
    #[must_use]
    pub fn with_database_pool(mut self, pool: Arc<DatabasePool>) -> Self {
        self.database_pool = Some(pool);
        self
    }

    /// Wires repositories and services on top of the pool.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if no pool was provided.
    pub fn build(self) -> FitlogResult<AppModule> {
        let database_pool = self.database_pool.ok_or_else(|| {
            FitlogError::Configuration("database pool is required".to_string())
        })?;

        let user_repository = Arc::new(SqliteUserRepository::new(Arc::clone(&database_pool)));
        let exercise_repository =
            Arc::new(SqliteExerciseRepository::new(Arc::clone(&database_pool)));

        let user_service: Arc<dyn UserService> =
            Arc::new(UserServiceImpl::new(Arc::clone(&user_repository)));
        let exercise_service: Arc<dyn ExerciseService> =
            Arc::new(ExerciseServiceImpl::new(user_repository, exercise_repository));

        debug!("Application module wired");
        Ok(AppModule {
            database_pool,
            user_service,
            exercise_service,
        })
    }
}
