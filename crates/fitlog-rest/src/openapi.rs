//! OpenAPI documentation configuration.

use crate::controllers::health_controller::{ComponentHealth, HealthResponse, ReadinessResponse};
use fitlog_core::{ErrorResponse, FieldError};
use fitlog_service::{
    AddExerciseRequest, CreateUserRequest, ExerciseLogEntry, ExerciseLogResponse,
    ExerciseResponse, UserResponse,
};
use utoipa::OpenApi;

/// OpenAPI documentation for the Fitlog API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Fitlog API",
        version = "0.1.0",
        description = "Users and their exercise logs",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    ),
    paths(
        crate::controllers::user_controller::create_user,
        crate::controllers::user_controller::list_users,
        crate::controllers::exercise_controller::add_exercise,
        crate::controllers::exercise_controller::get_log,
        crate::controllers::health_controller::health_check,
        crate::controllers::health_controller::readiness_check,
        crate::controllers::health_controller::liveness_check,
    ),
    components(
        schemas(
            ErrorResponse,
            FieldError,
            CreateUserRequest,
            UserResponse,
            AddExerciseRequest,
            ExerciseResponse,
            ExerciseLogEntry,
            ExerciseLogResponse,
            HealthResponse,
            ComponentHealth,
            ReadinessResponse,
        )
    ),
    tags(
        (name = "users", description = "User registration"),
        (name = "exercises", description = "Exercise logging"),
        (name = "health", description = "Health check endpoints")
    )
)]
pub struct ApiDoc;
