//! OpenAPI documentation.

use utoipa::OpenApi;

use crate::dto::{CreateUserRequest, CreateUserResponse};
use crate::handlers::health_handler::{HealthResponse, ServiceHealth, ServiceStatus};

/// API documentation struct.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::user_handler::create_user,
        crate::handlers::health_handler::health_check,
    ),
    components(
        schemas(
            CreateUserRequest,
            CreateUserResponse,
            HealthResponse,
            ServiceStatus,
            ServiceHealth,
        )
    ),
    tags(
        (name = "Users", description = "Salon customer accounts"),
        (name = "Health", description = "Service health"),
    )
)]
pub struct ApiDoc;
