//! Wire shapes for the users resource.

mod mapper;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub use mapper::UserDtoMapper;

/// Create user request body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CreateUserRequest {
    #[schema(example = "ana")]
    pub username: String,
    /// Stored as submitted
    #[schema(example = "secret1")]
    pub password: String,
    #[schema(example = "ana@example.com")]
    pub email: String,
}

/// Create user response body (never carries the password)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CreateUserResponse {
    #[schema(example = "ana")]
    pub username: String,
    #[schema(example = "ana@example.com")]
    pub email: String,
}
