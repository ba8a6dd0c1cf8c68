//! User handlers.

use axum::{extract::State, response::Json, routing::post, Router};

use common::AppResult;

use crate::dto::{CreateUserRequest, CreateUserResponse};
use crate::state::AppState;

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new().route("/", post(create_user))
}

/// Create a user
#[utoipa::path(
    post,
    path = "/users",
    tag = "Users",
    request_body = CreateUserRequest,
    responses(
        (status = 200, description = "User created", body = CreateUserResponse),
        (status = 500, description = "Storage failure")
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    Json(request): Json<CreateUserRequest>,
) -> AppResult<Json<CreateUserResponse>> {
    let user = state.dto_mapper.to_user(request);
    let created = state.create_user.create_user(user).await?;
    Ok(Json(state.dto_mapper.to_response(created)))
}
