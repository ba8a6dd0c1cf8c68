//! Gateway layer - the boundary between use cases and storage.

mod mapper;
mod user_repository_gateway;

use async_trait::async_trait;

use common::AppResult;
use domain::User;

pub use mapper::UserEntityMapper;
pub use user_repository_gateway::UserRepositoryGateway;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User gateway trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserGateway: Send + Sync {
    /// Persist a new user.
    ///
    /// An `Ok` value always describes a record that was written. Storage
    /// errors are returned as-is.
    async fn create_user(&self, user: User) -> AppResult<User>;
}
