//! Create user use case.

use std::sync::Arc;

use common::AppResult;
use domain::User;

use crate::gateway::UserGateway;

/// Orchestrates the `create user` use case.
pub struct CreateUserInteractor {
    gateway: Arc<dyn UserGateway>,
}

impl CreateUserInteractor {
    /// Create new interactor with gateway
    pub fn new(gateway: Arc<dyn UserGateway>) -> Self {
        Self { gateway }
    }

    /// Persist a new user and return it as stored.
    pub async fn create_user(&self, user: User) -> AppResult<User> {
        self.gateway.create_user(user).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::MockUserGateway;
    use common::AppError;
    use mockall::predicate::eq;
    use sea_orm::DbErr;

    #[tokio::test]
    async fn test_create_user_delegates_to_gateway() {
        let user = User::new("ana", "secret1", "ana@example.com");

        let mut gateway = MockUserGateway::new();
        gateway
            .expect_create_user()
            .with(eq(user.clone()))
            .times(1)
            .returning(|user| Ok(user));

        let interactor = CreateUserInteractor::new(Arc::new(gateway));
        let result = interactor.create_user(user.clone()).await;

        assert_eq!(result.unwrap(), user);
    }

    #[tokio::test]
    async fn test_create_user_returns_gateway_result_unchanged() {
        let mut gateway = MockUserGateway::new();
        gateway
            .expect_create_user()
            .returning(|_| Ok(User::new("other", "pw", "other@example.com")));

        let interactor = CreateUserInteractor::new(Arc::new(gateway));
        let result = interactor
            .create_user(User::new("ana", "secret1", "ana@example.com"))
            .await;

        assert_eq!(result.unwrap(), User::new("other", "pw", "other@example.com"));
    }

    #[tokio::test]
    async fn test_create_user_propagates_gateway_error() {
        let mut gateway = MockUserGateway::new();
        gateway
            .expect_create_user()
            .returning(|_| Err(AppError::Database(DbErr::Custom("unique violation".to_string()))));

        let interactor = CreateUserInteractor::new(Arc::new(gateway));
        let result = interactor
            .create_user(User::new("ana", "secret1", "ana@example.com"))
            .await;

        assert!(matches!(result, Err(AppError::Database(_))));
    }
}
