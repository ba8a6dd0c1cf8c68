//! Composition root for the user module.

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::gateway::{UserEntityMapper, UserGateway, UserRepositoryGateway};
use crate::repository::{UserRepository, UserStore};
use crate::usecase::CreateUserInteractor;

/// Wired user components, built once at process start.
#[derive(Clone)]
pub struct UserModule {
    pub gateway: Arc<dyn UserGateway>,
    pub create_user: Arc<CreateUserInteractor>,
}

impl UserModule {
    /// Wire the module on top of a database connection
    pub fn from_connection(db: DatabaseConnection) -> Self {
        let repo: Arc<dyn UserRepository> = Arc::new(UserStore::new(db));
        let gateway: Arc<dyn UserGateway> =
            Arc::new(UserRepositoryGateway::new(repo, UserEntityMapper));

        Self::with_gateway(gateway)
    }

    /// Wire the module around an existing gateway
    pub fn with_gateway(gateway: Arc<dyn UserGateway>) -> Self {
        let create_user = Arc::new(CreateUserInteractor::new(gateway.clone()));

        Self {
            gateway,
            create_user,
        }
    }
}
