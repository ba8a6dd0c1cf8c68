//! Repository-backed user gateway.

use std::sync::Arc;

use async_trait::async_trait;

use common::AppResult;
use domain::User;

use super::{UserEntityMapper, UserGateway};
use crate::repository::UserRepository;

/// UserGateway implementation that stores users through a UserRepository.
pub struct UserRepositoryGateway {
    repo: Arc<dyn UserRepository>,
    mapper: UserEntityMapper,
}

impl UserRepositoryGateway {
    /// Create new gateway with repository and mapper
    pub fn new(repo: Arc<dyn UserRepository>, mapper: UserEntityMapper) -> Self {
        Self { repo, mapper }
    }
}

#[async_trait]
impl UserGateway for UserRepositoryGateway {
    async fn create_user(&self, user: User) -> AppResult<User> {
        let entity = self.mapper.to_entity(user);
        let saved = self.repo.save(entity).await?;
        Ok(self.mapper.to_domain_object(saved))
    }
}
