//! User repository implementation.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection};

use super::entities::user::ActiveModel;
use super::UserEntity;
use common::AppResult;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Storage client for user records.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Persist a record and return it as stored.
    ///
    /// A record without an identity is inserted and comes back with the
    /// generated id. A record with an identity updates the existing row.
    async fn save(&self, entity: UserEntity) -> AppResult<UserEntity>;
}

/// Concrete implementation of UserRepository backed by SeaORM
pub struct UserStore {
    db: DatabaseConnection,
}

impl UserStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn save(&self, entity: UserEntity) -> AppResult<UserEntity> {
        let is_new = !entity.is_persisted();
        let active_model = ActiveModel::from(entity);

        let model = if is_new {
            active_model.insert(&self.db).await?
        } else {
            active_model.update(&self.db).await?
        };

        tracing::debug!(id = model.id, "user record saved");
        Ok(UserEntity::from(model))
    }
}
