//! User database entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue::{NotSet, Set};

use crate::repository::UserEntity;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub username: String,
    /// Stored as submitted, without hashing
    pub password: String,
    pub email: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Convert a stored row to the persistence record
impl From<Model> for UserEntity {
    fn from(model: Model) -> Self {
        UserEntity {
            id: Some(model.id),
            username: model.username,
            password: model.password,
            email: model.email,
        }
    }
}

/// Convert the persistence record to an active model.
///
/// A record without an identity leaves the key unset so the database
/// generates one on insert.
impl From<UserEntity> for ActiveModel {
    fn from(entity: UserEntity) -> Self {
        ActiveModel {
            id: entity.id.map_or(NotSet, Set),
            username: Set(entity.username),
            password: Set(entity.password),
            email: Set(entity.email),
        }
    }
}
