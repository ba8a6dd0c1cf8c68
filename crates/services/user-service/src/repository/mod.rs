//! Repository layer for data access.

pub mod entities;
mod user_entity;
mod user_repository;

pub use user_entity::UserEntity;
pub use user_repository::{UserRepository, UserStore};

#[cfg(any(test, feature = "test-utils"))]
pub use user_repository::MockUserRepository;
