//! User Service Library
//!
//! The `create user` pipeline below the HTTP boundary:
//! use case → gateway → entity mapper → repository → `users` table.
//!
//! # Known gaps
//!
//! Passwords are stored in plain text and neither `username` nor `email`
//! is unique. Both are reproduced on purpose and not patched here.

pub mod gateway;
pub mod infra;
pub mod repository;
pub mod usecase;
pub mod wiring;

use tracing::info;

use common::DatabaseConfig;

use crate::infra::Database;

pub use crate::gateway::{UserEntityMapper, UserGateway, UserRepositoryGateway};
pub use crate::repository::{UserEntity, UserRepository, UserStore};
pub use crate::usecase::CreateUserInteractor;
pub use crate::wiring::UserModule;

/// Run migrations (for CLI commands).
pub async fn run_migrations(
    config: &DatabaseConfig,
    action: MigrateAction,
) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::connect_without_migrations(config).await?;

    match action {
        MigrateAction::Up => {
            db.run_migrations().await?;
            info!("Migrations applied successfully");
        }
        MigrateAction::Down => {
            db.rollback_migration().await?;
            info!("Rolled back last migration");
        }
        MigrateAction::Status => {
            let status = db.migration_status().await?;
            for (name, applied) in status {
                let marker = if applied { "[x]" } else { "[ ]" };
                println!("{} {}", marker, name);
            }
        }
        MigrateAction::Fresh => {
            db.fresh_migrations().await?;
            info!("Database reset and migrations applied");
        }
    }

    Ok(())
}

/// Migration action type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MigrateAction {
    Up,
    Down,
    Status,
    Fresh,
}
