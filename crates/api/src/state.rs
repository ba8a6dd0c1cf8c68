//! Application state and HTTP-side wiring.

use std::sync::Arc;

use user_service_lib::infra::Database;
use user_service_lib::{CreateUserInteractor, UserModule};

use crate::dto::UserDtoMapper;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub create_user: Arc<CreateUserInteractor>,
    pub dto_mapper: UserDtoMapper,
    pub database: Database,
}

impl AppState {
    /// Create new app state.
    pub fn new(
        create_user: Arc<CreateUserInteractor>,
        dto_mapper: UserDtoMapper,
        database: Database,
    ) -> Self {
        Self {
            create_user,
            dto_mapper,
            database,
        }
    }

    /// Wire every component on top of a connected database.
    pub fn from_database(database: Database) -> Self {
        let users = UserModule::from_connection(database.get_connection());
        Self::new(users.create_user, UserDtoMapper, database)
    }
}
