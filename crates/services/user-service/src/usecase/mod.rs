//! Application use cases.

mod create_user;

pub use create_user::CreateUserInteractor;
