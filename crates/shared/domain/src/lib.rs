//! Domain layer - Core business entities.
//!
//! This crate has no infrastructure dependencies. Storage identities and wire
//! formats live in the outer layers.

pub mod user;

pub use user::User;
