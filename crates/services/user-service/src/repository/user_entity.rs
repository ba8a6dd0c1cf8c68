//! Persistence record for the `users` table.

/// Storage-side user record.
///
/// Mirrors the domain user plus the identity the database assigns on the
/// first save. `id` stays `None` until then.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserEntity {
    pub id: Option<i64>,
    pub username: String,
    pub password: String,
    pub email: String,
}

impl UserEntity {
    /// Create a record that has not been stored yet
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            username: username.into(),
            password: password.into(),
            email: email.into(),
        }
    }

    /// Check if the record has been assigned an identity
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }
}
