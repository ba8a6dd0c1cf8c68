//! User domain entity.

/// A salon customer account as the application layer sees it.
///
/// Equality is by field values. There is no identity field: storage
/// identities only exist on the persistence record.
///
/// The password is carried verbatim. No hashing happens anywhere in the
/// pipeline, so it reaches the `users` table in plain text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct User {
    username: String,
    password: String,
    email: String,
}

impl User {
    /// Create a new user value
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            email: email.into(),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    /// Split the value into `(username, password, email)`.
    pub fn into_parts(self) -> (String, String, String) {
        (self.username, self.password, self.email)
    }
}
