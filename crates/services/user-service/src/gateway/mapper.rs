//! Conversions between the domain user and the persistence record.

use domain::User;

use crate::repository::UserEntity;

/// Maps users across the storage boundary.
///
/// Both directions copy fields verbatim.
#[derive(Debug, Clone, Copy, Default)]
pub struct UserEntityMapper;

impl UserEntityMapper {
    /// Build an unsaved record from a domain user
    pub fn to_entity(&self, user: User) -> UserEntity {
        let (username, password, email) = user.into_parts();
        UserEntity::new(username, password, email)
    }

    /// Build a domain user from a record, dropping its identity
    pub fn to_domain_object(&self, entity: UserEntity) -> User {
        User::new(entity.username, entity.password, entity.email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_entity_has_no_identity() {
        let entity = UserEntityMapper.to_entity(User::new("ana", "secret1", "ana@example.com"));

        assert_eq!(entity.id, None);
        assert_eq!(entity.username, "ana");
        assert_eq!(entity.password, "secret1");
        assert_eq!(entity.email, "ana@example.com");
    }

    #[test]
    fn test_to_domain_object_ignores_identity() {
        let entity = UserEntity {
            id: Some(42),
            username: "ana".to_string(),
            password: "secret1".to_string(),
            email: "ana@example.com".to_string(),
        };

        let user = UserEntityMapper.to_domain_object(entity);
        assert_eq!(user, User::new("ana", "secret1", "ana@example.com"));
    }

    #[test]
    fn test_round_trip_preserves_user() {
        let users = [
            User::new("ana", "secret1", "ana@example.com"),
            User::new("", "", ""),
            User::new("  Bia ", "pässwörd ", "BIA@Example.COM"),
        ];

        for user in users {
            let entity = UserEntityMapper.to_entity(user.clone());
            assert_eq!(UserEntityMapper.to_domain_object(entity), user);
        }
    }
}
