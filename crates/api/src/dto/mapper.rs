//! Conversions between wire shapes and the domain user.

use domain::User;

use super::{CreateUserRequest, CreateUserResponse};

/// Maps users across the HTTP boundary.
#[derive(Debug, Clone, Copy, Default)]
pub struct UserDtoMapper;

impl UserDtoMapper {
    pub fn to_user(&self, request: CreateUserRequest) -> User {
        User::new(request.username, request.password, request.email)
    }

    /// The password is dropped here.
    pub fn to_response(&self, user: User) -> CreateUserResponse {
        CreateUserResponse {
            username: user.username().to_string(),
            email: user.email().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(username: &str, password: &str, email: &str) -> CreateUserRequest {
        CreateUserRequest {
            username: username.to_string(),
            password: password.to_string(),
            email: email.to_string(),
        }
    }

    #[test]
    fn test_to_user_copies_fields() {
        let user = UserDtoMapper.to_user(request("ana", "secret1", "ana@example.com"));
        assert_eq!(user, User::new("ana", "secret1", "ana@example.com"));
    }

    #[test]
    fn test_response_never_contains_password() {
        let mapper = UserDtoMapper;

        for req in [
            request("ana", "secret1", "ana@example.com"),
            request("", "", ""),
            request("bia", "bia", "bia"),
        ] {
            let expected = CreateUserResponse {
                username: req.username.clone(),
                email: req.email.clone(),
            };
            let response = mapper.to_response(mapper.to_user(req));
            assert_eq!(response, expected);

            let json = serde_json::to_value(&response).unwrap();
            let fields = json.as_object().unwrap();
            assert_eq!(fields.len(), 2);
            assert!(!fields.contains_key("password"));
        }
    }

    #[test]
    fn test_fields_are_not_normalized() {
        let mapper = UserDtoMapper;
        let response = mapper.to_response(mapper.to_user(request(" Ana ", "x", " ANA@Example.com")));

        assert_eq!(response.username, " Ana ");
        assert_eq!(response.email, " ANA@Example.com");
    }
}
