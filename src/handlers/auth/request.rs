//! Authentication request DTOs

use serde::Deserialize;
use validator::Validate;

use crate::{
    constants::{MAX_NAME_LENGTH, MAX_PASSWORD_LENGTH, MIN_PASSWORD_LENGTH},
    utils::validate_not_blank,
};

/// User registration request
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1, max = MAX_NAME_LENGTH), custom(function = validate_not_blank))]
    pub name: String,

    #[validate(email)]
    pub email: String,

    #[validate(length(min = MIN_PASSWORD_LENGTH, max = MAX_PASSWORD_LENGTH))]
    pub password: String,
}

/// User login request
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email)]
    pub email: String,

    #[validate(length(min = 1))]
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_validation() {
        let ok = RegisterRequest {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            password: "hunter2hunter2".to_string(),
        };
        assert!(ok.validate().is_ok());

        let short = RegisterRequest {
            password: "short".to_string(),
            ..ok
        };
        assert!(short.validate().is_err());
    }

    #[test]
    fn test_register_rejects_blank_name() {
        let req = RegisterRequest {
            name: "   ".to_string(),
            email: "ada@example.com".to_string(),
            password: "hunter2hunter2".to_string(),
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_login_requires_email() {
        let req = LoginRequest {
            email: "not-an-email".to_string(),
            password: "whatever".to_string(),
        };
        assert!(req.validate().is_err());
    }
}
