//! Authentication response DTOs

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::{middleware::auth::AuthenticatedUser, models::User};

/// User information in auth responses
#[derive(Debug, Serialize)]
pub struct SessionUser {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: String,
}

impl From<User> for SessionUser {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            role: user.role,
        }
    }
}

impl From<AuthenticatedUser> for SessionUser {
    fn from(user: AuthenticatedUser) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            role: user.role,
        }
    }
}

/// Registration success response
#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub success: bool,
    pub user: SessionUser,
}

/// Login response carrying the signed session token
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub success: bool,
    pub token: String,
    pub token_type: &'static str,
    pub expires: DateTime<Utc>,
    pub user: SessionUser,
}

/// Active session details
#[derive(Debug, Serialize)]
pub struct Session {
    pub user: SessionUser,
    pub expires: DateTime<Utc>,
}

/// Session lookup response; `session` is null for guests
#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub success: bool,
    pub session: Option<Session>,
}

/// Logout response
#[derive(Debug, Serialize)]
pub struct LogoutResponse {
    pub success: bool,
}
