//! HTTP middleware

pub mod auth;
pub mod logging;

pub use auth::{AuthenticatedUser, OptionalAuth, auth_middleware, optional_auth_middleware, require_admin};
pub use logging::logging_middleware;
