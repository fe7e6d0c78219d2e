//! Authentication middleware

use axum::{
    body::Body,
    extract::{FromRequestParts, Request, State},
    http::{HeaderMap, header::AUTHORIZATION, request::Parts},
    middleware::Next,
    response::Response,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::{
    constants::roles,
    error::{AppError, AppResult},
    services::{AuthService, auth_service::Claims},
    state::AppState,
};

/// Authenticated user extracted from the session token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: String,
    pub expires_at: DateTime<Utc>,
}

impl AuthenticatedUser {
    pub fn is_admin(&self) -> bool {
        self.role == roles::ADMIN
    }
}

impl TryFrom<Claims> for AuthenticatedUser {
    type Error = AppError;

    fn try_from(claims: Claims) -> Result<Self, Self::Error> {
        let id = Uuid::parse_str(&claims.sub).map_err(|_| AppError::InvalidToken)?;
        let expires_at = DateTime::from_timestamp(claims.exp, 0).ok_or(AppError::InvalidToken)?;

        Ok(Self {
            id,
            name: claims.name,
            email: claims.email,
            role: claims.role,
            expires_at,
        })
    }
}

impl<S> FromRequestParts<S> for AuthenticatedUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .ok_or(AppError::Unauthorized)
    }
}

/// Optional authenticated user wrapper (never fails)
pub struct OptionalAuth(pub Option<AuthenticatedUser>);

impl<S> FromRequestParts<S> for OptionalAuth
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(OptionalAuth(parts.extensions.get::<AuthenticatedUser>().cloned()))
    }
}

/// Pull the bearer token out of the Authorization header
fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|t| !t.is_empty())
}

/// Verify a token and turn its claims into a user
pub fn authenticate(token: &str, secret: &str) -> AppResult<AuthenticatedUser> {
    AuthService::verify_token(token, secret)?.try_into()
}

/// Authentication middleware
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let path = request.uri().path().to_string();

    let Some(token) = bearer_token(request.headers()) else {
        debug!(path = %path, "Auth failed: missing or malformed Authorization header");
        return Err(AppError::Unauthorized);
    };

    let user = authenticate(token, &state.config().auth.secret).map_err(|e| {
        debug!(path = %path, error = ?e, "Auth failed: token verification failed");
        e
    })?;

    debug!(path = %path, user_id = %user.id, role = %user.role, "User authenticated");

    request.extensions_mut().insert(user);
    Ok(next.run(request).await)
}

/// Optional authentication middleware (doesn't fail if no token)
pub async fn optional_auth_middleware(
    State(state): State<AppState>,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    let user = bearer_token(request.headers())
        .and_then(|token| authenticate(token, &state.config().auth.secret).ok());

    if let Some(user) = user {
        request.extensions_mut().insert(user);
    }

    next.run(request).await
}

/// Reject authenticated users that are not admins; runs after `auth_middleware`
pub async fn require_admin(
    user: AuthenticatedUser,
    request: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    if !user.is_admin() {
        return Err(AppError::Forbidden("Admin access required".to_string()));
    }
    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_bearer_token_parsing() {
        let mut headers = HeaderMap::new();
        assert_eq!(bearer_token(&headers), None);

        headers.insert(AUTHORIZATION, HeaderValue::from_static("Basic abc"));
        assert_eq!(bearer_token(&headers), None);

        headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer "));
        assert_eq!(bearer_token(&headers), None);

        headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer abc.def"));
        assert_eq!(bearer_token(&headers), Some("abc.def"));
    }

    #[test]
    fn test_claims_with_bad_subject() {
        let claims = Claims {
            sub: "not-a-uuid".to_string(),
            name: "x".to_string(),
            email: "x@example.com".to_string(),
            role: roles::USER.to_string(),
            exp: 0,
            iat: 0,
        };

        let result: Result<AuthenticatedUser, _> = claims.try_into();
        assert!(matches!(result, Err(AppError::InvalidToken)));
    }
}
