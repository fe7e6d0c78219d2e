//! Authentication handler implementations

use axum::{Json, extract::State, http::StatusCode};
use validator::Validate;

use crate::{
    error::AppResult,
    handlers::extract::AppJson,
    middleware::auth::{AuthenticatedUser, OptionalAuth},
    services::AuthService,
    state::AppState,
};

use super::{
    request::{LoginRequest, RegisterRequest},
    response::{LoginResponse, LogoutResponse, RegisterResponse, Session, SessionResponse},
};

/// Register a new user
pub async fn register(
    State(state): State<AppState>,
    AppJson(payload): AppJson<RegisterRequest>,
) -> AppResult<(StatusCode, Json<RegisterResponse>)> {
    payload.validate()?;

    let user = AuthService::register(
        state.db(),
        payload.name.trim(),
        &payload.email.to_lowercase(),
        &payload.password,
    )
    .await?;

    tracing::info!(user_id = %user.id, "User registered");

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            success: true,
            user: user.into(),
        }),
    ))
}

/// Login with email and password
pub async fn login(
    State(state): State<AppState>,
    AppJson(payload): AppJson<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    payload.validate()?;

    let (user, session) = AuthService::login(
        state.db(),
        &state.config().auth,
        &payload.email.to_lowercase(),
        &payload.password,
    )
    .await?;

    Ok(Json(LoginResponse {
        success: true,
        token: session.token,
        token_type: "Bearer",
        expires: session.expires_at,
        user: user.into(),
    }))
}

/// Current session, or null for guests
pub async fn get_session(OptionalAuth(user): OptionalAuth) -> Json<SessionResponse> {
    let session = user.map(|user| Session {
        expires: user.expires_at,
        user: user.into(),
    });

    Json(SessionResponse {
        success: true,
        session,
    })
}

/// Sessions are stateless tokens; the client discards its copy
pub async fn logout(auth_user: AuthenticatedUser) -> Json<LogoutResponse> {
    tracing::debug!(user_id = %auth_user.id, "User signed out");
    Json(LogoutResponse { success: true })
}
