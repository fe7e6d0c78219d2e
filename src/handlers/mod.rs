//! HTTP Request Handlers
//!
//! This module contains all HTTP request handlers organized by domain.

pub mod admin;
pub mod announcements;
pub mod auth;
pub mod contests;
pub mod diagnostics;
pub mod extract;
pub mod health;
pub mod navigation;
pub mod stats;

use std::time::Duration;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    http::{StatusCode, header::CONTENT_TYPE},
    middleware,
    response::{IntoResponse, Response},
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::{
    constants::{API_BASE_PATH, MAX_REQUEST_BODY_BYTES, REQUEST_TIMEOUT_SECS},
    error::AppError,
    middleware::{auth_middleware, logging_middleware, optional_auth_middleware, require_admin},
    state::AppState,
};

/// Create all API routes
pub fn routes(state: &AppState) -> Router<AppState> {
    // Route layers run outermost-last: authenticate first, then check the role
    let admin_panel = admin::panel_routes()
        .route_layer(middleware::from_fn(require_admin))
        .route_layer(middleware::from_fn_with_state(state.clone(), auth_middleware));

    let session_aware = Router::new()
        .nest("/auth", auth::routes())
        .merge(navigation::routes())
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            optional_auth_middleware,
        ));

    let signed_in = Router::new()
        .nest("/auth", auth::protected_routes())
        .route_layer(middleware::from_fn_with_state(state.clone(), auth_middleware));

    Router::new()
        .merge(health::routes())
        .merge(diagnostics::routes())
        .merge(stats::routes())
        .merge(announcements::routes())
        .merge(session_aware)
        .merge(signed_in)
        .nest("/contests", contests::routes())
        .nest("/admin", admin::bootstrap_routes().merge(admin_panel))
}

/// Build the full application with shared middleware
pub fn router(state: AppState) -> Router {
    Router::new()
        .nest(API_BASE_PATH, routes(&state))
        .layer(middleware::from_fn(logging_middleware))
        .layer(DefaultBodyLimit::max(MAX_REQUEST_BODY_BYTES))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(REQUEST_TIMEOUT_SECS),
        ))
        .layer(middleware::map_response(envelope_timeout))
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

/// The timeout layer answers with an empty 408; give it the error body
async fn envelope_timeout(response: Response) -> Response {
    if response.status() == StatusCode::REQUEST_TIMEOUT
        && !response.headers().contains_key(CONTENT_TYPE)
    {
        return AppError::RequestTimeout.into_response();
    }
    response
}
