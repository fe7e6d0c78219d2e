//! Header navigation for the current session

use axum::{Json, Router, routing::get};

use crate::{
    middleware::OptionalAuth,
    models::Navigation,
    services::NavigationService,
    state::AppState,
};

/// Guest links or the user menu, never both
pub async fn get_navigation(OptionalAuth(user): OptionalAuth) -> Json<Navigation> {
    Json(NavigationService::for_session(user.as_ref()))
}

/// Navigation routes; expects `optional_auth_middleware` upstream
pub fn routes() -> Router<AppState> {
    Router::new().route("/navigation", get(get_navigation))
}
