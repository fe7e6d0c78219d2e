//! Authentication handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Public authentication routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(handler::register))
        .route("/login", post(handler::login))
        .route("/session", get(handler::get_session))
}

/// Routes that need a verified session
pub fn protected_routes() -> Router<AppState> {
    Router::new().route("/logout", post(handler::logout))
}
