//! Admin handlers

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

/// Demo/test routes, reachable before any admin account exists
pub fn bootstrap_routes() -> Router<AppState> {
    Router::new()
        .route("/contests/test", get(handler::test_contests))
        .route("/setup-demo-user", post(handler::setup_demo_user))
}

/// Admin panel routes; callers must layer authentication and the admin check
pub fn panel_routes() -> Router<AppState> {
    Router::new()
        // Problem management
        .route(
            "/problems",
            get(handler::list_problems).post(handler::create_problem),
        )
        .route(
            "/problems/{id}",
            get(handler::get_problem)
                .put(handler::update_problem)
                .delete(handler::delete_problem),
        )
        // Announcements
        .route(
            "/announcements",
            get(handler::list_announcements).post(handler::create_announcement),
        )
        .route(
            "/announcements/{id}",
            axum::routing::delete(handler::delete_announcement),
        )
}
