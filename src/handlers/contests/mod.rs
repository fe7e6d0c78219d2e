//! Contest browsing handlers

mod handler;
pub mod response;

pub use handler::*;
pub use response::*;

use axum::{Router, routing::get};

use crate::state::AppState;

/// Contest routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handler::list_contests))
        .route("/{id}", get(handler::get_contest))
}
