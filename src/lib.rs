//! Contest Arena - API layer for a competitive programming contest platform
//!
//! This library provides the HTTP API behind the contest platform's web
//! front end: contest browsing, authentication and session lookup, an admin
//! panel for problems and announcements, and a handful of deployment
//! diagnostics.
//!
//! # Architecture
//!
//! The application follows a layered architecture:
//! - **Handlers**: HTTP request handlers (thin layer)
//! - **Services**: Business logic
//! - **Repositories**: Database access
//! - **Models**: Domain models and view models

pub mod config;
pub mod constants;
pub mod db;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;

#[cfg(test)]
mod test_utils;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, AppResult};
pub use handlers::router;
pub use state::AppState;
