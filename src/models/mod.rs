//! Domain models
//!
//! This module contains all domain models used throughout the application.

pub mod announcement;
pub mod contest;
pub mod navigation;
pub mod problem;
pub mod stats;
pub mod user;

pub use announcement::*;
pub use contest::*;
pub use navigation::*;
pub use problem::*;
pub use stats::*;
pub use user::*;
