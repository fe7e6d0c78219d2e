//! Utility functions

pub mod time;
pub mod validation;

pub use time::{countdown_label, format_duration};
pub use validation::{sanitize_string, validate_difficulty, validate_not_blank};
