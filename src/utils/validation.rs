//! Input validation utilities

use std::sync::LazyLock;

use regex::Regex;
use validator::ValidationError;

use crate::constants;

/// Lowercase, hyphen-separated problem slug
pub static SLUG_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9]+(-[a-z0-9]+)*$").expect("slug pattern is valid"));

/// Validate problem difficulty
pub fn validate_difficulty(difficulty: &str) -> Result<(), ValidationError> {
    if constants::difficulties::ALL.contains(&difficulty) {
        Ok(())
    } else {
        Err(ValidationError::new("difficulty"))
    }
}

/// Reject values that are empty once surrounding whitespace is removed
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::new("blank"))
    } else {
        Ok(())
    }
}

/// Sanitize string input (remove control characters, trim whitespace)
pub fn sanitize_string(input: &str) -> String {
    input
        .chars()
        .filter(|c| !c.is_control() || *c == '\n' || *c == '\t')
        .collect::<String>()
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_pattern() {
        assert!(SLUG_PATTERN.is_match("two-sum"));
        assert!(SLUG_PATTERN.is_match("a1"));
        assert!(!SLUG_PATTERN.is_match("Two-Sum"));
        assert!(!SLUG_PATTERN.is_match("-leading"));
        assert!(!SLUG_PATTERN.is_match("double--dash"));
        assert!(!SLUG_PATTERN.is_match(""));
    }

    #[test]
    fn test_validate_difficulty() {
        assert!(validate_difficulty("easy").is_ok());
        assert!(validate_difficulty("hard").is_ok());
        assert!(validate_difficulty("expert").is_err());
    }

    #[test]
    fn test_validate_not_blank() {
        assert!(validate_not_blank("Ada").is_ok());
        assert!(validate_not_blank(" Ada ").is_ok());
        assert!(validate_not_blank("   ").is_err());
        assert!(validate_not_blank("\t\n").is_err());
    }

    #[test]
    fn test_sanitize_string() {
        assert_eq!(sanitize_string("  hello\u{0007} "), "hello");
        assert_eq!(sanitize_string("line\nbreak"), "line\nbreak");
    }
}
