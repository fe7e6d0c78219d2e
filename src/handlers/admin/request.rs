//! Admin request DTOs

use serde::Deserialize;
use validator::Validate;

use crate::{
    constants::{
        DEFAULT_MEMORY_LIMIT_MB, DEFAULT_TIME_LIMIT_MS, MAX_ANNOUNCEMENT_BODY_LENGTH,
        MAX_ANNOUNCEMENT_TITLE_LENGTH, MAX_MEMORY_LIMIT_MB, MAX_PROBLEM_SLUG_LENGTH,
        MAX_PROBLEM_STATEMENT_LENGTH, MAX_PROBLEM_TITLE_LENGTH, MAX_TIME_LIMIT_MS,
        MIN_MEMORY_LIMIT_MB, MIN_TIME_LIMIT_MS,
    },
    utils::validation::{SLUG_PATTERN, validate_difficulty, validate_not_blank},
};

fn default_time_limit() -> i32 {
    DEFAULT_TIME_LIMIT_MS
}

fn default_memory_limit() -> i32 {
    DEFAULT_MEMORY_LIMIT_MB
}

/// Create problem request
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateProblemRequest {
    #[validate(length(min = 1, max = MAX_PROBLEM_SLUG_LENGTH), regex(path = *SLUG_PATTERN))]
    pub slug: String,

    #[validate(
        length(min = 1, max = MAX_PROBLEM_TITLE_LENGTH),
        custom(function = validate_not_blank)
    )]
    pub title: String,

    #[validate(length(min = 1, max = MAX_PROBLEM_STATEMENT_LENGTH))]
    pub statement: String,

    /// easy, medium or hard
    #[validate(custom(function = validate_difficulty))]
    pub difficulty: String,

    #[serde(default = "default_time_limit")]
    #[validate(range(min = MIN_TIME_LIMIT_MS, max = MAX_TIME_LIMIT_MS))]
    pub time_limit_ms: i32,

    #[serde(default = "default_memory_limit")]
    #[validate(range(min = MIN_MEMORY_LIMIT_MB, max = MAX_MEMORY_LIMIT_MB))]
    pub memory_limit_mb: i32,

    #[serde(default)]
    pub is_published: bool,
}

/// Update problem request; absent fields are left unchanged
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProblemRequest {
    #[validate(length(min = 1, max = MAX_PROBLEM_SLUG_LENGTH), regex(path = *SLUG_PATTERN))]
    pub slug: Option<String>,

    #[validate(
        length(min = 1, max = MAX_PROBLEM_TITLE_LENGTH),
        custom(function = validate_not_blank)
    )]
    pub title: Option<String>,

    #[validate(length(min = 1, max = MAX_PROBLEM_STATEMENT_LENGTH))]
    pub statement: Option<String>,

    #[validate(custom(function = validate_difficulty))]
    pub difficulty: Option<String>,

    #[validate(range(min = MIN_TIME_LIMIT_MS, max = MAX_TIME_LIMIT_MS))]
    pub time_limit_ms: Option<i32>,

    #[validate(range(min = MIN_MEMORY_LIMIT_MB, max = MAX_MEMORY_LIMIT_MB))]
    pub memory_limit_mb: Option<i32>,

    pub is_published: Option<bool>,
}

/// List problems query parameters
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListProblemsQuery {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    pub search: Option<String>,
}

/// Create announcement request
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateAnnouncementRequest {
    #[validate(
        length(min = 1, max = MAX_ANNOUNCEMENT_TITLE_LENGTH),
        custom(function = validate_not_blank)
    )]
    pub title: String,

    #[validate(length(min = 1, max = MAX_ANNOUNCEMENT_BODY_LENGTH))]
    pub body: String,

    #[serde(default)]
    pub is_pinned: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn problem_json(slug: &str, difficulty: &str) -> serde_json::Value {
        serde_json::json!({
            "slug": slug,
            "title": "Two Sum",
            "statement": "Find two numbers that add up to the target.",
            "difficulty": difficulty,
        })
    }

    #[test]
    fn test_create_problem_defaults() {
        let req: CreateProblemRequest =
            serde_json::from_value(problem_json("two-sum", "easy")).unwrap();

        assert!(req.validate().is_ok());
        assert_eq!(req.time_limit_ms, DEFAULT_TIME_LIMIT_MS);
        assert_eq!(req.memory_limit_mb, DEFAULT_MEMORY_LIMIT_MB);
        assert!(!req.is_published);
    }

    #[test]
    fn test_create_problem_rejects_bad_slug_and_difficulty() {
        let req: CreateProblemRequest =
            serde_json::from_value(problem_json("Two Sum!", "easy")).unwrap();
        assert!(req.validate().is_err());

        let req: CreateProblemRequest =
            serde_json::from_value(problem_json("two-sum", "legendary")).unwrap();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_time_limit_bounds() {
        let mut value = problem_json("two-sum", "medium");
        value["timeLimitMs"] = serde_json::json!(50);
        let req: CreateProblemRequest = serde_json::from_value(value).unwrap();

        assert!(req.validate().is_err());
    }

    #[test]
    fn test_empty_update_is_valid() {
        assert!(UpdateProblemRequest::default().validate().is_ok());

        let bad = UpdateProblemRequest {
            memory_limit_mb: Some(4096),
            ..Default::default()
        };
        assert!(bad.validate().is_err());
    }
}
