//! Admin response DTOs

use serde::Serialize;
use uuid::Uuid;

use crate::models::{Announcement, Contest, Problem};

/// Contest table probe response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContestTestResponse {
    pub success: bool,
    pub count: usize,
    pub contests: Vec<Contest>,
}

/// Demo user bootstrap response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DemoUserResponse {
    pub success: bool,
    pub message: &'static str,
    pub user_id: Uuid,
}

/// Single problem response
#[derive(Debug, Serialize)]
pub struct ProblemResponse {
    pub success: bool,
    pub problem: Problem,
}

/// Problem list response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProblemsListResponse {
    pub success: bool,
    pub problems: Vec<Problem>,
    pub total: i64,
    pub page: u32,
    pub per_page: u32,
}

/// Single announcement response
#[derive(Debug, Serialize)]
pub struct AnnouncementResponse {
    pub success: bool,
    pub announcement: Announcement,
}

/// Announcement list response
#[derive(Debug, Serialize)]
pub struct AnnouncementsListResponse {
    pub success: bool,
    pub announcements: Vec<Announcement>,
}
