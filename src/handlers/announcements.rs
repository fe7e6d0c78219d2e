//! Public announcement feed

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;

use crate::{error::AppResult, models::Announcement, services::AdminService, state::AppState};

/// Announcement feed response
#[derive(Debug, Serialize)]
pub struct AnnouncementFeedResponse {
    pub success: bool,
    pub announcements: Vec<Announcement>,
}

/// Pinned announcements first, then newest
pub async fn list_announcements(
    State(state): State<AppState>,
) -> AppResult<Json<AnnouncementFeedResponse>> {
    let announcements = AdminService::list_announcements(state.db()).await?;

    Ok(Json(AnnouncementFeedResponse {
        success: true,
        announcements,
    }))
}

/// Announcement routes
pub fn routes() -> Router<AppState> {
    Router::new().route("/announcements", get(list_announcements))
}
