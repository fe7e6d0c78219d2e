//! Announcement model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Announcement database model
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Announcement {
    pub id: Uuid,
    pub title: String,
    pub body: String,
    pub is_pinned: bool,
    pub author_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}
