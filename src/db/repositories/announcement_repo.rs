//! Announcement repository

use sqlx::PgPool;
use uuid::Uuid;

use crate::{error::AppResult, models::Announcement};

/// Repository for announcement database operations
pub struct AnnouncementRepository;

impl AnnouncementRepository {
    /// Create a new announcement
    pub async fn create(
        pool: &PgPool,
        title: &str,
        body: &str,
        is_pinned: bool,
        author_id: Option<&Uuid>,
    ) -> AppResult<Announcement> {
        let announcement = sqlx::query_as::<_, Announcement>(
            r#"
            INSERT INTO announcements (title, body, is_pinned, author_id)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(title)
        .bind(body)
        .bind(is_pinned)
        .bind(author_id)
        .fetch_one(pool)
        .await?;

        Ok(announcement)
    }

    /// List announcements, pinned first then newest first
    pub async fn list(pool: &PgPool, limit: i64) -> AppResult<Vec<Announcement>> {
        let announcements = sqlx::query_as::<_, Announcement>(
            r#"
            SELECT * FROM announcements
            ORDER BY is_pinned DESC, created_at DESC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(pool)
        .await?;

        Ok(announcements)
    }

    /// Delete announcement, returning whether a row was removed
    pub async fn delete(pool: &PgPool, id: &Uuid) -> AppResult<bool> {
        let result = sqlx::query(r#"DELETE FROM announcements WHERE id = $1"#)
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
