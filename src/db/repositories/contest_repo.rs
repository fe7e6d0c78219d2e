//! Contest repository

use sqlx::PgPool;

use crate::models::Contest;

/// Repository for contest database operations
pub struct ContestRepository;

impl ContestRepository {
    /// Fetch the most recent contests, newest start first
    pub async fn list_recent(pool: &PgPool, limit: i64) -> Result<Vec<Contest>, sqlx::Error> {
        sqlx::query_as::<_, Contest>(
            r#"
            SELECT * FROM contests
            ORDER BY start_time DESC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(pool)
        .await
    }

    /// Count total contests
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar(r#"SELECT COUNT(*) FROM contests"#)
            .fetch_one(pool)
            .await
    }

    /// Count contests running right now
    pub async fn count_active(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar(
            r#"SELECT COUNT(*) FROM contests WHERE start_time <= NOW() AND end_time > NOW()"#,
        )
        .fetch_one(pool)
        .await
    }
}
