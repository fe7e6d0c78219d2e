//! Problem repository

use sqlx::PgPool;
use uuid::Uuid;

use crate::{error::AppResult, models::Problem};

/// Repository for problem database operations
pub struct ProblemRepository;

impl ProblemRepository {
    /// Create a new problem
    pub async fn create(
        pool: &PgPool,
        slug: &str,
        title: &str,
        statement: &str,
        difficulty: &str,
        time_limit_ms: i32,
        memory_limit_mb: i32,
        is_published: bool,
    ) -> AppResult<Problem> {
        let problem = sqlx::query_as::<_, Problem>(
            r#"
            INSERT INTO problems (
                slug, title, statement, difficulty,
                time_limit_ms, memory_limit_mb, is_published
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(slug)
        .bind(title)
        .bind(statement)
        .bind(difficulty)
        .bind(time_limit_ms)
        .bind(memory_limit_mb)
        .bind(is_published)
        .fetch_one(pool)
        .await?;

        Ok(problem)
    }

    /// Find problem by ID
    pub async fn find_by_id(pool: &PgPool, id: &Uuid) -> AppResult<Option<Problem>> {
        let problem = sqlx::query_as::<_, Problem>(r#"SELECT * FROM problems WHERE id = $1"#)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(problem)
    }

    /// Update problem; `None` fields keep their current value
    pub async fn update(
        pool: &PgPool,
        id: &Uuid,
        slug: Option<&str>,
        title: Option<&str>,
        statement: Option<&str>,
        difficulty: Option<&str>,
        time_limit_ms: Option<i32>,
        memory_limit_mb: Option<i32>,
        is_published: Option<bool>,
    ) -> AppResult<Option<Problem>> {
        let problem = sqlx::query_as::<_, Problem>(
            r#"
            UPDATE problems
            SET
                slug = COALESCE($2, slug),
                title = COALESCE($3, title),
                statement = COALESCE($4, statement),
                difficulty = COALESCE($5, difficulty),
                time_limit_ms = COALESCE($6, time_limit_ms),
                memory_limit_mb = COALESCE($7, memory_limit_mb),
                is_published = COALESCE($8, is_published),
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(slug)
        .bind(title)
        .bind(statement)
        .bind(difficulty)
        .bind(time_limit_ms)
        .bind(memory_limit_mb)
        .bind(is_published)
        .fetch_optional(pool)
        .await?;

        Ok(problem)
    }

    /// Delete problem, returning whether a row was removed
    pub async fn delete(pool: &PgPool, id: &Uuid) -> AppResult<bool> {
        let result = sqlx::query(r#"DELETE FROM problems WHERE id = $1"#)
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// List problems with pagination
    pub async fn list(
        pool: &PgPool,
        offset: i64,
        limit: i64,
        search: Option<&str>,
    ) -> AppResult<(Vec<Problem>, i64)> {
        let search_pattern = search.map(|s| format!("%{}%", s));

        let problems = sqlx::query_as::<_, Problem>(
            r#"
            SELECT * FROM problems
            WHERE ($1::text IS NULL OR title ILIKE $1 OR slug ILIKE $1)
            ORDER BY created_at DESC
            OFFSET $2 LIMIT $3
            "#,
        )
        .bind(&search_pattern)
        .bind(offset)
        .bind(limit)
        .fetch_all(pool)
        .await?;

        let total: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*) FROM problems
            WHERE ($1::text IS NULL OR title ILIKE $1 OR slug ILIKE $1)
            "#,
        )
        .bind(&search_pattern)
        .fetch_one(pool)
        .await?;

        Ok((problems, total))
    }

    /// Count total problems
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar(r#"SELECT COUNT(*) FROM problems"#)
            .fetch_one(pool)
            .await
    }
}
