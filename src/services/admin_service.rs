//! Admin service
//!
//! Demo/test operations used while bringing a deployment up, plus the
//! admin panel's problem and announcement management.

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    config::DemoUserConfig,
    constants::{CONTEST_TEST_LIMIT, PUBLIC_ANNOUNCEMENT_LIMIT, roles},
    db::repositories::{AnnouncementRepository, ContestRepository, ProblemRepository, UserRepository},
    error::{AppError, AppResult},
    handlers::admin::request::{CreateAnnouncementRequest, CreateProblemRequest, UpdateProblemRequest},
    models::{Announcement, Contest, Problem},
    services::AuthService,
    utils::sanitize_string,
};

/// Result of the demo-user bootstrap
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DemoUserOutcome {
    pub user_id: Uuid,
    pub created: bool,
}

/// Every failure of the demo-user bootstrap is reported under this name
fn demo_user_failed(source: impl std::fmt::Display) -> AppError {
    AppError::operation("Failed to set up demo user", source)
}

/// Admin service for system management
pub struct AdminService;

impl AdminService {
    /// Fetch up to ten contests to prove the contests table is reachable
    pub async fn test_contests(pool: &PgPool) -> AppResult<Vec<Contest>> {
        ContestRepository::list_recent(pool, CONTEST_TEST_LIMIT)
            .await
            .map_err(|e| AppError::operation("Failed to fetch contests", e))
    }

    /// Create the demo admin account once; later calls report the existing row
    pub async fn setup_demo_user(pool: &PgPool, demo: &DemoUserConfig) -> AppResult<DemoUserOutcome> {
        if let Some(user_id) = UserRepository::find_id_by_email(pool, &demo.email)
            .await
            .map_err(demo_user_failed)?
        {
            tracing::debug!(%user_id, "Demo user already present");
            return Ok(DemoUserOutcome {
                user_id,
                created: false,
            });
        }

        let password_hash =
            AuthService::hash_password(&demo.password).map_err(demo_user_failed)?;

        let inserted = UserRepository::insert_if_absent(
            pool,
            &demo.name,
            &demo.email,
            &password_hash,
            roles::ADMIN,
        )
        .await
        .map_err(demo_user_failed)?;

        match inserted {
            Some(user_id) => {
                tracing::info!(%user_id, email = %demo.email, "Demo user created");
                Ok(DemoUserOutcome {
                    user_id,
                    created: true,
                })
            }
            // Another request inserted the row between our lookup and insert
            None => {
                let user_id = UserRepository::find_id_by_email(pool, &demo.email)
                    .await
                    .map_err(demo_user_failed)?
                    .ok_or_else(|| demo_user_failed("demo user vanished after conflict"))?;

                Ok(DemoUserOutcome {
                    user_id,
                    created: false,
                })
            }
        }
    }

    /// List problems for the admin table
    pub async fn list_problems(
        pool: &PgPool,
        page: u32,
        per_page: u32,
        search: Option<&str>,
    ) -> AppResult<(Vec<Problem>, i64)> {
        let offset = (page.saturating_sub(1) as i64) * per_page as i64;
        ProblemRepository::list(pool, offset, per_page as i64, search).await
    }

    /// Get one problem
    pub async fn get_problem(pool: &PgPool, id: &Uuid) -> AppResult<Problem> {
        ProblemRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Problem not found".to_string()))
    }

    /// Create a problem
    pub async fn create_problem(pool: &PgPool, payload: CreateProblemRequest) -> AppResult<Problem> {
        let result = ProblemRepository::create(
            pool,
            &payload.slug,
            &sanitize_string(&payload.title),
            &payload.statement,
            &payload.difficulty,
            payload.time_limit_ms,
            payload.memory_limit_mb,
            payload.is_published,
        )
        .await;

        match result {
            Err(AppError::AlreadyExists(_)) => Err(AppError::AlreadyExists(format!(
                "Problem slug '{}' is taken",
                payload.slug
            ))),
            other => other,
        }
    }

    /// Apply a partial update to a problem
    pub async fn update_problem(
        pool: &PgPool,
        id: &Uuid,
        payload: UpdateProblemRequest,
    ) -> AppResult<Problem> {
        let title = payload.title.as_deref().map(sanitize_string);

        ProblemRepository::update(
            pool,
            id,
            payload.slug.as_deref(),
            title.as_deref(),
            payload.statement.as_deref(),
            payload.difficulty.as_deref(),
            payload.time_limit_ms,
            payload.memory_limit_mb,
            payload.is_published,
        )
        .await?
        .ok_or_else(|| AppError::NotFound("Problem not found".to_string()))
    }

    /// Delete a problem
    pub async fn delete_problem(pool: &PgPool, id: &Uuid) -> AppResult<()> {
        if !ProblemRepository::delete(pool, id).await? {
            return Err(AppError::NotFound("Problem not found".to_string()));
        }
        Ok(())
    }

    /// List announcements for the admin panel
    pub async fn list_announcements(pool: &PgPool) -> AppResult<Vec<Announcement>> {
        AnnouncementRepository::list(pool, PUBLIC_ANNOUNCEMENT_LIMIT).await
    }

    /// Publish an announcement
    pub async fn create_announcement(
        pool: &PgPool,
        author_id: &Uuid,
        payload: CreateAnnouncementRequest,
    ) -> AppResult<Announcement> {
        AnnouncementRepository::create(
            pool,
            &sanitize_string(&payload.title),
            &payload.body,
            payload.is_pinned,
            Some(author_id),
        )
        .await
    }

    /// Remove an announcement
    pub async fn delete_announcement(pool: &PgPool, id: &Uuid) -> AppResult<()> {
        if !AnnouncementRepository::delete(pool, id).await? {
            return Err(AppError::NotFound("Announcement not found".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_demo_user_failures_share_one_error() {
        let hashing = demo_user_failed(AppError::Internal(anyhow::anyhow!("hashing failed")));
        let database = demo_user_failed(sqlx::Error::PoolTimedOut);

        for err in [hashing, database] {
            assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
            assert_eq!(err.error_code(), "OPERATION_FAILED");
            assert!(matches!(
                err,
                AppError::Operation { ref error, .. } if error == "Failed to set up demo user"
            ));
        }
    }
}
