//! Platform statistics service

use async_trait::async_trait;
use sqlx::PgPool;

use crate::{
    db::repositories::{ContestRepository, ProblemRepository, UserRepository},
    models::{PlatformStats, StatsSource},
};

/// Source of live platform counts
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StatsProvider: Send + Sync {
    async fn platform_stats(&self) -> Result<PlatformStats, sqlx::Error>;
}

/// Counts read straight from Postgres
pub struct PgStatsProvider<'a> {
    pool: &'a PgPool,
}

impl<'a> PgStatsProvider<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StatsProvider for PgStatsProvider<'_> {
    async fn platform_stats(&self) -> Result<PlatformStats, sqlx::Error> {
        let (total_users, total_contests, total_problems, active_contests) = tokio::try_join!(
            UserRepository::count(self.pool),
            ContestRepository::count(self.pool),
            ProblemRepository::count(self.pool),
            ContestRepository::count_active(self.pool),
        )?;

        Ok(PlatformStats {
            total_users,
            total_contests,
            total_problems,
            active_contests,
        })
    }
}

/// Statistics service
pub struct StatsService;

impl StatsService {
    /// Live counts, or the fixed demo numbers when they cannot be read
    pub async fn collect(provider: &dyn StatsProvider) -> (PlatformStats, StatsSource) {
        match provider.platform_stats().await {
            Ok(stats) => (stats, StatsSource::Live),
            Err(e) => {
                tracing::warn!(error = %e, "Falling back to demo statistics");
                (PlatformStats::demo(), StatsSource::Demo)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_live_stats_pass_through() {
        let live = PlatformStats {
            total_users: 7,
            total_contests: 2,
            total_problems: 11,
            active_contests: 1,
        };

        let mut provider = MockStatsProvider::new();
        provider
            .expect_platform_stats()
            .times(1)
            .returning(move || Ok(live));

        let (stats, source) = StatsService::collect(&provider).await;

        assert_eq!(stats, live);
        assert_eq!(source, StatsSource::Live);
    }

    #[tokio::test]
    async fn test_failure_falls_back_to_demo() {
        let mut provider = MockStatsProvider::new();
        provider
            .expect_platform_stats()
            .times(1)
            .returning(|| Err(sqlx::Error::PoolTimedOut));

        let (stats, source) = StatsService::collect(&provider).await;

        assert_eq!(stats, PlatformStats::demo());
        assert_eq!(stats.total_users, 1250);
        assert_eq!(source, StatsSource::Demo);
    }
}
