//! Platform statistics

use serde::Serialize;

use crate::constants::demo_stats;

/// Headline counts shown on the landing page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformStats {
    pub total_users: i64,
    pub total_contests: i64,
    pub total_problems: i64,
    pub active_contests: i64,
}

impl PlatformStats {
    /// Fixed numbers used when live counts are unavailable
    pub const fn demo() -> Self {
        Self {
            total_users: demo_stats::TOTAL_USERS,
            total_contests: demo_stats::TOTAL_CONTESTS,
            total_problems: demo_stats::TOTAL_PROBLEMS,
            active_contests: demo_stats::ACTIVE_CONTESTS,
        }
    }
}

/// Where a set of statistics came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StatsSource {
    Live,
    Demo,
}
