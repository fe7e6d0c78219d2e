//! Business logic services

pub mod admin_service;
pub mod auth_service;
pub mod contest_service;
pub mod navigation_service;
pub mod stats_service;

pub use admin_service::AdminService;
pub use auth_service::AuthService;
pub use contest_service::ContestService;
pub use navigation_service::NavigationService;
pub use stats_service::{PgStatsProvider, StatsProvider, StatsService};
