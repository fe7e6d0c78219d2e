//! Application-wide constants
//!
//! This module contains all constant values used throughout the application.
//! Constants are grouped by their purpose for better organization.

// =============================================================================
// SERVER DEFAULTS
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 3000;

/// Default environment name when neither NODE_ENV nor APP_ENV is set
pub const DEFAULT_ENVIRONMENT: &str = "development";

/// Environment name that switches logging to JSON output
pub const PRODUCTION_ENVIRONMENT: &str = "production";

/// Per-request timeout in seconds
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Maximum accepted request body size in bytes (1 MiB)
pub const MAX_REQUEST_BODY_BYTES: usize = 1024 * 1024;

// =============================================================================
// DATABASE DEFAULTS
// =============================================================================

/// Default maximum database connections in the pool
pub const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 10;

/// Maximum number of rows returned by the contest test query
pub const CONTEST_TEST_LIMIT: i64 = 10;

// =============================================================================
// AUTHENTICATION DEFAULTS
// =============================================================================

/// Default session (JWT) lifetime in hours
pub const DEFAULT_SESSION_EXPIRY_HOURS: i64 = 720;

/// Minimum password length
pub const MIN_PASSWORD_LENGTH: u64 = 8;

/// Maximum password length
pub const MAX_PASSWORD_LENGTH: u64 = 128;

/// Maximum display name length
pub const MAX_NAME_LENGTH: u64 = 64;

// =============================================================================
// DEMO USER
// =============================================================================

/// Default demo account email
pub const DEFAULT_DEMO_USER_EMAIL: &str = "admin@example.com";

/// Default demo account password
pub const DEFAULT_DEMO_USER_PASSWORD: &str = "admin123";

/// Default demo account display name
pub const DEFAULT_DEMO_USER_NAME: &str = "Demo Admin";

// =============================================================================
// USER ROLES
// =============================================================================

/// User role identifiers
pub mod roles {
    pub const ADMIN: &str = "admin";
    pub const USER: &str = "user";
}

// =============================================================================
// PROBLEMS
// =============================================================================

/// Problem difficulty identifiers
pub mod difficulties {
    pub const EASY: &str = "easy";
    pub const MEDIUM: &str = "medium";
    pub const HARD: &str = "hard";

    /// All difficulty levels
    pub const ALL: &[&str] = &[EASY, MEDIUM, HARD];
}

/// Minimum problem time limit in milliseconds
pub const MIN_TIME_LIMIT_MS: i32 = 100;

/// Maximum problem time limit in milliseconds
pub const MAX_TIME_LIMIT_MS: i32 = 10_000;

/// Default problem time limit in milliseconds
pub const DEFAULT_TIME_LIMIT_MS: i32 = 1000;

/// Minimum problem memory limit in megabytes
pub const MIN_MEMORY_LIMIT_MB: i32 = 16;

/// Maximum problem memory limit in megabytes
pub const MAX_MEMORY_LIMIT_MB: i32 = 1024;

/// Default problem memory limit in megabytes
pub const DEFAULT_MEMORY_LIMIT_MB: i32 = 256;

/// Maximum problem title length
pub const MAX_PROBLEM_TITLE_LENGTH: u64 = 256;

/// Maximum problem statement length
pub const MAX_PROBLEM_STATEMENT_LENGTH: u64 = 65535;

/// Maximum problem slug length
pub const MAX_PROBLEM_SLUG_LENGTH: u64 = 64;

// =============================================================================
// ANNOUNCEMENTS
// =============================================================================

/// Maximum announcement title length
pub const MAX_ANNOUNCEMENT_TITLE_LENGTH: u64 = 200;

/// Maximum announcement body length
pub const MAX_ANNOUNCEMENT_BODY_LENGTH: u64 = 10_000;

/// Number of announcements shown on the public feed
pub const PUBLIC_ANNOUNCEMENT_LIMIT: i64 = 20;

// =============================================================================
// STATISTICS
// =============================================================================

/// Fixed numbers reported when live statistics cannot be computed
pub mod demo_stats {
    pub const TOTAL_USERS: i64 = 1250;
    pub const TOTAL_CONTESTS: i64 = 48;
    pub const TOTAL_PROBLEMS: i64 = 320;
    pub const ACTIVE_CONTESTS: i64 = 3;
}

// =============================================================================
// API
// =============================================================================

/// API base path
pub const API_BASE_PATH: &str = "/api";

// =============================================================================
// PAGINATION
// =============================================================================

/// Default page size for paginated results
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Maximum page size for paginated results
pub const MAX_PAGE_SIZE: u32 = 100;
