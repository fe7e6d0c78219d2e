//! Application configuration management
//!
//! This module handles loading and validating configuration from environment variables.
//! All configuration is loaded at startup and validated before the application runs.

use std::env;
use std::sync::LazyLock;

use serde::Serialize;

use crate::constants::{
    DEFAULT_DATABASE_MAX_CONNECTIONS, DEFAULT_DEMO_USER_EMAIL, DEFAULT_DEMO_USER_NAME,
    DEFAULT_DEMO_USER_PASSWORD, DEFAULT_ENVIRONMENT, DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT,
    DEFAULT_SESSION_EXPIRY_HOURS, PRODUCTION_ENVIRONMENT,
};

/// Global application configuration (lazily initialized)
pub static CONFIG: LazyLock<Config> = LazyLock::new(|| {
    Config::from_env().expect("Failed to load configuration from environment")
});

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    pub demo_user: DemoUserConfig,
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub environment: String,
    pub rust_log: String,
}

/// Database configuration
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

/// Session signing configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    pub secret: String,
    pub session_expiry_hours: i64,
}

/// Bootstrap admin account
#[derive(Debug, Clone)]
pub struct DemoUserConfig {
    pub email: String,
    pub password: String,
    pub name: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Ok(Self {
            server: ServerConfig::from_env()?,
            database: DatabaseConfig::from_env()?,
            auth: AuthConfig::from_env()?,
            demo_user: DemoUserConfig::from_env(),
        })
    }

    /// Whether logs should be emitted as JSON
    pub fn is_production(&self) -> bool {
        self.server.environment == PRODUCTION_ENVIRONMENT
    }
}

impl ServerConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            host: env::var("SERVER_HOST").unwrap_or_else(|_| DEFAULT_SERVER_HOST.to_string()),
            port: env::var("SERVER_PORT")
                .unwrap_or_else(|_| DEFAULT_SERVER_PORT.to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("SERVER_PORT".to_string()))?,
            environment: environment_name(),
            rust_log: env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

impl DatabaseConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            url: required("DATABASE_URL")?,
            max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                .unwrap_or_else(|_| DEFAULT_DATABASE_MAX_CONNECTIONS.to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("DATABASE_MAX_CONNECTIONS".to_string()))?,
        })
    }
}

impl AuthConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            secret: required("AUTH_SECRET")?,
            session_expiry_hours: env::var("SESSION_EXPIRY_HOURS")
                .unwrap_or_else(|_| DEFAULT_SESSION_EXPIRY_HOURS.to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("SESSION_EXPIRY_HOURS".to_string()))?,
        })
    }
}

impl DemoUserConfig {
    fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Emails are stored lowercased, matching how login normalizes them
    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            email: lookup("DEMO_USER_EMAIL")
                .map(|email| email.trim().to_lowercase())
                .unwrap_or_else(|| DEFAULT_DEMO_USER_EMAIL.to_string()),
            password: lookup("DEMO_USER_PASSWORD")
                .unwrap_or_else(|| DEFAULT_DEMO_USER_PASSWORD.to_string()),
            name: lookup("DEMO_USER_NAME").unwrap_or_else(|| DEFAULT_DEMO_USER_NAME.to_string()),
        }
    }
}

impl Default for DemoUserConfig {
    fn default() -> Self {
        Self {
            email: DEFAULT_DEMO_USER_EMAIL.to_string(),
            password: DEFAULT_DEMO_USER_PASSWORD.to_string(),
            name: DEFAULT_DEMO_USER_NAME.to_string(),
        }
    }
}

/// Snapshot of which deployment variables are visible to the process
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvironmentReport {
    pub has_database_url: bool,
    pub has_auth_secret: bool,
    pub node_env: Option<String>,
}

impl EnvironmentReport {
    /// Inspect the live process environment
    pub fn capture() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a report from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let present = |key: &str| lookup(key).is_some_and(|v| !v.is_empty());

        Self {
            has_database_url: present("DATABASE_URL"),
            has_auth_secret: present("AUTH_SECRET"),
            node_env: lookup("NODE_ENV")
                .filter(|v| !v.is_empty())
                .or_else(|| lookup("APP_ENV").filter(|v| !v.is_empty())),
        }
    }
}

fn required(key: &str) -> Result<String, ConfigError> {
    match env::var(key) {
        Ok(value) if !value.is_empty() => Ok(value),
        _ => Err(ConfigError::Missing(key.to_string())),
    }
}

fn environment_name() -> String {
    env::var("NODE_ENV")
        .or_else(|_| env::var("APP_ENV"))
        .unwrap_or_else(|_| DEFAULT_ENVIRONMENT.to_string())
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(String),

    #[error("Invalid value for environment variable: {0}")]
    InvalidValue(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_report_with_everything_set() {
        let report = EnvironmentReport::from_lookup(lookup_from(&[
            ("DATABASE_URL", "postgres://localhost/arena"),
            ("AUTH_SECRET", "s3cret"),
            ("NODE_ENV", "production"),
        ]));

        assert!(report.has_database_url);
        assert!(report.has_auth_secret);
        assert_eq!(report.node_env.as_deref(), Some("production"));
    }

    #[test]
    fn test_empty_values_count_as_missing() {
        let report = EnvironmentReport::from_lookup(lookup_from(&[
            ("DATABASE_URL", ""),
            ("APP_ENV", "staging"),
        ]));

        assert!(!report.has_database_url);
        assert!(!report.has_auth_secret);
        assert_eq!(report.node_env.as_deref(), Some("staging"));
    }

    #[test]
    fn test_report_serializes_camel_case() {
        let report = EnvironmentReport::from_lookup(lookup_from(&[]));
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["hasDatabaseUrl"], false);
        assert_eq!(json["hasAuthSecret"], false);
        assert!(json["nodeEnv"].is_null());
    }

    #[test]
    fn test_demo_user_email_is_lowercased() {
        let demo = DemoUserConfig::from_lookup(lookup_from(&[
            ("DEMO_USER_EMAIL", " Admin@Example.COM "),
            ("DEMO_USER_NAME", "Ops"),
        ]));

        assert_eq!(demo.email, "admin@example.com");
        assert_eq!(demo.name, "Ops");
        assert_eq!(demo.password, "admin123");
    }

    #[test]
    fn test_demo_user_defaults() {
        let demo = DemoUserConfig::default();
        assert_eq!(demo.email, "admin@example.com");
        assert_eq!(demo.name, "Demo Admin");
    }
}
