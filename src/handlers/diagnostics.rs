//! Deployment diagnostics
//!
//! `GET /env-test` reports which required variables the process can see,
//! `GET /test-db` round-trips a literal `SELECT 1`.

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;

use crate::{
    config::EnvironmentReport,
    db,
    error::{AppError, AppResult},
    state::AppState,
};

/// Environment probe response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvTestResponse {
    pub success: bool,
    pub environment: EnvironmentReport,
}

/// Database probe response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DbTestResponse {
    pub success: bool,
    pub message: &'static str,
    pub result: i32,
}

/// Report presence of deployment variables
pub async fn env_test() -> Json<EnvTestResponse> {
    let environment = EnvironmentReport::capture();
    tracing::debug!(?environment, "Environment probe");

    Json(EnvTestResponse {
        success: true,
        environment,
    })
}

/// Run `SELECT 1` against the pool
pub async fn test_db(State(state): State<AppState>) -> AppResult<Json<DbTestResponse>> {
    let result = db::test_connection(state.db())
        .await
        .map_err(|e| AppError::operation("Database connection failed", e))?;

    Ok(Json(DbTestResponse {
        success: true,
        message: "Database connection successful",
        result,
    }))
}

/// Diagnostic routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/env-test", get(env_test))
        .route("/test-db", get(test_db))
}
