//! Landing page statistics

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;

use crate::{
    models::{PlatformStats, StatsSource},
    services::{PgStatsProvider, StatsService},
    state::AppState,
};

/// Statistics response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    pub success: bool,
    pub stats: PlatformStats,
    pub source: StatsSource,
}

/// Platform counts, falling back to demo numbers
pub async fn get_stats(State(state): State<AppState>) -> Json<StatsResponse> {
    let provider = PgStatsProvider::new(state.db());
    let (stats, source) = StatsService::collect(&provider).await;

    Json(StatsResponse {
        success: true,
        stats,
        source,
    })
}

/// Statistics routes
pub fn routes() -> Router<AppState> {
    Router::new().route("/stats", get(get_stats))
}
