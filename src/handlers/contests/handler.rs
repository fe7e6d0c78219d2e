//! Contest handler implementations

use axum::Json;
use chrono::Utc;

use crate::{error::AppResult, handlers::extract::AppPath, services::ContestService};

use super::response::{ContestResponse, ContestsListResponse};

/// List contest cards
pub async fn list_contests() -> Json<ContestsListResponse> {
    Json(ContestsListResponse {
        success: true,
        contests: ContestService::list_cards(Utc::now()),
    })
}

/// Get a single contest card
pub async fn get_contest(AppPath(id): AppPath<String>) -> AppResult<Json<ContestResponse>> {
    let contest = ContestService::get_card(&id, Utc::now())?;

    Ok(Json(ContestResponse {
        success: true,
        contest,
    }))
}
