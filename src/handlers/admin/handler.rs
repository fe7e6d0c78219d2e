//! Admin handler implementations

use axum::{Json, extract::State, http::StatusCode};
use uuid::Uuid;
use validator::Validate;

use crate::{
    constants::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE},
    error::AppResult,
    handlers::extract::{AppJson, AppPath, AppQuery},
    middleware::auth::AuthenticatedUser,
    services::AdminService,
    state::AppState,
};

use super::{
    request::{CreateAnnouncementRequest, CreateProblemRequest, ListProblemsQuery, UpdateProblemRequest},
    response::{
        AnnouncementResponse, AnnouncementsListResponse, ContestTestResponse, DemoUserResponse,
        ProblemResponse, ProblemsListResponse,
    },
};

/// List up to ten contests
pub async fn test_contests(State(state): State<AppState>) -> AppResult<Json<ContestTestResponse>> {
    let contests = AdminService::test_contests(state.db()).await?;

    Ok(Json(ContestTestResponse {
        success: true,
        count: contests.len(),
        contests,
    }))
}

/// Create the demo admin account if it does not exist yet
pub async fn setup_demo_user(
    State(state): State<AppState>,
) -> AppResult<(StatusCode, Json<DemoUserResponse>)> {
    let outcome = AdminService::setup_demo_user(state.db(), &state.config().demo_user).await?;

    let (status, message) = if outcome.created {
        (StatusCode::CREATED, "Demo user created")
    } else {
        (StatusCode::OK, "Demo user already exists")
    };

    Ok((
        status,
        Json(DemoUserResponse {
            success: true,
            message,
            user_id: outcome.user_id,
        }),
    ))
}

/// List problems
pub async fn list_problems(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<ListProblemsQuery>,
) -> AppResult<Json<ProblemsListResponse>> {
    let page = query.page.unwrap_or(1).max(1);
    let per_page = query.per_page.unwrap_or(DEFAULT_PAGE_SIZE).clamp(1, MAX_PAGE_SIZE);

    let (problems, total) =
        AdminService::list_problems(state.db(), page, per_page, query.search.as_deref()).await?;

    Ok(Json(ProblemsListResponse {
        success: true,
        problems,
        total,
        page,
        per_page,
    }))
}

/// Create a problem
pub async fn create_problem(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateProblemRequest>,
) -> AppResult<(StatusCode, Json<ProblemResponse>)> {
    payload.validate()?;

    let problem = AdminService::create_problem(state.db(), payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(ProblemResponse {
            success: true,
            problem,
        }),
    ))
}

/// Get a problem
pub async fn get_problem(
    State(state): State<AppState>,
    AppPath(id): AppPath<Uuid>,
) -> AppResult<Json<ProblemResponse>> {
    let problem = AdminService::get_problem(state.db(), &id).await?;

    Ok(Json(ProblemResponse {
        success: true,
        problem,
    }))
}

/// Update a problem
pub async fn update_problem(
    State(state): State<AppState>,
    AppPath(id): AppPath<Uuid>,
    AppJson(payload): AppJson<UpdateProblemRequest>,
) -> AppResult<Json<ProblemResponse>> {
    payload.validate()?;

    let problem = AdminService::update_problem(state.db(), &id, payload).await?;

    Ok(Json(ProblemResponse {
        success: true,
        problem,
    }))
}

/// Delete a problem
pub async fn delete_problem(
    State(state): State<AppState>,
    AppPath(id): AppPath<Uuid>,
) -> AppResult<StatusCode> {
    AdminService::delete_problem(state.db(), &id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// List announcements
pub async fn list_announcements(
    State(state): State<AppState>,
) -> AppResult<Json<AnnouncementsListResponse>> {
    let announcements = AdminService::list_announcements(state.db()).await?;

    Ok(Json(AnnouncementsListResponse {
        success: true,
        announcements,
    }))
}

/// Publish an announcement as the current admin
pub async fn create_announcement(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    AppJson(payload): AppJson<CreateAnnouncementRequest>,
) -> AppResult<(StatusCode, Json<AnnouncementResponse>)> {
    payload.validate()?;

    let announcement = AdminService::create_announcement(state.db(), &auth_user.id, payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(AnnouncementResponse {
            success: true,
            announcement,
        }),
    ))
}

/// Delete an announcement
pub async fn delete_announcement(
    State(state): State<AppState>,
    AppPath(id): AppPath<Uuid>,
) -> AppResult<StatusCode> {
    AdminService::delete_announcement(state.db(), &id).await?;
    Ok(StatusCode::NO_CONTENT)
}
