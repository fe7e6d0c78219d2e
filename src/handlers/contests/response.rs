//! Contest response DTOs

use serde::Serialize;

use crate::models::ContestCard;

/// Contest listing response
#[derive(Debug, Serialize)]
pub struct ContestsListResponse {
    pub success: bool,
    pub contests: Vec<ContestCard>,
}

/// Single contest response
#[derive(Debug, Serialize)]
pub struct ContestResponse {
    pub success: bool,
    pub contest: ContestCard,
}
