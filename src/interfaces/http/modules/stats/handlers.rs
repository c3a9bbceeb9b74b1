//! Per-building statistics handlers

use axum::{extract::State, Json};

use crate::domain::{BuildingOccupancy, BuildingPaymentSummary};
use crate::interfaces::http::common::{ApiResponse, ApiResult};
use crate::interfaces::http::state::AppState;

#[utoipa::path(
    get,
    path = "/api/stats/building-occupancy",
    tag = "Statistics",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "One row per building", body = Vec<BuildingOccupancy>),
        (status = 401, description = "Unauthorized", body = ApiResponse<String>)
    )
)]
pub async fn building_occupancy(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<BuildingOccupancy>>> {
    Ok(Json(state.dorm.stats.building_occupancy().await?))
}

#[utoipa::path(
    get,
    path = "/api/stats/building-payments",
    tag = "Statistics",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Payment totals per building", body = Vec<BuildingPaymentSummary>),
        (status = 401, description = "Unauthorized", body = ApiResponse<String>)
    )
)]
pub async fn building_payments(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<BuildingPaymentSummary>>> {
    Ok(Json(state.dorm.stats.building_payments().await?))
}
