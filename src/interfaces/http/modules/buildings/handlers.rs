//! Building API handlers

use axum::{
    extract::{Path, Query, State},
    Json,
};

use super::dto::{BuildingRequest, ListBuildingsParams};
use crate::domain::{Building, BuildingData};
use crate::interfaces::http::common::{ApiResponse, ApiResult, Deleted, ValidatedJson};
use crate::interfaces::http::state::AppState;
use crate::shared::Listing;

#[utoipa::path(
    get,
    path = "/api/buildings",
    tag = "Buildings",
    security(("bearer_auth" = [])),
    params(ListBuildingsParams),
    responses(
        (status = 200, description = "Bare array, or `{items, total}` when page/pageSize is given", body = Vec<Building>),
        (status = 401, description = "Unauthorized", body = ApiResponse<String>)
    )
)]
pub async fn list_buildings(
    State(state): State<AppState>,
    Query(params): Query<ListBuildingsParams>,
) -> ApiResult<Json<Listing<Building>>> {
    let (filter, page) = params.into_parts();
    Ok(Json(state.dorm.buildings.list(filter, page).await?))
}

#[utoipa::path(
    post,
    path = "/api/buildings",
    tag = "Buildings",
    security(("bearer_auth" = [])),
    request_body = BuildingRequest,
    responses(
        (status = 200, description = "Building created", body = Building),
        (status = 400, description = "Invalid data or duplicate building number", body = ApiResponse<String>)
    )
)]
pub async fn create_building(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<BuildingRequest>,
) -> ApiResult<Json<Building>> {
    let data = BuildingData::try_from(request)?;
    Ok(Json(state.dorm.buildings.create(data).await?))
}

#[utoipa::path(
    put,
    path = "/api/buildings/{id}",
    tag = "Buildings",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Building ID")),
    request_body = BuildingRequest,
    responses(
        (status = 200, description = "Building replaced", body = Building),
        (status = 400, description = "Invalid data", body = ApiResponse<String>),
        (status = 404, description = "Not found", body = ApiResponse<String>)
    )
)]
pub async fn update_building(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(request): ValidatedJson<BuildingRequest>,
) -> ApiResult<Json<Building>> {
    let data = BuildingData::try_from(request)?;
    Ok(Json(state.dorm.buildings.update(id, data).await?))
}

#[utoipa::path(
    delete,
    path = "/api/buildings/{id}",
    tag = "Buildings",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Building ID")),
    responses(
        (status = 200, description = "Deleted", body = Deleted),
        (status = 404, description = "Not found", body = ApiResponse<String>),
        (status = 500, description = "Still referenced by rooms or payments", body = ApiResponse<String>)
    )
)]
pub async fn delete_building(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> ApiResult<Json<Deleted>> {
    state.dorm.buildings.delete(id).await?;
    Ok(Json(Deleted::new()))
}
