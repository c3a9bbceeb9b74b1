//! Room API handlers

use axum::{
    extract::{Path, Query, State},
    Json,
};

use super::dto::{ListRoomsParams, RoomRequest};
use crate::domain::{Room, RoomData};
use crate::interfaces::http::common::{ApiResponse, ApiResult, Deleted, ValidatedJson};
use crate::interfaces::http::state::AppState;
use crate::shared::Listing;

#[utoipa::path(
    get,
    path = "/api/rooms",
    tag = "Rooms",
    security(("bearer_auth" = [])),
    params(ListRoomsParams),
    responses(
        (status = 200, description = "Bare array, or `{items, total}` when page/pageSize is given", body = Vec<Room>),
        (status = 401, description = "Unauthorized", body = ApiResponse<String>)
    )
)]
pub async fn list_rooms(
    State(state): State<AppState>,
    Query(params): Query<ListRoomsParams>,
) -> ApiResult<Json<Listing<Room>>> {
    let (filter, page) = params.into_parts();
    Ok(Json(state.dorm.rooms.list(filter, page).await?))
}

#[utoipa::path(
    post,
    path = "/api/rooms",
    tag = "Rooms",
    security(("bearer_auth" = [])),
    request_body = RoomRequest,
    responses(
        (status = 200, description = "Room created", body = Room),
        (status = 400, description = "Invalid data or unknown building", body = ApiResponse<String>)
    )
)]
pub async fn create_room(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<RoomRequest>,
) -> ApiResult<Json<Room>> {
    let data = RoomData::try_from(request)?;
    Ok(Json(state.dorm.rooms.create(data).await?))
}

#[utoipa::path(
    put,
    path = "/api/rooms/{id}",
    tag = "Rooms",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Room ID")),
    request_body = RoomRequest,
    responses(
        (status = 200, description = "Room replaced", body = Room),
        (status = 400, description = "Invalid data", body = ApiResponse<String>),
        (status = 404, description = "Not found", body = ApiResponse<String>)
    )
)]
pub async fn update_room(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(request): ValidatedJson<RoomRequest>,
) -> ApiResult<Json<Room>> {
    let data = RoomData::try_from(request)?;
    Ok(Json(state.dorm.rooms.update(id, data).await?))
}

#[utoipa::path(
    delete,
    path = "/api/rooms/{id}",
    tag = "Rooms",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Room ID")),
    responses(
        (status = 200, description = "Deleted; students in the room become unassigned", body = Deleted),
        (status = 404, description = "Not found", body = ApiResponse<String>),
        (status = 500, description = "Still referenced by payments", body = ApiResponse<String>)
    )
)]
pub async fn delete_room(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> ApiResult<Json<Deleted>> {
    state.dorm.rooms.delete(id).await?;
    Ok(Json(Deleted::new()))
}
