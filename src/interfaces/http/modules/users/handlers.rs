//! Staff account handlers
//!
//! Every role may read; writes are admin-only.

use axum::{
    extract::{Path, Query, State},
    Extension, Json,
};

use super::dto::{ListUsersParams, UserDto, UserRequest};
use crate::application::UserInput;
use crate::interfaces::http::common::{ApiResponse, ApiResult, Deleted, ValidatedJson};
use crate::interfaces::http::middleware::AuthenticatedUser;
use crate::interfaces::http::state::AppState;
use crate::shared::Listing;

#[utoipa::path(
    get,
    path = "/api/users",
    tag = "Users",
    security(("bearer_auth" = [])),
    params(ListUsersParams),
    responses(
        (status = 200, description = "Bare array, or `{items, total}` when page/pageSize is given", body = Vec<UserDto>),
        (status = 401, description = "Unauthorized", body = ApiResponse<String>)
    )
)]
pub async fn list_users(
    State(state): State<AppState>,
    Query(params): Query<ListUsersParams>,
) -> ApiResult<Json<Listing<UserDto>>> {
    let (filter, page) = params.into_parts()?;
    let users = state.users.list(filter, page).await?;
    Ok(Json(users.map(UserDto::from)))
}

#[utoipa::path(
    get,
    path = "/api/users/{id}",
    tag = "Users",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "User details", body = UserDto),
        (status = 404, description = "Not found", body = ApiResponse<String>)
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> ApiResult<Json<UserDto>> {
    Ok(Json(state.users.get(id).await?.into()))
}

#[utoipa::path(
    post,
    path = "/api/users",
    tag = "Users",
    security(("bearer_auth" = [])),
    request_body = UserRequest,
    responses(
        (status = 200, description = "User created", body = UserDto),
        (status = 400, description = "Invalid data or duplicate username", body = ApiResponse<String>),
        (status = 403, description = "Caller is not an admin", body = ApiResponse<String>)
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthenticatedUser>,
    ValidatedJson(request): ValidatedJson<UserRequest>,
) -> ApiResult<Json<UserDto>> {
    caller.require_admin()?;
    let input = UserInput::try_from(request)?;
    Ok(Json(state.users.create(input).await?.into()))
}

#[utoipa::path(
    put,
    path = "/api/users/{id}",
    tag = "Users",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "User ID")),
    request_body = UserRequest,
    responses(
        (status = 200, description = "User replaced", body = UserDto),
        (status = 403, description = "Caller is not an admin", body = ApiResponse<String>),
        (status = 404, description = "Not found", body = ApiResponse<String>)
    )
)]
pub async fn update_user(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthenticatedUser>,
    Path(id): Path<i32>,
    ValidatedJson(request): ValidatedJson<UserRequest>,
) -> ApiResult<Json<UserDto>> {
    caller.require_admin()?;
    let input = UserInput::try_from(request)?;
    Ok(Json(state.users.update(id, input).await?.into()))
}

#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    tag = "Users",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "Deleted", body = Deleted),
        (status = 403, description = "Caller is not an admin", body = ApiResponse<String>),
        (status = 404, description = "Not found", body = ApiResponse<String>)
    )
)]
pub async fn delete_user(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthenticatedUser>,
    Path(id): Path<i32>,
) -> ApiResult<Json<Deleted>> {
    caller.require_admin()?;
    state.users.delete(id).await?;
    Ok(Json(Deleted::new()))
}
