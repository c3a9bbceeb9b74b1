//! Student API handlers

use axum::{
    extract::{Path, Query, State},
    Json,
};

use super::dto::{ListStudentsParams, StudentRequest};
use crate::domain::{Student, StudentData};
use crate::interfaces::http::common::{ApiResponse, ApiResult, Deleted, ValidatedJson};
use crate::interfaces::http::state::AppState;
use crate::shared::Listing;

#[utoipa::path(
    get,
    path = "/api/students",
    tag = "Students",
    security(("bearer_auth" = [])),
    params(ListStudentsParams),
    responses(
        (status = 200, description = "Bare array, or `{items, total}` when page/pageSize is given", body = Vec<Student>),
        (status = 401, description = "Unauthorized", body = ApiResponse<String>)
    )
)]
pub async fn list_students(
    State(state): State<AppState>,
    Query(params): Query<ListStudentsParams>,
) -> ApiResult<Json<Listing<Student>>> {
    let (filter, page) = params.into_parts();
    Ok(Json(state.dorm.students.list(filter, page).await?))
}

#[utoipa::path(
    post,
    path = "/api/students",
    tag = "Students",
    security(("bearer_auth" = [])),
    request_body = StudentRequest,
    responses(
        (status = 200, description = "Student admitted", body = Student),
        (status = 400, description = "Invalid references, room full or duplicate student number", body = ApiResponse<String>)
    )
)]
pub async fn create_student(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<StudentRequest>,
) -> ApiResult<Json<Student>> {
    let data = StudentData::try_from(request)?;
    Ok(Json(state.dorm.students.create(data).await?))
}

#[utoipa::path(
    put,
    path = "/api/students/{id}",
    tag = "Students",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Student ID")),
    request_body = StudentRequest,
    responses(
        (status = 200, description = "Student replaced", body = Student),
        (status = 400, description = "Invalid references or room full", body = ApiResponse<String>),
        (status = 404, description = "Not found", body = ApiResponse<String>)
    )
)]
pub async fn update_student(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(request): ValidatedJson<StudentRequest>,
) -> ApiResult<Json<Student>> {
    let data = StudentData::try_from(request)?;
    Ok(Json(state.dorm.students.update(id, data).await?))
}

#[utoipa::path(
    delete,
    path = "/api/students/{id}",
    tag = "Students",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Student ID")),
    responses(
        (status = 200, description = "Deleted", body = Deleted),
        (status = 404, description = "Not found", body = ApiResponse<String>)
    )
)]
pub async fn delete_student(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> ApiResult<Json<Deleted>> {
    state.dorm.students.delete(id).await?;
    Ok(Json(Deleted::new()))
}
