//! Authentication API handlers

use axum::{extract::State, Json};

use super::dto::{LoginRequest, LoginResponse};
use crate::interfaces::http::common::{ApiResponse, ApiResult, ValidatedJson};
use crate::interfaces::http::state::AppState;

#[utoipa::path(
    post,
    path = "/api/login",
    tag = "Authentication",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Successful login", body = LoginResponse),
        (status = 401, description = "Invalid credentials", body = ApiResponse<String>)
    )
)]
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> ApiResult<Json<LoginResponse>> {
    let auth = state
        .users
        .login(&request.username, &request.password)
        .await?;
    Ok(Json(auth.into()))
}
