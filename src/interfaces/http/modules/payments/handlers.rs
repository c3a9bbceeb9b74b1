//! Payment API handlers

use axum::{
    extract::{Path, Query, State},
    Json,
};

use super::dto::{ListPaymentsParams, PaymentRequest};
use crate::domain::{Payment, PaymentData};
use crate::interfaces::http::common::{ApiResponse, ApiResult, Deleted, ValidatedJson};
use crate::interfaces::http::state::AppState;
use crate::shared::Listing;

#[utoipa::path(
    get,
    path = "/api/payments",
    tag = "Payments",
    security(("bearer_auth" = [])),
    params(ListPaymentsParams),
    responses(
        (status = 200, description = "Bare array, or `{items, total}` when page/pageSize is given", body = Vec<Payment>),
        (status = 401, description = "Unauthorized", body = ApiResponse<String>)
    )
)]
pub async fn list_payments(
    State(state): State<AppState>,
    Query(params): Query<ListPaymentsParams>,
) -> ApiResult<Json<Listing<Payment>>> {
    let (filter, page) = params.into_parts();
    Ok(Json(state.dorm.payments.list(filter, page).await?))
}

#[utoipa::path(
    post,
    path = "/api/payments",
    tag = "Payments",
    security(("bearer_auth" = [])),
    request_body = PaymentRequest,
    responses(
        (status = 200, description = "Payment recorded", body = Payment),
        (status = 400, description = "Invalid data or inconsistent references", body = ApiResponse<String>)
    )
)]
pub async fn create_payment(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<PaymentRequest>,
) -> ApiResult<Json<Payment>> {
    let data = PaymentData::try_from(request)?;
    Ok(Json(state.dorm.payments.create(data).await?))
}

#[utoipa::path(
    put,
    path = "/api/payments/{id}",
    tag = "Payments",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Payment ID")),
    request_body = PaymentRequest,
    responses(
        (status = 200, description = "Payment replaced", body = Payment),
        (status = 400, description = "Invalid data", body = ApiResponse<String>),
        (status = 404, description = "Not found", body = ApiResponse<String>)
    )
)]
pub async fn update_payment(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(request): ValidatedJson<PaymentRequest>,
) -> ApiResult<Json<Payment>> {
    let data = PaymentData::try_from(request)?;
    Ok(Json(state.dorm.payments.update(id, data).await?))
}

#[utoipa::path(
    delete,
    path = "/api/payments/{id}",
    tag = "Payments",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Payment ID")),
    responses(
        (status = 200, description = "Deleted", body = Deleted),
        (status = 404, description = "Not found", body = ApiResponse<String>)
    )
)]
pub async fn delete_payment(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> ApiResult<Json<Deleted>> {
    state.dorm.payments.delete(id).await?;
    Ok(Json(Deleted::new()))
}
