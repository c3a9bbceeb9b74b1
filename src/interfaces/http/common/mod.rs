//! Response envelope and error rendering shared by every handler.

mod validated_json;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::{error, warn};
use utoipa::ToSchema;

use crate::domain::DomainError;

pub use validated_json::{ValidatedJson, ValidatedJsonRejection};

/// Error envelope: `{"success": false, "data": null, "error": "..."}`.
///
/// Successful calls return the record, list or page directly.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    pub success: bool,
    /// Payload; `null` on error
    pub data: Option<T>,
    /// Localized error text; omitted on success
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

/// Body of a successful delete: `{"ok": true}`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct Deleted {
    pub ok: bool,
}

impl Deleted {
    pub fn new() -> Self {
        Self { ok: true }
    }
}

impl Default for Deleted {
    fn default() -> Self {
        Self::new()
    }
}

/// A `DomainError` on its way out of a handler.
#[derive(Debug)]
pub struct ApiError(pub DomainError);

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Status code for each error kind.
pub fn status_for(err: &DomainError) -> StatusCode {
    match err {
        DomainError::NotFound { .. } => StatusCode::NOT_FOUND,
        DomainError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
        DomainError::Forbidden(_) => StatusCode::FORBIDDEN,
        DomainError::Persistence { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        _ => StatusCode::BAD_REQUEST,
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = status_for(&self.0);
        if status.is_server_error() {
            error!("Request failed: {}", self.0);
        } else {
            warn!("Request rejected: {}", self.0);
        }
        let body = ApiResponse::<()>::error(self.0.user_message());
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_mapping() {
        assert_eq!(
            status_for(&DomainError::not_found("Room", 1)),
            StatusCode::NOT_FOUND
        );
        assert_eq!(status_for(&DomainError::RoomFull(None)), StatusCode::BAD_REQUEST);
        assert_eq!(
            status_for(&DomainError::DuplicateKey("x".into())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_for(&DomainError::RoomNotFound(Some(1))),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_for(&DomainError::Unauthorized("x".into())),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            status_for(&DomainError::persistence("删除失败", "io")),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn error_envelope_has_null_data() {
        let body = serde_json::to_value(ApiResponse::<()>::error("寝室人数已满")).unwrap();
        assert_eq!(
            body,
            serde_json::json!({"success": false, "data": null, "error": "寝室人数已满"})
        );
    }
}
